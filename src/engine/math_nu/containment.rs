use std::fmt::{Display, Formatter};
use std::str::FromStr;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use nab_nu::UnknownVariantError;
use proc_macros_nu::FancyEnum;

/// How two bounding volumes relate to each other
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FancyEnum, Encode, Decode, Serialize, Deserialize)]
pub enum ContainmentType
{
    /// The volumes share no points
    Disjoint,
    /// One volume completely encloses the other
    Contains,
    /// The volumes partially overlap
    Intersects,
}
impl ContainmentType
{
    #[inline] #[must_use] pub const fn is_disjoint(self) -> bool { matches!(self, Self::Disjoint) }
    #[inline] #[must_use] pub const fn is_contains(self) -> bool { matches!(self, Self::Contains) }
    #[inline] #[must_use] pub const fn is_intersects(self) -> bool { matches!(self, Self::Intersects) }

    // the volumes share at least some extent
    #[inline] #[must_use]
    pub const fn overlaps(self) -> bool
    {
        matches!(self, Self::Contains | Self::Intersects)
    }
}
impl Display for ContainmentType
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.variant_name())
    }
}
impl FromStr for ContainmentType
{
    type Err = UnknownVariantError;

    // case sensitive, must match the variant name exactly
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        Self::from_variant_name(s).ok_or_else(|| UnknownVariantError::new::<Self>(s))
    }
}
impl log::kv::ToValue for ContainmentType
{
    fn to_value(&self) -> log::kv::Value<'_>
    {
        log::kv::Value::from(self.variant_name())
    }
}

// Classifies how `other` relates to this volume.
// Implementors decide how boundary cases (touching faces, identical extents) are classified
pub trait Contains<TOther>
{
    fn containment(&self, other: TOther) -> ContainmentType;

    #[inline]
    fn fully_contains(&self, other: TOther) -> bool
    {
        self.containment(other).is_contains()
    }

    #[inline]
    fn overlaps(&self, other: TOther) -> bool
    {
        self.containment(other).overlaps()
    }
}
