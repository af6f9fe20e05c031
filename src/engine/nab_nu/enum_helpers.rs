use std::error::Error;
use std::fmt::{Display, Formatter};
use crate::utils::ShortTypeName;

// Returned when parsing an enum from a name that matches none of its variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError
{
    pub type_name: &'static str,
    pub input: String,
}
impl UnknownVariantError
{
    #[must_use]
    pub fn new<TEnum>(input: &str) -> Self
    {
        Self
        {
            type_name: TEnum::short_type_name(),
            input: input.to_owned(),
        }
    }
}
impl Display for UnknownVariantError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "unknown {} variant {:?}", self.type_name, self.input)
    }
}
impl Error for UnknownVariantError { }
