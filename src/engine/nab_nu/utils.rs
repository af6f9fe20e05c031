// The type name without its module path, e.g. `ContainmentType` rather than `math_nu::containment::ContainmentType`.
// Generic arguments are dropped: `Option<a::Thing>` becomes `Option`
pub trait ShortTypeName
{
    fn short_type_name() -> &'static str;
}
impl<T: ?Sized> ShortTypeName for T
{
    #[inline]
    fn short_type_name() -> &'static str
    {
        let full_name = std::any::type_name::<T>();
        let type_name = match full_name.find('<')
        {
            None => full_name,
            Some(i) => &full_name[..i],
        };
        match type_name.rfind(':')
        {
            None => type_name,
            Some(i) => &type_name[(i + 1)..]
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    struct Local;

    #[test]
    fn strips_module_path()
    {
        assert_eq!(Local::short_type_name(), "Local");
        assert_eq!(u32::short_type_name(), "u32");
        assert_eq!(String::short_type_name(), "String");
    }

    #[allow(dead_code)]
    mod inner
    {
        pub struct Thing;
        pub struct Holder<T>(pub T);
    }

    #[test]
    fn drops_generic_arguments()
    {
        assert_eq!(Option::<inner::Thing>::short_type_name(), "Option");
        assert_eq!(inner::Holder::<Vec<inner::Thing>>::short_type_name(), "Holder");
        assert_eq!(inner::Holder::<u8>::short_type_name(), "Holder");
    }
}
