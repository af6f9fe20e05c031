use proc_macro::TokenStream;
use derives::fancy_enum;

mod derives;

// FancyEnum adds .variant_name() and .variant_index(), ALL and from_variant_name() for unit-only enums,
// and for each #[enum_prop(k=v)] a method k() returning v
#[proc_macro_derive(FancyEnum, attributes(enum_prop))]
pub fn derive_fancy_enum(input: TokenStream) -> TokenStream
{
    fancy_enum::fancy_enum(input)
}
