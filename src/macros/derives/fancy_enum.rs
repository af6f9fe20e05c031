use std::collections::{HashMap, HashSet};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr};

pub fn fancy_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream
{
    fancy_enum_impl(input.into()).into()
}

fn fancy_enum_impl(input: TokenStream) -> TokenStream
{
    let derive: DeriveInput = match syn::parse2(input)
    {
        Ok(derive) => derive,
        Err(err) => return err.to_compile_error(),
    };
    let type_name = &derive.ident;
    let (impl_generics, ty_generics, where_clause) = derive.generics.split_for_impl();

    let Data::Enum(ref data_enum) = derive.data else
    {
        return syn::Error::new_spanned(type_name, "#[derive(FancyEnum)] can only be used with enums")
            .to_compile_error();
    };
    let variants = &data_enum.variants;

    let mut name_arms = Vec::new();
    let mut index_arms = Vec::new();
    let mut unit_idents: Vec<&Ident> = Vec::new();
    let mut props: HashMap<Ident, Vec<TokenStream>> = HashMap::new();

    for (index, variant) in variants.iter().enumerate()
    {
        let variant_ident = &variant.ident;

        // todo: name override attr
        let pattern = match variant.fields
        {
            Fields::Named(_) => quote!(Self::#variant_ident{..}),
            Fields::Unnamed(_) => quote!(Self::#variant_ident(..)),
            Fields::Unit =>
            {
                unit_idents.push(variant_ident);
                quote!(Self::#variant_ident)
            },
        };

        name_arms.push(quote!(#pattern => stringify!(#variant_ident)));
        index_arms.push(quote!(#pattern => #index));

        let mut seen_keys = HashSet::new();
        for attr in &variant.attrs
        {
            if !attr.path().is_ident("enum_prop") { continue; }

            let parsed = attr.parse_nested_meta(|meta|
            {
                let prop_key = meta.path.get_ident().ok_or(meta.error("Missing property key"))?.clone();
                if !seen_keys.insert(prop_key.clone())
                {
                    return Err(meta.error(format!("duplicate enum_prop key '{prop_key}'")));
                }
                let prop_val: LitStr = meta.value()?.parse()?;

                props.entry(prop_key).or_default().push(quote!(#pattern => Some(#prop_val)));
                Ok(())
            });
            if let Err(err) = parsed
            {
                return err.to_compile_error();
            }
        }
    }

    let methods = props.iter().map(|(prop_key, prop_values)|
    {
        quote!
        {
            #[allow(unreachable_patterns)]
            pub const fn #prop_key(&self) -> Option<&'static str>
            {
                match *self
                {
                    #(#prop_values,)*
                    _ => None,
                }
            }
        }
    });

    let variants_count = variants.len();

    // lookup by name only makes sense if every variant can be built from its name alone
    let unit_methods = if !unit_idents.is_empty() && unit_idents.len() == variants_count
    {
        let name_lits = unit_idents.iter().map(|ident| LitStr::new(&ident.to_string(), ident.span()));
        quote!
        {
            pub const ALL: [Self; #variants_count] = [#(Self::#unit_idents),*];

            pub fn from_variant_name(name: &str) -> Option<Self>
            {
                match name
                {
                    #(#name_lits => Some(Self::#unit_idents),)*
                    _ => None,
                }
            }
        }
    }
    else
    {
        TokenStream::new()
    };

    let expanded = quote!
    {
        impl #impl_generics #type_name #ty_generics #where_clause
        {
            pub const fn variant_name(&self) -> &'static str
            {
                match *self
                {
                    #(#name_arms),*
                }
            }

            pub const fn variant_index(&self) -> usize
            {
                match *self
                {
                    #(#index_arms),*
                }
            }

            pub const fn variant_count() -> usize
            {
                #variants_count
            }

            #unit_methods

            #(#methods)*
        }
    };

    expanded
}
