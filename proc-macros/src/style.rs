use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn derive_specified_as_computed(input: syn::DeriveInput) -> TokenStream {
    let name = &input.ident;
    quote! {
        impl crate::style::values::SpecifiedValue for #name {
            type SpecifiedValue = Self;
        }

        impl crate::style::values::FromSpecified for #name {
            fn from_specified(
                specified: &Self,
                _context: &crate::style::values::CascadeContext,
            ) -> Self {
                std::clone::Clone::clone(specified)
            }
        }
    }
}

/// Keywords are the variant names in kebab-case: `InlineBlock` parses `inline-block`.
pub(crate) fn derive_parse(input: syn::DeriveInput) -> TokenStream {
    let name = &input.ident;

    let variants: Vec<_> = match input.data {
        syn::Data::Enum(data) => data
            .variants
            .into_iter()
            .map(|variant| {
                if !matches!(variant.fields, syn::Fields::Unit) {
                    panic!("derive(Parse) only supports unit variants")
                }
                variant.ident
            })
            .collect(),
        _ => panic!("derive(Parse) only supports enums"),
    };

    let names: Vec<_> = variants
        .iter()
        .map(|ident| {
            let mut name = String::new();
            for c in ident.to_string().chars() {
                if c.is_ascii_lowercase() {
                    name.push(c)
                } else if c.is_ascii_uppercase() {
                    if !name.is_empty() {
                        name.push('-')
                    }
                    name.push(c.to_ascii_lowercase())
                } else {
                    panic!("Unsupported variant name char {:?}", c)
                }
            }
            name
        })
        .collect();

    quote! {
        impl crate::style::values::Parse for #name {
            fn parse<'i, 't>(parser: &mut cssparser::Parser<'i, 't>)
                -> Result<Self, crate::style::errors::PropertyParseError<'i>>
            {
                let ident = parser.expect_ident()?;
                match_ignore_ascii_case! { &*ident,
                    #(
                        #names => return Ok(#name::#variants),
                    )*
                    _ => {}
                }
                let token = cssparser::Token::Ident(ident.clone());
                Err(parser.new_unexpected_token_error(token))
            }
        }
    }
}
