//! Derives for CSS keyword values.
//!
//! The generated code refers to `crate::style::values` and `crate::style::errors`,
//! so these derives are only usable inside the `style-lookup` crate.

extern crate proc_macro;

mod style;

#[proc_macro_derive(SpecifiedAsComputed)]
pub fn derive_specified_as_computed(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    style::derive_specified_as_computed(syn::parse_macro_input!(input as syn::DeriveInput)).into()
}

#[proc_macro_derive(Parse)]
pub fn derive_parse(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    style::derive_parse(syn::parse_macro_input!(input as syn::DeriveInput)).into()
}
