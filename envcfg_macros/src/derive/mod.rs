//! Expansion of `#[derive(EnvCfg)]`.
//!
//! Parsing gathers the struct's bindable fields and their attributes;
//! generation turns them into the `fields` and `assign` methods of the trait
//! implementation.

mod crate_path;
mod generate;
mod parse;


use proc_macro2::TokenStream;

pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let record = parse::parse_input(input)?;
    let krate = crate_path::resolve(record.attrs.crate_path.as_ref());
    Ok(generate::generate_impl(&record, &krate))
}
