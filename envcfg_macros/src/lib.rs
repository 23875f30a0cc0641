//! Procedural macros for `envcfg`.
//!
//! `#[derive(EnvCfg)]` implements `envcfg::EnvCfg` for structs with named
//! fields. Only `pub` fields take part in binding. Field attributes:
//!
//! - `#[envcfg(default = "...")]` declares a default literal. Integer, float
//!   and boolean literals are accepted and stored in their textual form.
//! - `#[envcfg(key = "NAME")]` sets the environment key; `key = "-"` or
//!   `skip` removes the field from the environment pass.
//! - `#[envcfg(nested)]` binds a field whose type also derives `EnvCfg`,
//!   addressing its fields as `field.inner`.
//!
//! Struct attributes: `#[envcfg(prefix = "APP_")]` sets the record's default
//! key prefix and `#[envcfg(crate = "path")]` points generated code at a
//! renamed `envcfg` dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `envcfg::EnvCfg`.
#[proc_macro_derive(EnvCfg, attributes(envcfg))]
pub fn derive_envcfg(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
