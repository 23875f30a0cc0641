//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[envcfg(crate = "...")]` attribute value into a
//! `TokenStream` that replaces hardcoded `envcfg::` paths in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::envcfg` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::envcfg }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: envcfg")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("my_ns::envcfg"), "my_ns :: envcfg")]
    fn resolve_produces_expected_tokens(#[case] input: Option<&str>, #[case] expected: &str) {
        let parsed = input.and_then(|s| syn::parse_str::<syn::Path>(s).ok());
        let tokens = resolve(parsed.as_ref());
        assert_eq!(tokens.to_string(), expected);
    }
}
