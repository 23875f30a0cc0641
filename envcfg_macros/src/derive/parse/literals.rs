//! Literal parsing helpers for derive attributes.

use syn::meta::ParseNestedMeta;
use syn::{Lit, LitStr};

/// Parses a literal from a field attribute using `extractor`.
///
/// `expected` describes the accepted literal kinds in the error message.
fn parse_lit<T, F>(meta: &ParseNestedMeta, key: &str, expected: &str, extractor: F) -> syn::Result<T>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be {expected}")))
}

/// Parses a string literal from a field attribute.
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    parse_lit(meta, key, "a string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}

/// Parses a literal and returns the text the coercer should see.
///
/// Strings are taken verbatim; numbers lose their type suffix and booleans
/// become `true` or `false`.
pub(crate) fn lit_text(meta: &ParseNestedMeta, key: &str) -> syn::Result<String> {
    parse_lit(
        meta,
        key,
        "a string, number or boolean literal",
        |lit| match lit {
            Lit::Str(s) => Some(s.value()),
            Lit::Int(i) => Some(i.base10_digits().to_owned()),
            Lit::Float(f) => Some(f.base10_digits().to_owned()),
            Lit::Bool(b) => Some(b.value.to_string()),
            _ => None,
        },
    )
}
