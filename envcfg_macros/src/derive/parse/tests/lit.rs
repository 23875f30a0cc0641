//! Tests for literal parsing helpers.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::Attribute;

#[test]
fn lit_str_parses_string_values() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[envcfg(key = "HOST")]);
    let mut observed = None;
    attr.parse_nested_meta(|meta| {
        let s = lit_str(&meta, "key")?;
        observed = Some(s.value());
        Ok(())
    })
    .map_err(|err| anyhow!("expected attribute parsing to succeed: {err}"))?;
    let value = observed.ok_or_else(|| anyhow!("key attribute callback was not invoked"))?;
    ensure!(value == "HOST", "unexpected key value: {value}");
    Ok(())
}

#[test]
fn lit_str_rejects_numbers() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[envcfg(key = 5)]);
    let Err(err) = attr.parse_nested_meta(|meta| lit_str(&meta, "key").map(drop)) else {
        return Err(anyhow!("expected numeric key to be rejected"));
    };
    ensure!(
        err.to_string() == "key must be a string",
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
#[case::string(syn::parse_quote!(#[envcfg(default = "1m")]), "1m")]
#[case::integer(syn::parse_quote!(#[envcfg(default = 42)]), "42")]
#[case::suffixed_integer(syn::parse_quote!(#[envcfg(default = 8u16)]), "8")]
#[case::float(syn::parse_quote!(#[envcfg(default = 36.6)]), "36.6")]
#[case::boolean(syn::parse_quote!(#[envcfg(default = true)]), "true")]
fn lit_text_renders_literals(#[case] attr: Attribute, #[case] expected: &str) -> Result<()> {
    let mut observed = None;
    attr.parse_nested_meta(|meta| {
        observed = Some(lit_text(&meta, "default")?);
        Ok(())
    })
    .map_err(|err| anyhow!("expected attribute parsing to succeed: {err}"))?;
    let value = observed.ok_or_else(|| anyhow!("default attribute callback was not invoked"))?;
    ensure!(value == expected, "expected {expected}, got {value}");
    Ok(())
}

#[test]
fn lit_text_rejects_char_literals() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[envcfg(default = 'x')]);
    let Err(err) = attr.parse_nested_meta(|meta| lit_text(&meta, "default").map(drop)) else {
        return Err(anyhow!("expected char default to be rejected"));
    };
    ensure!(
        err.to_string().contains("string, number or boolean"),
        "unexpected error: {err}"
    );
    Ok(())
}
