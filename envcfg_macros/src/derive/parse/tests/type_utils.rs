//! Tests for type rendering helpers.

use super::super::type_utils::type_name;
use anyhow::{Result, ensure};
use rstest::rstest;
use syn::{Type, parse_quote};

#[rstest]
#[case(parse_quote!(Box<dyn std::any::Any>), "Box<dyn std::any::Any>")]
#[case(
    parse_quote!(std::collections::HashMap<String, u8>),
    "std::collections::HashMap<String, u8>"
)]
#[case(parse_quote!(Vec<Option<u8>>), "Vec<Option<u8>>")]
#[case(parse_quote!(::chrono::Duration), "::chrono::Duration")]
#[case(parse_quote!(Port), "Port")]
#[case(parse_quote!(u32), "u32")]
fn type_name_renders_source_form(#[case] ty: Type, #[case] expected: &str) -> Result<()> {
    let rendered = type_name(&ty);
    ensure!(rendered == expected, "expected {expected}, got {rendered}");
    Ok(())
}
