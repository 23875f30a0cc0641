//! Parsing utilities for the `EnvCfg` derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Token, parenthesized};

mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{BindableField, RecordInput, parse_input};
use literals::{lit_str, lit_text};
pub(crate) use type_utils::type_name;

const SKIP_MARKER: &str = "-";

#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Key prefix returned by the generated `EnvCfg::prefix`.
    pub prefix: Option<String>,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(EnvCfg)]`.
///
/// - `default` supplies the literal applied by the default pass.
/// - `key` names the environment variable; `"-"` is recorded as `skip`.
/// - `skip` removes the field from the environment pass.
/// - `nested` binds a field whose type itself derives `EnvCfg`.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub(crate) struct FieldAttrs {
    pub default: Option<String>,
    pub key: Option<String>,
    pub skip: bool,
    pub nested: bool,
}

impl FieldAttrs {
    pub(crate) fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Iterate all `#[envcfg(...)]` attributes once and apply a callback.
fn parse_envcfg<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("envcfg")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[envcfg(...)]` metadata applied to a struct.
///
/// Recognises `prefix` and `crate`. Unknown keys are ignored so callers keep
/// compiling when new attributes appear.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_envcfg(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("prefix") => {
                out.prefix = Some(lit_str(meta, "prefix")?.value());
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => discard_unknown(meta),
        }
    })?;
    Ok(out)
}

/// Applies a recognised field attribute, returning `true` if handled.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<bool> {
    let Some(ident) = meta.path.get_ident() else {
        return Ok(false);
    };
    match ident.to_string().as_str() {
        "default" => {
            out.default = Some(lit_text(meta, "default")?);
            Ok(true)
        }
        "key" => {
            let s = lit_str(meta, "key")?;
            match s.value().as_str() {
                "" => Err(syn::Error::new(
                    s.span(),
                    "key must not be empty; omit it to derive the key from the field name",
                )),
                SKIP_MARKER => {
                    out.skip = true;
                    Ok(true)
                }
                key => {
                    out.key = Some(key.to_owned());
                    Ok(true)
                }
            }
        }
        "skip" => {
            out.skip = true;
            Ok(true)
        }
        "nested" => {
            out.nested = true;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Parses field-level `#[envcfg(...)]` attributes.
///
/// Recognised keys are `default`, `key`, `skip` and `nested`. Unknown keys
/// are ignored, matching [`parse_struct_attrs`]. Contradictory combinations
/// are rejected.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_envcfg(&field.attrs, |meta| {
        if !apply_field_attr(meta, &mut out)? {
            discard_unknown(meta)?;
        }
        Ok(())
    })?;
    if out.skip && out.key.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "`skip` cannot be combined with an explicit `key`",
        ));
    }
    if out.nested && (out.default.is_some() || out.key.is_some()) {
        return Err(syn::Error::new_spanned(
            field,
            "nested fields take `default` and `key` from their own fields",
        ));
    }
    Ok(out)
}
