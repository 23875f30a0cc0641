//! Input parsing for the `EnvCfg` derive macro.
//!
//! This module gathers the struct identifier, its bindable fields and the
//! attribute metadata in one pass so macro expansion can fail fast with
//! useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Visibility};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A public field taking part in binding.
pub(crate) struct BindableField {
    /// Identifier used to access the field.
    pub ident: syn::Ident,
    /// Path segment naming the field, without any `r#` prefix.
    pub name: String,
    pub ty: syn::Type,
    pub attrs: FieldAttrs,
}

pub(crate) struct RecordInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<BindableField>,
}

/// Gathers information from the user-provided struct.
///
/// Private fields are left out. Annotating one with `#[envcfg(...)]` is an
/// error since the attribute could never take effect.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<RecordInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "EnvCfg requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "EnvCfg can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let field_attrs = parse_field_attrs(field)?;
        if matches!(field.vis, Visibility::Inherited) {
            if !field_attrs.is_empty() {
                return Err(syn::Error::new_spanned(
                    field,
                    "envcfg attributes have no effect on private fields; make the field `pub`",
                ));
            }
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "EnvCfg requires named fields"));
        };
        fields.push(BindableField {
            name: ident.unraw().to_string(),
            ident,
            ty: field.ty.clone(),
            attrs: field_attrs,
        });
    }

    Ok(RecordInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}
