//! Type rendering helpers.
//!
//! Whether a field type can be bound is decided by the compiler through
//! `envcfg::__private::FieldSlot`. The derive only needs the declared type
//! as text for diagnostics.

use quote::ToTokens;
use syn::Type;

/// Renders `ty` as it would be written in source, for diagnostics.
pub(crate) fn type_name(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
}
