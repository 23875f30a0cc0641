//! Token generation for the `EnvCfg` trait implementation.
//!
//! `fields` lists one `FieldSpec` per leaf field and splices in the specs of
//! nested records under their parent's name. `assign` routes a dotted path to
//! the matching field, recursing into nested records.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{BindableField, RecordInput, type_name};

/// Builds the `impl EnvCfg for ...` block for a parsed record.
pub(crate) fn generate_impl(record: &RecordInput, krate: &TokenStream) -> TokenStream {
    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let field_groups = record.fields.iter().map(|field| field_specs(field, krate));
    let assign = assign_fn(&record.fields, krate);
    let prefix_fn = record.attrs.prefix.as_ref().map(|prefix| {
        quote! {
            fn prefix() -> &'static str {
                #prefix
            }
        }
    });

    quote! {
        impl #impl_generics #krate::EnvCfg for #ident #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<#krate::FieldSpec> {
                let groups: ::std::vec::Vec<::std::vec::Vec<#krate::FieldSpec>> =
                    ::std::vec![#(#field_groups),*];
                groups.into_iter().flatten().collect()
            }

            #assign

            #prefix_fn
        }
    }
}

/// Expression producing the `FieldSpec`s contributed by one field.
fn field_specs(field: &BindableField, krate: &TokenStream) -> TokenStream {
    let name = &field.name;
    let skipped = field.attrs.skip;
    if field.attrs.nested {
        let ty = &field.ty;
        return quote! {
            <#ty as #krate::EnvCfg>::fields()
                .into_iter()
                .map(|spec| spec.nested_under(#name, #skipped))
                .collect::<::std::vec::Vec<_>>()
        };
    }

    let type_label = type_name(&field.ty);
    let default = field
        .attrs
        .default
        .as_ref()
        .map(|value| quote! { .with_default(#value) });
    let key = if skipped {
        Some(quote! { .with_key(#krate::SKIP_MARKER) })
    } else {
        field.attrs.key.as_ref().map(|key| quote! { .with_key(#key) })
    };
    quote! {
        ::std::vec![#krate::FieldSpec::new(#name, #type_label) #default #key]
    }
}

/// The `assign` method routing a dotted path to its field.
///
/// Leaf fields go through `envcfg::__private::FieldSlot`, which converts the
/// literal when the field type implements `Coerce` and otherwise reports
/// the declared type as unsupported. Paths whose first segment names a
/// nested field recurse with the remainder.
fn assign_fn(fields: &[BindableField], krate: &TokenStream) -> TokenStream {
    let (nested, leaves): (Vec<_>, Vec<_>) = fields.iter().partition(|field| field.attrs.nested);

    let leaf_arms = leaves.iter().map(|field| {
        let name = &field.name;
        let ident = &field.ident;
        let type_label = type_name(&field.ty);
        quote! {
            #name => (&mut #krate::__private::FieldSlot::new(&mut self.#ident, #type_label))
                .assign_literal(literal),
        }
    });
    let nested_arms = nested.iter().map(|field| {
        let name = &field.name;
        let ident = &field.ident;
        quote! { #name => #krate::EnvCfg::assign(&mut self.#ident, rest, literal), }
    });

    let dispatch_imports = (!leaves.is_empty()).then(|| {
        quote! {
            use #krate::__private::{CoerceField as _, UnsupportedField as _};
        }
    });
    let literal_param = if fields.is_empty() {
        format_ident!("_literal")
    } else {
        format_ident!("literal")
    };
    let rest_binding = if nested.is_empty() {
        quote! { _ }
    } else {
        quote! { (head, rest) }
    };
    let nested_match = if nested.is_empty() {
        quote! { ::core::result::Result::Err(#krate::AssignError::InvalidTarget) }
    } else {
        quote! {
            match head {
                #(#nested_arms)*
                _ => ::core::result::Result::Err(#krate::AssignError::InvalidTarget),
            }
        }
    };

    quote! {
        fn assign(
            &mut self,
            path: &str,
            #literal_param: &str,
        ) -> ::core::result::Result<(), #krate::AssignError> {
            #dispatch_imports
            match path.split_once('.') {
                ::core::option::Option::None => match path {
                    #(#leaf_arms)*
                    _ => ::core::result::Result::Err(#krate::AssignError::InvalidTarget),
                },
                ::core::option::Option::Some(#rest_binding) => #nested_match,
            }
        }
    }
}
