//! Environment variable listing for a record.
//!
//! [`describe`] reports, for every bindable field, which variables a read
//! with the given options would consult. The result serialises with `serde`
//! so tools can render it as JSON or a table.

use serde::Serialize;

use crate::EnvCfg;
use crate::key::derive_key;
use crate::options::ReadOptions;

/// Environment lookup plan for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVarDoc {
    /// Dotted field path.
    pub path: String,
    /// Variable consulted first; `None` when the field is skipped.
    pub key: Option<String>,
    /// Unprefixed variable consulted when `key` is unset.
    pub fallback_key: Option<String>,
    /// Default literal applied when the default pass runs.
    pub default: Option<String>,
    /// Declared type of the field.
    pub type_name: String,
}

/// Lists the environment variables a read of `R` with `options` consults.
///
/// # Examples
///
/// ```
/// use envcfg::{EnvCfg, ReadOptions};
///
/// #[derive(EnvCfg)]
/// struct Config {
///     pub host_ip: String,
/// }
///
/// let docs = envcfg::describe::<Config>(&ReadOptions::new().prefix("APP_"));
/// assert_eq!(docs[0].key.as_deref(), Some("APP_HOST_IP"));
/// assert_eq!(docs[0].fallback_key.as_deref(), Some("HOST_IP"));
/// ```
#[must_use]
pub fn describe<R: EnvCfg>(options: &ReadOptions) -> Vec<EnvVarDoc> {
    let prefix = options.prefix_for::<R>();
    R::fields()
        .into_iter()
        .map(|field| {
            let key = (!field.is_skipped()).then(|| {
                field
                    .key()
                    .filter(|explicit| !explicit.is_empty())
                    .map_or_else(|| derive_key(field.path()), str::to_owned)
            });
            let fallback_key = key.clone().filter(|_| !prefix.is_empty());
            let default = options
                .default_overrides()
                .get(field.path())
                .cloned()
                .or_else(|| field.default().map(str::to_owned))
                .filter(|literal| !literal.is_empty());
            EnvVarDoc {
                path: field.path().to_owned(),
                key: key.map(|resolved| format!("{prefix}{resolved}")),
                fallback_key,
                default,
                type_name: field.type_name().to_owned(),
            }
        })
        .collect()
}
