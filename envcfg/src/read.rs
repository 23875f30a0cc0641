//! The binder: default and environment passes over a record.
//!
//! A read runs these stages in order and stops at the first failure:
//!
//! 1. apply defaults (only when enabled), with caller overrides winning
//!    over declared literals;
//! 2. collect `envcfg` keys, dropping fields marked `-`;
//! 3. derive keys for fields that declare none;
//! 4. look up `prefix + key`, then `key` when a prefix is set, dropping
//!    fields found in neither;
//! 5. apply the values that were found.
//!
//! Fields changed by a completed stage are not rolled back when a later one
//! fails.

use std::any::type_name;

use crate::EnvCfg;
use crate::env::{Environment, ProcessEnv};
use crate::error::EnvCfgResult;
use crate::key::derive_key;
use crate::options::{Overrides, ReadOptions};
use crate::schema::{ExtractOptions, Tag, TagMap, apply, extract_tags};

/// Applies the declared default literals of `record`.
///
/// Each entry in `overrides` replaces the declared literal of the field with
/// that dotted path. Overrides naming no bindable field are ignored.
///
/// # Errors
///
/// Returns the first field that fails to convert or has an unsupported type.
///
/// # Examples
///
/// ```
/// use envcfg::{EnvCfg, Overrides};
///
/// #[derive(Default, EnvCfg)]
/// struct Config {
///     #[envcfg(default = "foo")]
///     pub s: String,
///     #[envcfg(default = "42")]
///     pub n: i64,
///     #[envcfg(default = "true")]
///     pub b: bool,
/// }
///
/// let mut cfg = Config::default();
/// envcfg::default(&mut cfg, &Overrides::new())?;
/// assert_eq!((cfg.s.as_str(), cfg.n, cfg.b), ("foo", 42, true));
/// # Ok::<(), envcfg::EnvCfgError>(())
/// ```
pub fn default<R: EnvCfg>(record: &mut R, overrides: &Overrides) -> EnvCfgResult<()> {
    let _span = tracing::debug_span!("envcfg::default", record = type_name::<R>()).entered();
    apply_defaults(record, overrides)
}

/// Binds `record` from the process environment.
///
/// # Errors
///
/// See [`read_from`].
pub fn read<R: EnvCfg>(record: &mut R, options: &ReadOptions) -> EnvCfgResult<()> {
    read_from(record, &ProcessEnv, options)
}

/// Binds `record` from `env`.
///
/// # Errors
///
/// Returns the first failure of any stage: an unsupported field type, a
/// literal that fails to convert, or a path that addresses no field.
pub fn read_from<R, E>(record: &mut R, env: &E, options: &ReadOptions) -> EnvCfgResult<()>
where
    R: EnvCfg,
    E: Environment + ?Sized,
{
    let prefix = options.prefix_for::<R>();
    let _span =
        tracing::debug_span!("envcfg::read", record = type_name::<R>(), prefix).entered();

    if options.uses_defaults() {
        apply_defaults(record, options.default_overrides())?;
    }

    let tags = extract_tags::<R>(
        Tag::Envcfg,
        ExtractOptions {
            omit_empty: false,
            omit_skipped: true,
        },
    );
    let keys = resolve_keys(tags);
    let values = lookup_environment(env, prefix, keys);
    apply(record, &values)
}

fn apply_defaults<R: EnvCfg>(record: &mut R, overrides: &Overrides) -> EnvCfgResult<()> {
    let mut defaults = extract_tags::<R>(Tag::Default, ExtractOptions::default());
    for (path, literal) in overrides {
        match defaults.get_mut(path) {
            Some(slot) => slot.clone_from(literal),
            None => tracing::warn!(path = %path, "default override matches no field"),
        }
    }
    apply(record, &defaults)
}

fn resolve_keys(tags: TagMap) -> TagMap {
    tags.into_iter()
        .map(|(path, key)| {
            if key.is_empty() {
                let derived = derive_key(&path);
                (path, derived)
            } else {
                (path, key)
            }
        })
        .collect()
}

fn lookup_environment<E>(env: &E, prefix: &str, keys: TagMap) -> TagMap
where
    E: Environment + ?Sized,
{
    keys.into_iter()
        .filter_map(|(path, key)| {
            let value = lookup_key(env, prefix, &path, &key)?;
            Some((path, value))
        })
        .collect()
}

fn lookup_key<E>(env: &E, prefix: &str, path: &str, key: &str) -> Option<String>
where
    E: Environment + ?Sized,
{
    let prefixed = format!("{prefix}{key}");
    if let Some(value) = non_empty(env.lookup(&prefixed)) {
        tracing::debug!(path, key = %prefixed, "bound from environment");
        return Some(value);
    }
    if prefix.is_empty() {
        tracing::trace!(path, key, "environment key not set");
        return None;
    }
    if let Some(value) = non_empty(env.lookup(key)) {
        tracing::debug!(path, key, fallback = true, "bound from unprefixed key");
        return Some(value);
    }
    tracing::trace!(path, key = %prefixed, fallback = key, "environment key not set");
    None
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|found| !found.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{lookup_key, resolve_keys};
    use crate::schema::TagMap;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn derives_missing_keys_only() {
        let tags: TagMap = [
            ("host_ip".to_owned(), String::new()),
            ("vh".to_owned(), "VH_NAME".to_owned()),
            ("inner.foo".to_owned(), String::new()),
        ]
        .into_iter()
        .collect();
        let keys = resolve_keys(tags);
        assert_eq!(
            keys.iter().collect::<Vec<_>>(),
            [
                ("host_ip", "HOST_IP"),
                ("vh", "VH_NAME"),
                ("inner.foo", "INNER__FOO")
            ]
        );
    }

    #[rstest]
    #[case::prefixed(&[("APP_PORT", "1"), ("PORT", "2")], "APP_", Some("1"))]
    #[case::fallback(&[("PORT", "2")], "APP_", Some("2"))]
    #[case::empty_prefixed_falls_back(&[("APP_PORT", ""), ("PORT", "2")], "APP_", Some("2"))]
    #[case::no_prefix(&[("PORT", "2")], "", Some("2"))]
    #[case::no_prefix_ignores_prefixed(&[("APP_PORT", "1")], "", None)]
    #[case::missing(&[], "APP_", None)]
    #[case::empty_is_unset(&[("PORT", "")], "", None)]
    fn looks_up_with_fallback(
        #[case] pairs: &[(&str, &str)],
        #[case] prefix: &str,
        #[case] expected: Option<&str>,
    ) {
        let found = lookup_key(&env(pairs), prefix, "port", "PORT");
        assert_eq!(found.as_deref(), expected);
    }
}
