//! Binding options.

use std::collections::BTreeMap;

use crate::EnvCfg;

/// Default literals supplied by the caller, keyed by dotted field path.
pub type Overrides = BTreeMap<String, String>;

/// Options for [`read`](crate::read) and [`read_from`](crate::read_from).
///
/// # Examples
///
/// ```
/// use envcfg::ReadOptions;
///
/// let options = ReadOptions::new()
///     .prefix("APP_")
///     .with_default_overrides([("port", "9090")]);
/// assert!(options.uses_defaults());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    prefix: Option<String>,
    use_defaults: bool,
    default_overrides: Overrides,
}

impl ReadOptions {
    /// Options with no prefix and the default pass disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `prefix` verbatim to every environment key.
    ///
    /// When `PREFIX` + key is unset the unprefixed key is tried as well.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Applies `#[envcfg(default = ...)]` literals before reading the
    /// environment.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.use_defaults = true;
        self
    }

    /// Applies defaults, replacing the declared literal of each named field.
    #[must_use]
    pub fn with_default_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.use_defaults = true;
        self.default_overrides.extend(
            overrides
                .into_iter()
                .map(|(path, literal)| (path.into(), literal.into())),
        );
        self
    }

    /// Whether the default pass runs.
    #[must_use]
    pub const fn uses_defaults(&self) -> bool {
        self.use_defaults
    }

    /// Caller-supplied default literals.
    #[must_use]
    pub const fn default_overrides(&self) -> &Overrides {
        &self.default_overrides
    }

    /// Prefix in effect for `R`: the configured one, else the record's own.
    #[must_use]
    pub fn prefix_for<R: EnvCfg>(&self) -> &str {
        let record_prefix = R::prefix();
        self.prefix.as_deref().unwrap_or(record_prefix)
    }
}
