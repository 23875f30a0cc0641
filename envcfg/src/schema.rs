//! Schema walking: field metadata extraction and path-based application.

use std::fmt;

use crate::EnvCfg;
use crate::error::{EnvCfgError, EnvCfgResult};

/// Key value that removes a field from the environment pass.
pub const SKIP_MARKER: &str = "-";

/// Metadata declared on a bindable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    path: String,
    default: Option<&'static str>,
    key: Option<&'static str>,
    type_name: &'static str,
}

impl FieldSpec {
    /// Describes a field called `name` with the declared type `type_name`.
    #[must_use]
    pub fn new(name: &str, type_name: &'static str) -> Self {
        Self {
            path: name.to_owned(),
            default: None,
            key: None,
            type_name,
        }
    }

    /// Sets the default literal.
    #[must_use]
    pub fn with_default(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }

    /// Sets the explicit environment key, or [`SKIP_MARKER`].
    #[must_use]
    pub fn with_key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    /// Re-roots the field below `parent`, inheriting its skip marker.
    #[must_use]
    pub fn nested_under(mut self, parent: &str, skipped: bool) -> Self {
        self.path = format!("{parent}.{}", self.path);
        if skipped {
            self.key = Some(SKIP_MARKER);
        }
        self
    }

    /// Dotted path of the field from the bound record.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Declared default literal.
    #[must_use]
    pub const fn default(&self) -> Option<&'static str> {
        self.default
    }

    /// Declared environment key.
    #[must_use]
    pub const fn key(&self) -> Option<&'static str> {
        self.key
    }

    /// Declared type as written in the record.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the environment pass ignores this field.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.key == Some(SKIP_MARKER)
    }

    /// Metadata value for `tag`.
    #[must_use]
    pub const fn tag(&self, tag: Tag) -> Option<&'static str> {
        match tag {
            Tag::Default => self.default,
            Tag::Envcfg => self.key,
        }
    }
}

/// Metadata vocabulary read from record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Default literal, `#[envcfg(default = "...")]`.
    Default,
    /// Explicit environment key, `#[envcfg(key = "...")]`.
    Envcfg,
}

impl Tag {
    /// Name of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Envcfg => "envcfg",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters applied by [`extract_tags`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Drop fields without a value for the tag.
    pub omit_empty: bool,
    /// Drop fields carrying the [`SKIP_MARKER`] key.
    pub omit_skipped: bool,
}

/// Field paths mapped to string values, kept in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: Vec<(String, String)>,
}

impl TagMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Value stored for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == path)
            .map(|(_, value)| value.as_str())
    }

    /// Mutable value stored for `path`.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut String> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| entry == path)
            .map(|(_, value)| value)
    }

    /// Stores `value` for `path`, keeping the original position of an
    /// existing entry. Returns the replaced value.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let owned_path = path.into();
        let owned_value = value.into();
        if let Some(slot) = self.get_mut(&owned_path) {
            return Some(std::mem::replace(slot, owned_value));
        }
        self.entries.push((owned_path, owned_value));
        None
    }

    /// Iterates entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, value)| (path.as_str(), value.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (path, value) in iter {
            map.insert(path, value);
        }
        map
    }
}

impl IntoIterator for TagMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Collects the `tag` metadata of every bindable field of `R`.
///
/// Fields without metadata map to an empty string unless
/// [`ExtractOptions::omit_empty`] is set.
#[must_use]
pub fn extract_tags<R: EnvCfg>(tag: Tag, options: ExtractOptions) -> TagMap {
    R::fields()
        .into_iter()
        .filter(|field| !(options.omit_skipped && field.is_skipped()))
        .filter_map(|field| {
            let value = field.tag(tag).unwrap_or_default();
            if options.omit_empty && value.is_empty() {
                return None;
            }
            Some((field.path, value.to_owned()))
        })
        .collect()
}

/// Assigns every non-empty entry of `values` to `record`, in order.
///
/// # Errors
///
/// Returns the first failure. Entries applied before it stay applied and
/// later entries are not attempted.
pub fn apply<R: EnvCfg>(record: &mut R, values: &TagMap) -> EnvCfgResult<()> {
    for (path, literal) in values.iter().filter(|(_, literal)| !literal.is_empty()) {
        record
            .assign(path, literal)
            .map_err(|err| EnvCfgError::at(path, err))?;
        tracing::trace!(path, "field assigned");
    }
    Ok(())
}
