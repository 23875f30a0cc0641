//! Environment key derivation for field paths.

use crate::split::split_words;

/// Separator between nesting levels in a derived key.
pub const NESTING_SEPARATOR: &str = "__";

/// Derives the environment key for a dotted field path.
///
/// Each path segment is split into words, joined with `_` and upper-cased;
/// segments are then joined with [`NESTING_SEPARATOR`]. Only ASCII letters
/// change case, so the key has as many characters as the path.
///
/// # Examples
///
/// ```
/// assert_eq!(envcfg::derive_key("host_ip"), "HOST_IP");
/// assert_eq!(envcfg::derive_key("inner.foo"), "INNER__FOO");
/// assert_eq!(envcfg::derive_key("JSONFile"), "JSON_FILE");
/// ```
#[must_use]
pub fn derive_key(path: &str) -> String {
    path.split('.')
        .map(|segment| split_words(segment).join("_").to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(NESTING_SEPARATOR)
}
