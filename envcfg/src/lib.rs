//! Core crate for the `envcfg` binding engine.
//!
//! `envcfg` fills the public fields of a struct from two sources: default
//! literals declared with `#[envcfg(default = "...")]`, then values read
//! from environment variables. Keys are derived from field names unless a
//! field declares one with `#[envcfg(key = "...")]`:
//!
//! ```rust
//! use envcfg::{EnvCfg, ReadOptions};
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Default, EnvCfg)]
//! struct Config {
//!     pub debug: bool,
//!     #[envcfg(default = "8080")]
//!     pub port: u16,
//!     #[envcfg(key = "VH_NAME")]
//!     pub virtual_host: String,
//! }
//!
//! let env = HashMap::from([
//!     ("APP_DEBUG".to_owned(), "true".to_owned()),
//!     ("APP_VH_NAME".to_owned(), "someVH".to_owned()),
//! ]);
//! let mut cfg = Config::default();
//! envcfg::read_from(&mut cfg, &env, &ReadOptions::new().prefix("APP_").with_defaults())?;
//! assert!(cfg.debug);
//! assert_eq!(cfg.port, 8080);
//! assert_eq!(cfg.virtual_host, "someVH");
//! # Ok::<(), envcfg::EnvCfgError>(())
//! ```
//!
//! The derive macro lives in the companion `envcfg_macros` crate.

pub use envcfg_macros::EnvCfg;

mod coerce;
mod dispatch;
mod docs;
mod env;
mod error;
mod key;
mod options;
mod read;
mod schema;
mod split;

pub use coerce::{Coerce, coerce_into};
pub use docs::{EnvVarDoc, describe};
pub use env::{Environment, ProcessEnv};
pub use error::{AssignError, DurationError, EnvCfgError, EnvCfgResult, ParseError};
pub use key::{NESTING_SEPARATOR, derive_key};
pub use options::{Overrides, ReadOptions};
pub use read::{default, read, read_from};
pub use schema::{ExtractOptions, FieldSpec, SKIP_MARKER, Tag, TagMap, apply, extract_tags};
pub use split::split_words;

/// Items used by code that `#[derive(EnvCfg)]` generates. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::dispatch::{CoerceField, FieldSlot, UnsupportedField};
}

/// Record introspection implemented by `#[derive(EnvCfg)]`.
///
/// Only public fields take part in binding. Fields marked
/// `#[envcfg(nested)]` contribute their own fields under a dotted path.
pub trait EnvCfg {
    /// Enumerates the bindable fields in declaration order, descending into
    /// nested records.
    fn fields() -> Vec<FieldSpec>;

    /// Converts `literal` and stores it in the field addressed by `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::InvalidTarget`] when `path` names no bindable
    /// field, [`AssignError::UnsupportedType`] when the field's type has no
    /// coercion rule and [`AssignError::Parse`] when conversion fails. The
    /// field is left untouched in every error case.
    fn assign(&mut self, path: &str, literal: &str) -> Result<(), AssignError>;

    /// Prefix used for environment keys when [`ReadOptions`] sets none.
    #[must_use]
    fn prefix() -> &'static str {
        ""
    }
}
