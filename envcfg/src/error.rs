//! Error types produced while binding records.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors that can occur while applying defaults or environment values.
///
/// Every variant is a deterministic function of the record schema, the
/// binding options and the environment snapshot; retrying without changing
/// one of those reproduces the same failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvCfgError {
    /// The path does not address a bindable field of the record.
    #[error("`{path}` does not address a bindable field")]
    InvalidTarget {
        /// Dotted field path that failed to resolve.
        path: String,
    },

    /// The field's declared type has no coercion rule.
    #[error("unsupported type `{type_name}` for field `{path}`")]
    UnsupportedType {
        /// Dotted field path of the offending field.
        path: String,
        /// Declared type of the field as written in the record.
        type_name: String,
    },

    /// A literal could not be converted to the field's declared type.
    #[error("failed to parse field `{path}`: {source}")]
    Parse {
        /// Dotted field path of the offending field.
        path: String,
        /// Underlying conversion failure.
        #[source]
        source: ParseError,
    },
}

impl EnvCfgError {
    /// Returns the dotted path of the field that triggered the error.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidTarget { path }
            | Self::UnsupportedType { path, .. }
            | Self::Parse { path, .. } => path,
        }
    }

    pub(crate) fn at(path: &str, err: AssignError) -> Self {
        let owned = path.to_owned();
        match err {
            AssignError::InvalidTarget => Self::InvalidTarget { path: owned },
            AssignError::UnsupportedType { type_name } => Self::UnsupportedType {
                path: owned,
                type_name: type_name.to_owned(),
            },
            AssignError::Parse(source) => Self::Parse {
                path: owned,
                source,
            },
        }
    }
}

/// Convenience alias for results returned by binding operations.
pub type EnvCfgResult<T> = Result<T, EnvCfgError>;

/// Failure reported by [`EnvCfg::assign`](crate::EnvCfg::assign).
///
/// The error carries no path; the schema walker attaches the full dotted
/// path when it converts the failure into an [`EnvCfgError`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssignError {
    /// The path names no field, or descends into a field that is not a record.
    #[error("path does not address a bindable field")]
    InvalidTarget,

    /// The addressed field has a type without a coercion rule.
    #[error("unsupported type `{type_name}`")]
    UnsupportedType {
        /// Declared type of the field.
        type_name: &'static str,
    },

    /// The literal failed to convert.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Conversion failures raised by [`Coerce`](crate::Coerce) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Malformed or out-of-range integer.
    #[error("invalid integer `{literal}`: {source}")]
    Integer {
        /// Literal as supplied.
        literal: String,
        /// Failure reported by the standard library parser.
        #[source]
        source: ParseIntError,
    },

    /// A second sign, or a sign after the radix prefix.
    #[error("invalid integer `{literal}`: unexpected sign")]
    MisplacedSign {
        /// Literal as supplied.
        literal: String,
    },

    /// Malformed floating point number.
    #[error("invalid float `{literal}`: {source}")]
    Float {
        /// Literal as supplied.
        literal: String,
        /// Failure reported by the standard library parser.
        #[source]
        source: ParseFloatError,
    },

    /// A finite literal overflowed the target float width.
    #[error("float `{literal}` is out of range for f{bits}")]
    FloatRange {
        /// Literal as supplied.
        literal: String,
        /// Width of the target type in bits.
        bits: u8,
    },

    /// Not one of the accepted boolean spellings.
    #[error("invalid boolean `{literal}`")]
    Bool {
        /// Literal as supplied.
        literal: String,
    },

    /// Malformed duration literal.
    #[error("invalid duration `{literal}`: {source}")]
    Duration {
        /// Literal as supplied.
        literal: String,
        /// Reason the duration grammar rejected the literal.
        #[source]
        source: DurationError,
    },

    /// One element of a comma-separated list failed to convert.
    #[error("list element {index}: {source}")]
    Element {
        /// Zero-based position of the element.
        index: usize,
        /// Failure for that element.
        #[source]
        source: Box<ParseError>,
    },
}

/// Reasons a duration literal is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DurationError {
    /// The literal was empty or held only a sign.
    #[error("empty duration")]
    Empty,
    /// A number was expected.
    #[error("expected a number")]
    MissingNumber,
    /// A number had no unit attached.
    #[error("missing unit")]
    MissingUnit,
    /// The unit is not one of `ns`, `us`, `µs`, `ms`, `s`, `m` or `h`.
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
    /// Negative durations cannot be represented.
    #[error("negative durations are not supported")]
    Negative,
    /// The total does not fit in 64-bit nanoseconds.
    #[error("duration overflows")]
    Overflow,
}
