//! Typed value coercion.
//!
//! Converts untyped literals into the declared type of a record field.
//! Scalars follow the usual literal spellings; `Vec<T>` splits on commas and
//! converts each element as `T`. Derived records reach these conversions for
//! every field type implementing [`Coerce`]; any other type is reported as
//! [`AssignError::UnsupportedType`] without touching the field.

mod duration;

use std::num::ParseIntError;
use std::time::Duration;

use crate::error::{AssignError, ParseError};

pub(crate) use duration::parse_duration;

/// Conversion from an environment or default literal.
pub trait Coerce: Sized {
    /// Parses `literal` into a value of this type.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the literal is malformed or does not fit
    /// the type.
    fn coerce(literal: &str) -> Result<Self, ParseError>;
}

/// Converts `literal` and stores it in `slot`.
///
/// The slot is written only after the whole literal converted, so a failed
/// conversion leaves the previous value in place.
///
/// # Errors
///
/// Returns [`AssignError::Parse`] when the conversion fails.
pub fn coerce_into<T: Coerce>(slot: &mut T, literal: &str) -> Result<(), AssignError> {
    *slot = T::coerce(literal)?;
    Ok(())
}

impl Coerce for String {
    fn coerce(literal: &str) -> Result<Self, ParseError> {
        Ok(literal.to_owned())
    }
}

impl Coerce for bool {
    fn coerce(literal: &str) -> Result<Self, ParseError> {
        match literal {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ParseError::Bool {
                literal: literal.to_owned(),
            }),
        }
    }
}

impl Coerce for Duration {
    fn coerce(literal: &str) -> Result<Self, ParseError> {
        parse_duration(literal).map_err(|source| ParseError::Duration {
            literal: literal.to_owned(),
            source,
        })
    }
}

impl<T: Coerce> Coerce for Vec<T> {
    fn coerce(literal: &str) -> Result<Self, ParseError> {
        literal
            .split(',')
            .enumerate()
            .map(|(index, element)| {
                T::coerce(element).map_err(|source| ParseError::Element {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

impl<T: Coerce> Coerce for Option<T> {
    fn coerce(literal: &str) -> Result<Self, ParseError> {
        T::coerce(literal).map(Some)
    }
}

const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

fn strip_radix(body: &str) -> (u32, &str) {
    RADIX_PREFIXES
        .iter()
        .find_map(|(prefix, radix)| body.strip_prefix(prefix).map(|digits| (*radix, digits)))
        .unwrap_or((10, body))
}

fn parse_integer<T>(
    literal: &str,
    from_radix: fn(&str, u32) -> Result<T, ParseIntError>,
) -> Result<T, ParseError> {
    let (negative, body) = literal.strip_prefix('-').map_or_else(
        || (false, literal.strip_prefix('+').unwrap_or(literal)),
        |rest| (true, rest),
    );
    let (radix, digits) = strip_radix(body);
    if digits.starts_with(['+', '-']) {
        return Err(ParseError::MisplacedSign {
            literal: literal.to_owned(),
        });
    }
    let signed_digits = if negative {
        format!("-{digits}")
    } else {
        digits.to_owned()
    };
    from_radix(&signed_digits, radix).map_err(|source| ParseError::Integer {
        literal: literal.to_owned(),
        source,
    })
}

macro_rules! impl_coerce_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Coerce for $ty {
            fn coerce(literal: &str) -> Result<Self, ParseError> {
                parse_integer(literal, <$ty>::from_str_radix)
            }
        }
    )*};
}

impl_coerce_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn names_infinity(literal: &str) -> bool {
    let magnitude = literal.trim_start_matches(['+', '-']);
    magnitude.eq_ignore_ascii_case("inf") || magnitude.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_coerce_float {
    ($($ty:ty => $bits:literal),* $(,)?) => {$(
        impl Coerce for $ty {
            fn coerce(literal: &str) -> Result<Self, ParseError> {
                let value: $ty = literal.parse().map_err(|source| ParseError::Float {
                    literal: literal.to_owned(),
                    source,
                })?;
                if value.is_infinite() && !names_infinity(literal) {
                    return Err(ParseError::FloatRange {
                        literal: literal.to_owned(),
                        bits: $bits,
                    });
                }
                Ok(value)
            }
        }
    )*};
}

impl_coerce_float!(f32 => 32, f64 => 64);
