//! Duration literal grammar.
//!
//! A duration is an optional sign followed by one or more `<number><unit>`
//! pairs, such as `300ms`, `1.5s` or `1h30m`. The bare literal `0` needs no
//! unit. Fractions below one nanosecond are truncated.

use std::time::Duration;

use crate::error::DurationError;

const UNITS: [(&str, u64); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000),
    ("\u{3bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// Fraction digits beyond this are below any unit's resolution.
const MAX_FRACTION_DIGITS: usize = 18;

struct Amount {
    whole: u64,
    fraction: u64,
    scale: u64,
}

impl Amount {
    fn nanos(&self, per_unit: u64) -> Option<u64> {
        let whole = self.whole.checked_mul(per_unit)?;
        let fraction = (u128::from(self.fraction) * u128::from(per_unit))
            .checked_div(u128::from(self.scale))?;
        whole.checked_add(u64::try_from(fraction).ok()?)
    }
}

pub(crate) fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    let (negative, body) = literal.strip_prefix('-').map_or_else(
        || (false, literal.strip_prefix('+').unwrap_or(literal)),
        |rest| (true, rest),
    );
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total: u64 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let (amount, after_amount) = take_amount(rest)?;
        let unit_len = after_amount
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_amount.len());
        let (unit, tail) = after_amount.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_owned()))?;
        total = amount
            .nanos(per_unit)
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or(DurationError::Overflow)?;
        rest = tail;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative);
    }
    Ok(Duration::from_nanos(total))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    UNITS
        .iter()
        .find_map(|(name, nanos)| (*name == unit).then_some(*nanos))
}

fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

fn take_amount(input: &str) -> Result<(Amount, &str), DurationError> {
    let (whole_digits, after_whole) = split_digits(input);
    let (fraction_digits, after_fraction) = after_whole
        .strip_prefix('.')
        .map_or(("", after_whole), split_digits);
    if whole_digits.is_empty() && fraction_digits.is_empty() {
        return Err(DurationError::MissingNumber);
    }

    let whole = if whole_digits.is_empty() {
        0
    } else {
        whole_digits
            .parse::<u64>()
            .map_err(|_| DurationError::Overflow)?
    };
    let mut fraction = 0_u64;
    let mut scale = 1_u64;
    for digit in fraction_digits
        .chars()
        .take(MAX_FRACTION_DIGITS)
        .filter_map(|c| c.to_digit(10))
    {
        fraction = fraction * 10 + u64::from(digit);
        scale *= 10;
    }
    Ok((
        Amount {
            whole,
            fraction,
            scale,
        },
        after_fraction,
    ))
}
