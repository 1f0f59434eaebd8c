use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{ReconstructError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ReconstructError::InvalidBase { base: base.to_string() })
    }
}

/// Value of `c` as a digit in `base`: 0-9, then a/A through z/Z.
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    c.to_digit(36).filter(|&d| d < base)
}

/// decode(value, base): exact non-negative integer value of `value` in `base`.
///
/// Digits are consumed most-significant first, accumulating
/// `acc = acc * base + digit` in arbitrary precision. Surrounding ASCII
/// whitespace is ignored; signs, separators and anything else that is not a
/// digit of `base` are rejected.
pub fn decode(value: &str, base: u32) -> Result<BigUint> {
    check_base(base)?;
    let digits = value.trim_matches(|c: char| c.is_ascii_whitespace());
    if digits.is_empty() {
        return Err(ReconstructError::EmptyValue);
    }

    let mut acc = BigUint::zero();
    for (position, ch) in digits.chars().enumerate() {
        let d = digit_value(ch, base).ok_or(ReconstructError::InvalidDigit { ch, position, base })?;
        acc *= base;
        acc += d;
    }
    Ok(acc)
}

/// encode(n, base): lower-case digits of `n` in `base`. Inverse of [`decode`].
pub fn encode(n: &BigUint, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(n.to_str_radix(base))
}

/// Parse a base as it appears in input documents ("16", " 2 ").
pub fn parse_base(raw: &str) -> Result<u32> {
    let invalid = || ReconstructError::InvalidBase { base: raw.to_string() };
    let base: u32 = raw.trim().parse().map_err(|_| invalid())?;
    check_base(base).map_err(|_| invalid())?;
    Ok(base)
}
