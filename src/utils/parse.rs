//! Parse-with-default helpers for numeric form input.
//!
//! None of these fail: blank, missing, or unparseable input becomes zero.

use bigdecimal::BigDecimal;
use std::str::FromStr;
use tracing::debug;

/// Largest number of integer digits accepted from text input (just under 10^15)
pub const MAX_INTEGER_DIGITS: i64 = 15;

/// Parse a decimal, returning zero for missing, blank, or unparseable text.
/// Negative values are kept.
///
/// The whole trimmed text must be a plain decimal. A trailing unit or symbol
/// (`"12%"`, `"12abc"`) makes the text unparseable and it reads as zero; no
/// numeric prefix is salvaged. Exponent notation (`"1e3"`) and values with
/// more than [`MAX_INTEGER_DIGITS`] integer digits also read as zero, so a
/// stray keystroke cannot produce an amount too large to format.
pub fn parse_decimal_or_zero(input: Option<&str>) -> BigDecimal {
    let Some(raw) = input else {
        return BigDecimal::from(0);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BigDecimal::from(0);
    }

    if trimmed.contains(['e', 'E']) {
        debug!(input = trimmed, "Exponent notation coerced to zero");
        return BigDecimal::from(0);
    }

    match BigDecimal::from_str(trimmed) {
        Ok(value) if integer_digits(&value) > MAX_INTEGER_DIGITS => {
            debug!(input = trimmed, "Out-of-range amount coerced to zero");
            BigDecimal::from(0)
        }
        Ok(value) => value,
        Err(err) => {
            debug!(input = trimmed, error = %err, "Unparseable amount coerced to zero");
            BigDecimal::from(0)
        }
    }
}

/// Digits left of the decimal point, ignoring leading zeros.
/// Pure fractions give zero or less.
fn integer_digits(value: &BigDecimal) -> i64 {
    let (digits, scale) = value.as_bigint_and_exponent();
    digits.magnitude().to_string().len() as i64 - scale
}

/// Parse a non-negative decimal; negative values are clamped to zero
pub fn parse_non_negative_decimal(input: Option<&str>) -> BigDecimal {
    clamp_non_negative(parse_decimal_or_zero(input))
}

/// Parse a percentage and clamp it into `[0, 100]`
pub fn parse_percent(input: Option<&str>) -> BigDecimal {
    clamp_percent(parse_decimal_or_zero(input))
}

pub fn clamp_non_negative(value: BigDecimal) -> BigDecimal {
    let zero = BigDecimal::from(0);
    if value < zero {
        debug!(value = %value, "Negative amount clamped to zero");
        zero
    } else {
        value
    }
}

pub fn clamp_percent(value: BigDecimal) -> BigDecimal {
    let hundred = BigDecimal::from(100);
    if value > hundred {
        debug!(value = %value, "Percentage clamped to 100");
        hundred
    } else {
        clamp_non_negative(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_or_zero() {
        assert_eq!(parse_decimal_or_zero(Some("12.5")), BigDecimal::from_str("12.5").unwrap());
        assert_eq!(parse_decimal_or_zero(Some(" 7 ")), BigDecimal::from(7));
        assert_eq!(parse_decimal_or_zero(Some("-3")), BigDecimal::from(-3));
        assert_eq!(parse_decimal_or_zero(Some("")), BigDecimal::from(0));
        assert_eq!(parse_decimal_or_zero(Some("abc")), BigDecimal::from(0));
        assert_eq!(parse_decimal_or_zero(None), BigDecimal::from(0));
    }

    #[test]
    fn test_parse_non_negative_decimal() {
        assert_eq!(parse_non_negative_decimal(Some("-10")), BigDecimal::from(0));
        assert_eq!(parse_non_negative_decimal(Some("10")), BigDecimal::from(10));
        assert_eq!(parse_non_negative_decimal(Some("   ")), BigDecimal::from(0));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent(Some("18")), BigDecimal::from(18));
        assert_eq!(parse_percent(Some("150")), BigDecimal::from(100));
        assert_eq!(parse_percent(Some("-5")), BigDecimal::from(0));
        assert_eq!(parse_percent(Some("12%")), BigDecimal::from(0));
    }

    #[test]
    fn test_trailing_text_is_not_salvaged() {
        assert_eq!(parse_decimal_or_zero(Some("12abc")), BigDecimal::from(0));
        assert_eq!(parse_decimal_or_zero(Some("₹12")), BigDecimal::from(0));
    }

    #[test]
    fn test_exponent_notation_reads_as_zero() {
        assert_eq!(parse_decimal_or_zero(Some("1e400000000")), BigDecimal::from(0));
        assert_eq!(parse_decimal_or_zero(Some("1E-400000000")), BigDecimal::from(0));
        assert_eq!(parse_decimal_or_zero(Some("2e3")), BigDecimal::from(0));
        assert_eq!(parse_non_negative_decimal(Some("1e2000000")), BigDecimal::from(0));
    }

    #[test]
    fn test_integer_digit_bound() {
        let largest = "999999999999999.99";
        assert_eq!(
            parse_decimal_or_zero(Some(largest)),
            BigDecimal::from_str(largest).unwrap()
        );
        assert_eq!(
            parse_decimal_or_zero(Some("1000000000000000")),
            BigDecimal::from(0)
        );
        assert_eq!(
            parse_decimal_or_zero(Some("-1000000000000000")),
            BigDecimal::from(0)
        );
        // Leading zeros and long fractions do not count against the bound
        assert_eq!(
            parse_decimal_or_zero(Some("0000000000000000012.5")),
            BigDecimal::from_str("12.5").unwrap()
        );
        assert_eq!(
            parse_decimal_or_zero(Some("0.000000000000000000001")),
            BigDecimal::from_str("0.000000000000000000001").unwrap()
        );
    }
}
