//! Indian digit grouping (`12,34,567.89`)

use bigdecimal::{BigDecimal, FromPrimitive, RoundingMode};

use crate::config::MAX_DISPLAY_SCALE;
use crate::utils::parse::parse_decimal_or_zero;

const DEFAULT_SCALE: i64 = 2;

/// Format with Indian grouping and exactly two fraction digits, rounding half-up
pub fn format_indian(amount: &BigDecimal) -> String {
    format_indian_with_scale(amount, DEFAULT_SCALE)
}

/// Missing amounts render as `0.00`
pub fn format_indian_opt(amount: Option<&BigDecimal>) -> String {
    match amount {
        Some(amount) => format_indian(amount),
        None => format_indian(&BigDecimal::from(0)),
    }
}

/// Format a float; NaN and infinities render as `0.00`
pub fn format_indian_f64(amount: f64) -> String {
    let value = if amount.is_finite() {
        BigDecimal::from_f64(amount).unwrap_or_else(|| BigDecimal::from(0))
    } else {
        BigDecimal::from(0)
    };
    format_indian(&value)
}

/// Format raw text; blank or unparseable text renders as `0.00`
pub fn format_indian_str(amount: Option<&str>) -> String {
    format_indian(&parse_decimal_or_zero(amount))
}

/// Format with Indian grouping and `scale` fraction digits, rounding half-up.
///
/// The last three integer digits form one group and every group to their left
/// has two digits. `scale` is clamped into `[0, MAX_DISPLAY_SCALE]`.
pub fn format_indian_with_scale(amount: &BigDecimal, scale: i64) -> String {
    let scale = scale.clamp(0, MAX_DISPLAY_SCALE);
    let rounded = amount.with_scale_round(scale, RoundingMode::HalfUp);
    // Sign is taken after rounding so -0.001 prints as 0.00
    let negative = rounded < BigDecimal::from(0);
    let (digits, _) = rounded.abs().as_bigint_and_exponent();

    let frac_len = scale as usize;
    let mut digits = digits.to_string();
    if digits.len() <= frac_len {
        digits = format!("{:0>width$}", digits, width = frac_len + 1);
    }
    let (integer, fraction) = digits.split_at(digits.len() - frac_len);

    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(integer));
    if frac_len > 0 {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, last_three) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}
