//! Amount in words using the Indian numbering system (crore, lakh, thousand)

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;
const HUNDRED: u64 = 100;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a whole number to English words, grouped in crores, lakhs,
/// thousands and hundreds.
///
/// Crore counts above 99 are themselves spelled in Indian bands, so
/// 1,00,00,00,000 is `One Hundred Crore`.
pub fn to_words(number: u64) -> String {
    if number == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    let crores = number / CRORE;
    if crores > 0 {
        parts.push(format!("{} Crore", to_words(crores)));
    }

    // Below a crore every remaining band count fits in two digits
    let rest = number % CRORE;
    let lakhs = rest / LAKH;
    if lakhs > 0 {
        parts.push(format!("{} Lakh", below_hundred(lakhs)));
    }

    let thousands = rest % LAKH / THOUSAND;
    if thousands > 0 {
        parts.push(format!("{} Thousand", below_hundred(thousands)));
    }

    let hundreds = rest % THOUSAND / HUNDRED;
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }

    let remainder = rest % HUNDRED;
    if remainder > 0 {
        parts.push(below_hundred(remainder));
    }

    parts.join(" ").trim().to_string()
}

fn below_hundred(number: u64) -> String {
    let n = number as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{} {}", TENS[n / 10], ONES[n % 10])
    }
}

/// Words for the whole-currency part of `amount`; fractions are dropped.
/// Negative amounts read as `Zero`. There is no upper limit: amounts past
/// `u64` keep stacking crore bands.
pub fn amount_in_words(amount: &BigDecimal) -> String {
    let (whole, _) = amount
        .with_scale_round(0, RoundingMode::Floor)
        .as_bigint_and_exponent();
    if whole < BigInt::from(0) {
        return to_words(0);
    }
    big_to_words(&whole)
}

fn big_to_words(number: &BigInt) -> String {
    if let Some(small) = number.to_u64() {
        return to_words(small);
    }

    // Only reached above u64::MAX, so the crore count is never zero
    let crore = BigInt::from(CRORE);
    let crores = number / &crore;
    let rest = (number % &crore).to_u64().unwrap_or_default();

    let head = format!("{} Crore", big_to_words(&crores));
    if rest == 0 {
        head
    } else {
        format!("{} {}", head, to_words(rest))
    }
}

/// Legal amount line, e.g. `Two Thousand One Hundred Seventy Four Rupees Only`
pub fn legal_amount_line(amount: &BigDecimal, currency_unit: &str) -> String {
    format!("{} {} Only", amount_in_words(amount), currency_unit)
}
