//! Per-line tax calculation

use bigdecimal::{BigDecimal, RoundingMode};

use crate::config::RoundingPolicy;
use crate::tax::gst::{GstCalculation, GstRate, SupplyType};
use crate::types::{LineItem, LineItemTotals};

/// Compute a line's totals at full precision.
///
/// Inter-state lines carry the whole rate as IGST; intra-state lines split it
/// evenly into CGST and SGST.
pub fn compute_line_totals(item: &LineItem, is_inter_state: bool) -> LineItemTotals {
    compute_line_totals_with(item, is_inter_state, RoundingPolicy::Exact)
}

/// Compute a line's totals under the given rounding policy
pub fn compute_line_totals_with(
    item: &LineItem,
    is_inter_state: bool,
    rounding: RoundingPolicy,
) -> LineItemTotals {
    let round = |amount: BigDecimal| match rounding {
        RoundingPolicy::Exact => amount,
        RoundingPolicy::PerLine => round_to_paise(&amount),
    };

    let gross_amount = &item.quantity * &item.rate;
    let discount_amount = round(&gross_amount * &item.discount_percent / BigDecimal::from(100));
    let taxable_amount = &gross_amount - &discount_amount;

    let rate = GstRate::for_supply(
        item.tax_rate_percent.clone(),
        SupplyType::from_inter_state(is_inter_state),
    );
    let gst = GstCalculation::calculate(taxable_amount.clone(), &rate);
    let cgst_amount = round(gst.cgst_amount);
    let sgst_amount = round(gst.sgst_amount);
    let igst_amount = round(gst.igst_amount);

    let total_amount = &taxable_amount + &cgst_amount + &sgst_amount + &igst_amount;

    LineItemTotals {
        gross_amount,
        discount_amount,
        taxable_amount,
        cgst_amount,
        sgst_amount,
        igst_amount,
        total_amount,
    }
}

/// Round half-up to two decimal places
pub fn round_to_paise(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn sample_item() -> LineItem {
        LineItem::new("Steel bracket".to_string(), dec("10"), dec("100"))
            .with_discount(dec("10"))
            .with_tax_rate(dec("18"))
    }

    #[test]
    fn test_intra_state_line() {
        let totals = compute_line_totals(&sample_item(), false);

        assert_eq!(totals.gross_amount, dec("1000"));
        assert_eq!(totals.discount_amount, dec("100"));
        assert_eq!(totals.taxable_amount, dec("900"));
        assert_eq!(totals.cgst_amount, dec("81"));
        assert_eq!(totals.sgst_amount, dec("81"));
        assert_eq!(totals.igst_amount, dec("0"));
        assert_eq!(totals.total_amount, dec("1062"));
    }

    #[test]
    fn test_inter_state_line() {
        let totals = compute_line_totals(&sample_item(), true);

        assert_eq!(totals.igst_amount, dec("162"));
        assert_eq!(totals.cgst_amount, dec("0"));
        assert_eq!(totals.sgst_amount, dec("0"));
        assert_eq!(totals.total_amount, dec("1062"));
        assert_eq!(totals.total_tax(), dec("162"));
    }

    #[test]
    fn test_zero_quantity_line() {
        let item = LineItem::new("Empty".to_string(), dec("0"), dec("499.99")).with_tax_rate(dec("28"));
        let totals = compute_line_totals(&item, false);
        assert_eq!(totals.total_amount, dec("0"));
    }

    #[test]
    fn test_exact_keeps_fractional_paise() {
        let item = LineItem::new("Thread".to_string(), dec("3"), dec("3.33")).with_tax_rate(dec("5"));
        let totals = compute_line_totals(&item, false);

        // 9.99 × 2.5% = 0.24975
        assert_eq!(totals.cgst_amount, dec("0.24975"));
        assert_eq!(totals.total_amount, dec("10.4895"));
    }

    #[test]
    fn test_per_line_rounding() {
        let item = LineItem::new("Thread".to_string(), dec("3"), dec("3.33")).with_tax_rate(dec("5"));
        let totals = compute_line_totals_with(&item, false, RoundingPolicy::PerLine);

        assert_eq!(totals.cgst_amount, dec("0.25"));
        assert_eq!(totals.sgst_amount, dec("0.25"));
        assert_eq!(totals.total_amount, dec("10.49"));
    }

    #[test]
    fn test_line_totals_are_deterministic() {
        let item = sample_item();
        assert_eq!(
            compute_line_totals(&item, false),
            compute_line_totals(&item, false)
        );
    }

    #[test]
    fn test_round_to_paise_half_up() {
        assert_eq!(round_to_paise(&dec("2.345")), dec("2.35"));
        assert_eq!(round_to_paise(&dec("2.344")), dec("2.34"));
    }
}
