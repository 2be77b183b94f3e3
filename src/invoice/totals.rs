//! Invoice-level aggregation of line totals and charges

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::format::{format_indian_with_scale, words};
use crate::invoice::line::compute_line_totals_with;
use crate::traits::LineItemSource;
use crate::types::{
    AdditionalCharges, InvoiceResult, InvoiceTotals, JurisdictionContext, LineItemTotals,
    PricedLine,
};

/// Aggregate all lines and charges using the default configuration.
///
/// An empty item list yields zero totals and `Zero` in words.
pub fn aggregate<T: LineItemSource>(
    items: &[T],
    is_inter_state: bool,
    charges: &AdditionalCharges,
) -> InvoiceTotals {
    aggregate_with(items, is_inter_state, charges, &EngineConfig::default())
}

/// Aggregate all lines and charges under an explicit configuration
pub fn aggregate_with<T: LineItemSource>(
    items: &[T],
    is_inter_state: bool,
    charges: &AdditionalCharges,
    config: &EngineConfig,
) -> InvoiceTotals {
    let lines: Vec<PricedLine> = items
        .iter()
        .map(|source| {
            let item = source.to_line_item();
            let totals = compute_line_totals_with(&item, is_inter_state, config.rounding);
            PricedLine { item, totals }
        })
        .collect();

    let subtotal = sum_field(&lines, |t| &t.taxable_amount);
    let total_discount = sum_field(&lines, |t| &t.discount_amount);
    let total_cgst = sum_field(&lines, |t| &t.cgst_amount);
    let total_sgst = sum_field(&lines, |t| &t.sgst_amount);
    let total_igst = sum_field(&lines, |t| &t.igst_amount);

    let grand_total =
        &subtotal + &total_cgst + &total_sgst + &total_igst + &charges.shipping + &charges.other;

    let amount_in_words = words::amount_in_words(&grand_total);
    let amount_line = words::legal_amount_line(&grand_total, &config.currency_unit);

    debug!(
        lines = lines.len(),
        inter_state = is_inter_state,
        subtotal = %subtotal,
        grand_total = %grand_total,
        "Invoice totals computed"
    );

    InvoiceTotals {
        lines,
        subtotal,
        total_discount,
        total_cgst,
        total_sgst,
        total_igst,
        charges: charges.clone(),
        grand_total,
        amount_in_words,
        amount_line,
    }
}

fn sum_field(
    lines: &[PricedLine],
    field: impl Fn(&LineItemTotals) -> &BigDecimal,
) -> BigDecimal {
    lines.iter().map(|line| field(&line.totals)).sum()
}

/// Totals calculator bound to one invoice's jurisdiction and settings
#[derive(Debug, Clone)]
pub struct InvoiceCalculator {
    config: EngineConfig,
    jurisdiction: JurisdictionContext,
}

impl InvoiceCalculator {
    pub fn new(config: EngineConfig, jurisdiction: JurisdictionContext) -> Self {
        Self {
            config,
            jurisdiction,
        }
    }

    /// Like [`InvoiceCalculator::new`] but rejects an invalid configuration
    pub fn try_new(config: EngineConfig, jurisdiction: JurisdictionContext) -> InvoiceResult<Self> {
        config.validate()?;
        Ok(Self::new(config, jurisdiction))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn jurisdiction(&self) -> &JurisdictionContext {
        &self.jurisdiction
    }

    /// Totals for a single line
    pub fn line_totals<T: LineItemSource>(&self, item: &T) -> LineItemTotals {
        compute_line_totals_with(
            &item.to_line_item(),
            self.jurisdiction.is_inter_state(),
            self.config.rounding,
        )
    }

    /// Totals for the whole invoice
    pub fn aggregate<T: LineItemSource>(
        &self,
        items: &[T],
        charges: &AdditionalCharges,
    ) -> InvoiceTotals {
        aggregate_with(
            items,
            self.jurisdiction.is_inter_state(),
            charges,
            &self.config,
        )
    }

    /// Format an amount for display with the configured scale.
    /// Out-of-range scales from an unvalidated config are clamped.
    pub fn format_amount(&self, amount: &BigDecimal) -> String {
        format_indian_with_scale(amount, self.config.display_scale)
    }
}
