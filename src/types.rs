//! Core records consumed and produced by the invoice engine

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::tax::gst::{self, GstCategory, GstError, SupplyType};
use crate::traits::GstinValidator;
use crate::utils::parse::{
    clamp_non_negative, clamp_percent, parse_non_negative_decimal, parse_percent,
};

/// A single invoice line as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identifier so rendering layers can key rows
    pub id: Uuid,
    /// Free-text line description
    pub description: String,
    /// HSN (goods) or SAC (services) classification code
    pub hsn_code: Option<String>,
    /// Number of units; never negative
    pub quantity: BigDecimal,
    /// Price per unit
    pub rate: BigDecimal,
    /// Discount percentage in `[0, 100]`
    pub discount_percent: BigDecimal,
    /// Combined GST rate percentage in `[0, 100]`
    pub tax_rate_percent: BigDecimal,
}

impl LineItem {
    /// Create a line with no discount and no tax. Negative values are clamped to zero.
    pub fn new(description: String, quantity: BigDecimal, rate: BigDecimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            hsn_code: None,
            quantity: clamp_non_negative(quantity),
            rate: clamp_non_negative(rate),
            discount_percent: BigDecimal::from(0),
            tax_rate_percent: BigDecimal::from(0),
        }
    }

    pub fn with_discount(mut self, discount_percent: BigDecimal) -> Self {
        self.discount_percent = clamp_percent(discount_percent);
        self
    }

    pub fn with_tax_rate(mut self, tax_rate_percent: BigDecimal) -> Self {
        self.tax_rate_percent = clamp_percent(tax_rate_percent);
        self
    }

    /// Use the combined rate of a standard GST slab
    pub fn with_category(self, category: GstCategory) -> Self {
        self.with_tax_rate(category.rate())
    }

    pub fn with_hsn_code(mut self, hsn_code: impl Into<String>) -> Self {
        self.hsn_code = Some(hsn_code.into());
        self
    }
}

/// Raw line fields straight from an edit form. Numbers are kept as text and
/// may be blank or half-typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItemInput {
    /// Identifier of an existing row; a fresh one is generated when absent
    pub id: Option<Uuid>,
    /// Line description; absent reads as empty
    pub description: Option<String>,
    /// HSN or SAC code; blank reads as none
    pub hsn_code: Option<String>,
    /// Quantity text; blank, garbage, or negative reads as zero
    pub quantity: Option<String>,
    /// Unit price text; blank, garbage, or negative reads as zero
    pub rate: Option<String>,
    /// Discount percentage text, clamped into `[0, 100]`
    pub discount_percent: Option<String>,
    /// Combined GST rate percentage text, clamped into `[0, 100]`
    pub tax_rate_percent: Option<String>,
}

impl LineItemInput {
    /// Coerce the raw fields into a [`LineItem`]; never fails
    pub fn parse(&self) -> LineItem {
        LineItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            description: self.description.clone().unwrap_or_default(),
            hsn_code: self.hsn_code.clone().filter(|code| !code.trim().is_empty()),
            quantity: parse_non_negative_decimal(self.quantity.as_deref()),
            rate: parse_non_negative_decimal(self.rate.as_deref()),
            discount_percent: parse_percent(self.discount_percent.as_deref()),
            tax_rate_percent: parse_percent(self.tax_rate_percent.as_deref()),
        }
    }
}

/// Computed amounts for one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemTotals {
    /// quantity × rate
    pub gross_amount: BigDecimal,
    /// gross × discount%
    pub discount_amount: BigDecimal,
    /// gross − discount
    pub taxable_amount: BigDecimal,
    /// Half the tax on intra-state supply, zero otherwise
    pub cgst_amount: BigDecimal,
    /// Equal to CGST
    pub sgst_amount: BigDecimal,
    /// Full tax on inter-state supply, zero otherwise
    pub igst_amount: BigDecimal,
    /// taxable + CGST + SGST + IGST
    pub total_amount: BigDecimal,
}

impl LineItemTotals {
    pub fn total_tax(&self) -> BigDecimal {
        &self.cgst_amount + &self.sgst_amount + &self.igst_amount
    }
}

/// A line together with its computed totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    pub item: LineItem,
    pub totals: LineItemTotals,
}

/// Untaxed charges added after tax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCharges {
    /// Shipping or freight, not taxed
    pub shipping: BigDecimal,
    /// Any other untaxed charge
    pub other: BigDecimal,
}

impl AdditionalCharges {
    /// Negative charges are clamped to zero
    pub fn new(shipping: BigDecimal, other: BigDecimal) -> Self {
        Self {
            shipping: clamp_non_negative(shipping),
            other: clamp_non_negative(other),
        }
    }

    /// Build from raw form fields; blank or unparseable values become zero
    pub fn from_input(shipping: Option<&str>, other: Option<&str>) -> Self {
        Self {
            shipping: parse_non_negative_decimal(shipping),
            other: parse_non_negative_decimal(other),
        }
    }

    pub fn total(&self) -> BigDecimal {
        &self.shipping + &self.other
    }
}

impl Default for AdditionalCharges {
    fn default() -> Self {
        Self {
            shipping: BigDecimal::from(0),
            other: BigDecimal::from(0),
        }
    }
}

/// Supplier and customer state codes for an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionContext {
    /// Two-digit state code of the supplier's registration
    pub supplier_state_code: String,
    /// Two-digit state code of the customer (place of supply)
    pub customer_state_code: String,
}

impl JurisdictionContext {
    pub fn new(
        supplier_state_code: impl Into<String>,
        customer_state_code: impl Into<String>,
    ) -> Self {
        Self {
            supplier_state_code: supplier_state_code.into(),
            customer_state_code: customer_state_code.into(),
        }
    }

    /// Derive both state codes from GSTINs, validating each with `validator`
    pub fn from_gstins_with(
        validator: &dyn GstinValidator,
        supplier_gstin: &str,
        customer_gstin: &str,
    ) -> Result<Self, GstError> {
        validator.validate_gstin(supplier_gstin)?;
        validator.validate_gstin(customer_gstin)?;
        Ok(Self::new(
            gst::state_code_from_gstin(supplier_gstin)?,
            gst::state_code_from_gstin(customer_gstin)?,
        ))
    }

    /// Derive both state codes from fully validated GSTINs
    pub fn from_gstins(supplier_gstin: &str, customer_gstin: &str) -> Result<Self, GstError> {
        Self::from_gstins_with(
            &crate::traits::DefaultGstinValidator,
            supplier_gstin,
            customer_gstin,
        )
    }

    pub fn supply_type(&self) -> SupplyType {
        SupplyType::from_state_codes(&self.supplier_state_code, &self.customer_state_code)
    }

    pub fn is_inter_state(&self) -> bool {
        self.supply_type().is_inter_state()
    }

    /// Printable place of supply, e.g. `Karnataka (29)`
    pub fn place_of_supply(&self) -> String {
        match gst::state_name(&self.customer_state_code) {
            Some(name) => format!("{} ({})", name, self.customer_state_code),
            None => self.customer_state_code.clone(),
        }
    }
}

/// Rate-wise tax summary row, as printed beneath the line table of a GST invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSummaryRow {
    /// Combined rate, normalized so `18` and `18.00` share a row
    pub tax_rate_percent: BigDecimal,
    /// Sum of taxable amounts at this rate
    pub taxable_amount: BigDecimal,
    /// CGST collected at this rate
    pub cgst_amount: BigDecimal,
    /// SGST collected at this rate
    pub sgst_amount: BigDecimal,
    /// IGST collected at this rate
    pub igst_amount: BigDecimal,
}

/// Aggregate totals for an invoice; recomputed from scratch on every edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Each input line with its computed totals, in input order
    pub lines: Vec<PricedLine>,
    /// Sum of taxable amounts
    pub subtotal: BigDecimal,
    /// Sum of line discounts
    pub total_discount: BigDecimal,
    /// Sum of line CGST
    pub total_cgst: BigDecimal,
    /// Sum of line SGST
    pub total_sgst: BigDecimal,
    /// Sum of line IGST
    pub total_igst: BigDecimal,
    /// Charges added after tax
    pub charges: AdditionalCharges,
    /// subtotal + all tax + charges
    pub grand_total: BigDecimal,
    /// Words for the whole-currency part of the grand total, e.g. `One Lakh`
    pub amount_in_words: String,
    /// Legal amount line, e.g. `One Lakh Rupees Only`
    pub amount_line: String,
}

impl InvoiceTotals {
    pub fn total_tax(&self) -> BigDecimal {
        &self.total_cgst + &self.total_sgst + &self.total_igst
    }

    /// Group taxable value and tax amounts by combined rate, lowest rate first
    pub fn tax_summary(&self) -> Vec<TaxSummaryRow> {
        let mut rows: BTreeMap<BigDecimal, TaxSummaryRow> = BTreeMap::new();

        for line in &self.lines {
            let rate = line.item.tax_rate_percent.normalized();
            let row = rows.entry(rate.clone()).or_insert_with(|| TaxSummaryRow {
                tax_rate_percent: rate,
                taxable_amount: BigDecimal::from(0),
                cgst_amount: BigDecimal::from(0),
                sgst_amount: BigDecimal::from(0),
                igst_amount: BigDecimal::from(0),
            });
            row.taxable_amount += &line.totals.taxable_amount;
            row.cgst_amount += &line.totals.cgst_amount;
            row.sgst_amount += &line.totals.sgst_amount;
            row.igst_amount += &line.totals.igst_amount;
        }

        rows.into_values().collect()
    }
}

/// Errors raised outside the arithmetic path (configuration, GSTINs)
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Gst(#[from] GstError),
}

/// Result type for fallible engine operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_line_item_clamps_negative_values() {
        let item = LineItem::new("Bolt".to_string(), BigDecimal::from(-2), BigDecimal::from(10))
            .with_discount(BigDecimal::from(120))
            .with_tax_rate(BigDecimal::from(-18));

        assert_eq!(item.quantity, BigDecimal::from(0));
        assert_eq!(item.rate, BigDecimal::from(10));
        assert_eq!(item.discount_percent, BigDecimal::from(100));
        assert_eq!(item.tax_rate_percent, BigDecimal::from(0));
    }

    #[test]
    fn test_line_item_input_parse() {
        let input = LineItemInput {
            description: Some("Widget".to_string()),
            hsn_code: Some(" ".to_string()),
            quantity: Some("3".to_string()),
            rate: Some("".to_string()),
            discount_percent: None,
            tax_rate_percent: Some("12.5".to_string()),
            ..Default::default()
        };
        let item = input.parse();

        assert_eq!(item.description, "Widget");
        assert_eq!(item.hsn_code, None);
        assert_eq!(item.quantity, BigDecimal::from(3));
        assert_eq!(item.rate, BigDecimal::from(0));
        assert_eq!(item.discount_percent, BigDecimal::from(0));
        assert_eq!(item.tax_rate_percent, BigDecimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_line_item_input_out_of_range_text() {
        let item = LineItemInput {
            quantity: Some("-4".to_string()),
            rate: Some("12abc".to_string()),
            discount_percent: Some("250".to_string()),
            tax_rate_percent: Some("-18".to_string()),
            ..Default::default()
        }
        .parse();

        assert_eq!(item.description, "");
        assert_eq!(item.quantity, BigDecimal::from(0));
        assert_eq!(item.rate, BigDecimal::from(0));
        assert_eq!(item.discount_percent, BigDecimal::from(100));
        assert_eq!(item.tax_rate_percent, BigDecimal::from(0));
    }

    #[test]
    fn test_line_item_input_keeps_id() {
        let id = Uuid::new_v4();
        let input = LineItemInput {
            id: Some(id),
            ..Default::default()
        };
        assert_eq!(input.parse().id, id);
    }

    #[test]
    fn test_line_item_input_from_json() {
        let input: LineItemInput =
            serde_json::from_str(r#"{"quantity": "10", "rate": "abc"}"#).unwrap();
        let item = input.parse();
        assert_eq!(item.quantity, BigDecimal::from(10));
        assert_eq!(item.rate, BigDecimal::from(0));
    }

    #[test]
    fn test_additional_charges_from_input() {
        let charges = AdditionalCharges::from_input(Some("50"), Some("oops"));
        assert_eq!(charges.shipping, BigDecimal::from(50));
        assert_eq!(charges.other, BigDecimal::from(0));
        assert_eq!(charges.total(), BigDecimal::from(50));
    }

    #[test]
    fn test_jurisdiction() {
        let same = JurisdictionContext::new("27", "27");
        assert!(!same.is_inter_state());
        assert_eq!(same.supply_type(), SupplyType::IntraState);

        let different = JurisdictionContext::new("27", "29");
        assert!(different.is_inter_state());
        assert_eq!(different.place_of_supply(), "Karnataka (29)");

        assert_eq!(JurisdictionContext::new("X", "Y").place_of_supply(), "Y");
    }

    #[test]
    fn test_jurisdiction_from_gstins() {
        let ctx = JurisdictionContext::from_gstins("27AAPFU0939F1ZV", "29AAGCB7383J1Z4").unwrap();
        assert_eq!(ctx.supplier_state_code, "27");
        assert_eq!(ctx.customer_state_code, "29");
        assert!(ctx.is_inter_state());

        assert!(JurisdictionContext::from_gstins("27AAPFU0939F1ZA", "29AAGCB7383J1Z4").is_err());
    }
}
