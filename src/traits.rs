//! Seams between the engine and its callers

use crate::tax::gst::{self, GstError};
use crate::types::{LineItem, LineItemInput};

/// Anything the aggregator can turn into a [`LineItem`].
///
/// Lets typed lines and raw form rows flow through the same totals path.
pub trait LineItemSource {
    fn to_line_item(&self) -> LineItem;
}

impl LineItemSource for LineItem {
    fn to_line_item(&self) -> LineItem {
        self.clone()
    }
}

impl LineItemSource for LineItemInput {
    fn to_line_item(&self) -> LineItem {
        self.parse()
    }
}

/// Trait for plugging in GSTIN validation rules
pub trait GstinValidator: Send + Sync {
    fn validate_gstin(&self, gstin: &str) -> Result<(), GstError>;
}

/// Checks layout, state code and the mod-36 check character
pub struct DefaultGstinValidator;

impl GstinValidator for DefaultGstinValidator {
    fn validate_gstin(&self, gstin: &str) -> Result<(), GstError> {
        gst::validate_gstin(gstin)
    }
}

/// Checks layout and state code only. Useful for test fixtures and
/// provisional registrations whose check character is not yet known.
pub struct FormatOnlyGstinValidator;

impl GstinValidator for FormatOnlyGstinValidator {
    fn validate_gstin(&self, gstin: &str) -> Result<(), GstError> {
        gst::validate_gstin_format(gstin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JurisdictionContext;

    #[test]
    fn test_format_only_validator_skips_checksum() {
        assert!(DefaultGstinValidator
            .validate_gstin("27AAPFU0939F1ZA")
            .is_err());
        assert!(FormatOnlyGstinValidator
            .validate_gstin("27AAPFU0939F1ZA")
            .is_ok());

        let ctx = JurisdictionContext::from_gstins_with(
            &FormatOnlyGstinValidator,
            "27AAPFU0939F1ZA",
            "27AAGCB7383J1Z1",
        )
        .unwrap();
        assert!(!ctx.is_inter_state());
    }

    #[test]
    fn test_line_item_source_for_input() {
        let input = LineItemInput {
            quantity: Some("2".to_string()),
            rate: Some("250".to_string()),
            ..Default::default()
        };
        let item = input.to_line_item();
        assert_eq!(item.rate, bigdecimal::BigDecimal::from(250));
    }
}
