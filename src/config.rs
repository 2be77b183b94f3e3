//! Engine configuration passed explicitly to calculators

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{InvoiceError, InvoiceResult};

/// Largest fraction-digit count accepted for display formatting
pub const MAX_DISPLAY_SCALE: i64 = 4;

/// When monetary amounts are rounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Keep full precision everywhere; round only when formatting for display
    #[default]
    Exact,
    /// Round each line's discount and tax amounts half-up to paise before
    /// deriving the line's taxable value and total
    PerLine,
}

/// Invoice number sequence, e.g. `INV/2024-25/0001`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceNumbering {
    pub prefix: String,
    /// Minimum width of the sequence number, zero padded
    pub padding: usize,
    /// Sequence number the next issued invoice receives
    pub next: u64,
}

impl Default for InvoiceNumbering {
    fn default() -> Self {
        Self {
            prefix: "INV".to_string(),
            padding: 4,
            next: 1,
        }
    }
}

impl InvoiceNumbering {
    /// Issue the next invoice number for an invoice dated `date`.
    ///
    /// Fails without consuming a number once the sequence is exhausted.
    pub fn issue(&mut self, date: NaiveDate) -> InvoiceResult<String> {
        let following = self.next.checked_add(1).ok_or_else(|| {
            InvoiceError::Config(format!(
                "Invoice number sequence for prefix {} is exhausted",
                self.prefix
            ))
        })?;
        let number = format!(
            "{}/{}/{:0width$}",
            self.prefix,
            financial_year(date),
            self.next,
            width = self.padding
        );
        self.next = following;
        Ok(number)
    }
}

/// Indian financial year label (April to March) containing `date`, e.g. `2024-25`
pub fn financial_year(date: NaiveDate) -> String {
    let start = if date.month() >= 4 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{:02}", start, (start + 1).rem_euclid(100))
}

/// Settings for totals computation and rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Currency unit printed in the amount-in-words line
    pub currency_unit: String,
    pub rounding: RoundingPolicy,
    /// Fraction digits used by display formatting
    pub display_scale: i64,
    pub numbering: InvoiceNumbering,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_unit: "Rupees".to_string(),
            rounding: RoundingPolicy::Exact,
            display_scale: 2,
            numbering: InvoiceNumbering::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from JSON; absent fields take their defaults
    pub fn from_json_str(json: &str) -> InvoiceResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| InvoiceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> InvoiceResult<()> {
        if self.currency_unit.trim().is_empty() {
            return Err(InvoiceError::Config(
                "Currency unit cannot be empty".to_string(),
            ));
        }

        if !(0..=MAX_DISPLAY_SCALE).contains(&self.display_scale) {
            return Err(InvoiceError::Config(format!(
                "Display scale must be between 0 and {}, got {}",
                MAX_DISPLAY_SCALE, self.display_scale
            )));
        }

        if self.numbering.prefix.trim().is_empty() {
            return Err(InvoiceError::Config(
                "Invoice number prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
