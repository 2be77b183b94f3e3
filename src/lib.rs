//! # GST Invoice Core
//!
//! Tax and totals engine for Indian GST invoices, with Indian-style amount
//! formatting and amount-in-words rendering.
//!
//! ## Features
//!
//! - **Line tax calculation**: gross, discount, taxable value and the CGST/SGST or IGST split
//! - **Invoice totals**: subtotal, tax sums, shipping and other charges, grand total
//! - **Indian formatting**: `12,34,567.89` digit grouping and crore/lakh amount in words
//! - **GSTIN handling**: layout and checksum validation, state-code extraction
//! - **Explicit configuration**: rounding policy, currency unit, invoice numbering
//!
//! All amounts are [`bigdecimal::BigDecimal`]. Arithmetic never fails: blank or
//! malformed form input is coerced to zero.
//!
//! ## Quick Start
//!
//! ```rust
//! use gst_invoice_core::{aggregate, AdditionalCharges, JurisdictionContext, LineItem};
//! use bigdecimal::BigDecimal;
//!
//! let jurisdiction = JurisdictionContext::new("27", "27");
//! let items = vec![LineItem::new("Consulting".to_string(), BigDecimal::from(10), BigDecimal::from(100))
//!     .with_discount(BigDecimal::from(10))
//!     .with_tax_rate(BigDecimal::from(18))];
//!
//! let totals = aggregate(&items, jurisdiction.is_inter_state(), &AdditionalCharges::default());
//! assert_eq!(totals.grand_total, BigDecimal::from(1062));
//! assert_eq!(totals.amount_line, "One Thousand Sixty Two Rupees Only");
//! ```

pub mod config;
pub mod format;
pub mod invoice;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use format::*;
pub use invoice::*;
pub use tax::gst::*;
pub use traits::*;
pub use types::*;
