//! Invoice engine: per-line tax calculation and invoice-level totals

pub mod line;
pub mod totals;

pub use line::*;
pub use totals::*;
