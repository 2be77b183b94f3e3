//! Display formatting for amounts: Indian digit grouping and amount in words

pub mod indian;
pub mod words;

pub use indian::*;
pub use words::{amount_in_words, legal_amount_line, to_words};
