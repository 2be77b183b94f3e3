//! Utility modules

pub mod parse;

pub use parse::*;
