//! Tax rules applied by the invoice engine

pub mod gst;

pub use gst::*;
