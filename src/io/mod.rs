//! Input/output helpers.
//!
//! - conversion result JSON export (`export`)

pub mod export;

pub use export::*;
