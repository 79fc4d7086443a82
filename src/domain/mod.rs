//! Domain types used throughout the conversion pipeline.
//!
//! This module defines:
//!
//! - the fixed conversion ratios and their table (`Ratio`, `ConversionTable`)
//! - validation outcomes (`ParsedInput`, `InvalidReason`)
//! - conversion outputs (`ConversionPair`, `ConversionResult`, `ConvertOutcome`)

pub mod table;
pub mod types;

pub use table::*;
pub use types::*;
