//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - produced fresh on every conversion cycle
//! - rendered by both the CLI and the TUI front-ends
//! - exported to JSON

use chrono::{DateTime, Local};
use serde::Serialize;

/// Which fixed unit pair a ratio converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioKind {
    Length,
    Volume,
    Mass,
}

impl RatioKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            RatioKind::Length => "Length",
            RatioKind::Volume => "Volume",
            RatioKind::Mass => "Mass",
        }
    }
}

/// A named, fixed multiplicative conversion factor between two units.
///
/// Forward conversion multiplies by `factor`; backward conversion divides by it.
/// Instances are startup constants and `factor > 0` always holds, so backward
/// conversion is never a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratio {
    pub kind: RatioKind,
    /// Unit the entered value is expressed in (e.g. `metres`).
    pub forward_unit: &'static str,
    /// Unit the forward conversion produces (e.g. `feet`).
    pub backward_unit: &'static str,
    pub factor: f64,
}

/// Outcome of validating raw input text.
///
/// Validation failure is an ordinary, representable outcome; nothing is thrown
/// across this boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    Valid(f64),
    Invalid(InvalidReason),
}

/// Why raw input text did not validate.
///
/// Both reasons collapse to one displayed message; the distinction is kept for
/// diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    EmptyInput,
    NotANumber,
}

/// One rendered bidirectional conversion line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionPair {
    pub ratio: RatioKind,
    /// `"{value} {fwd} = {value × factor} {bwd}"`
    pub forward: String,
    /// `"{value} {bwd} = {value ÷ factor} {fwd}"`
    pub backward: String,
}

impl ConversionPair {
    /// The combined line written into a pair display.
    pub fn display_line(&self) -> String {
        format!("{} | {}", self.forward, self.backward)
    }
}

/// All outputs of one successful conversion.
///
/// `pairs` preserves table order (length, volume, mass); each pair maps to a
/// fixed output target. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub pairs: Vec<ConversionPair>,
    /// Forward-direction-only summary for assistive readers.
    pub summary: String,
}

/// The engine's ordinary return value: a result or a user-facing rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertOutcome {
    Converted(ConversionResult),
    Rejected {
        reason: InvalidReason,
        message: String,
    },
}

/// A saved conversion file (JSON export).
#[derive(Debug, Clone, Serialize)]
pub struct ResultFile {
    pub tool: String,
    pub exported_at: DateTime<Local>,
    pub result: ConversionResult,
}
