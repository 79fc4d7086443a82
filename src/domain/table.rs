//! The static conversion table.
//!
//! Three fixed ratios exist for the lifetime of the process. Iteration order
//! (length, volume, mass) is an observable contract: each ratio maps to a
//! fixed, distinct output target.

use crate::domain::types::{Ratio, RatioKind};

static STANDARD: ConversionTable = ConversionTable {
    ratios: [
        Ratio {
            kind: RatioKind::Length,
            forward_unit: "metres",
            backward_unit: "feet",
            factor: 3.28084,
        },
        Ratio {
            kind: RatioKind::Volume,
            forward_unit: "litres",
            backward_unit: "gallons",
            factor: 0.264172,
        },
        Ratio {
            kind: RatioKind::Mass,
            forward_unit: "kilograms",
            backward_unit: "pounds",
            factor: 2.20462,
        },
    ],
};

/// Read-only set of the three fixed ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    // Indexed by `RatioKind as usize`; construction keeps the two in sync.
    ratios: [Ratio; 3],
}

impl ConversionTable {
    /// The built-in metres/feet, litres/gallons, kilograms/pounds table.
    pub fn standard() -> &'static ConversionTable {
        &STANDARD
    }

    /// All ratios in display order.
    pub fn ratios(&self) -> &[Ratio] {
        &self.ratios
    }

    /// Look up a single ratio by kind.
    pub fn get(&self, kind: RatioKind) -> &Ratio {
        &self.ratios[kind as usize]
    }
}
