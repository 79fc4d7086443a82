//! Shared conversion pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> convert over all ratios -> pairs + accessible summary
//!
//! The CLI and the TUI can then focus on presentation (printing vs panes).

use crate::domain::{ConversionResult, ConversionTable, ConvertOutcome, ParsedInput};
use crate::parse::parse_value;
use crate::report::{format_summary, pair_for};

/// The single user-facing message for any validation failure.
///
/// `EmptyInput` and `NotANumber` are deliberately indistinguishable here; the
/// internal reason travels on `ConvertOutcome::Rejected` for diagnostics.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number to convert.";

/// Run one conversion cycle over the raw input text.
///
/// Pure function of its input and the table: no side effects, and identical
/// input yields byte-identical output, so re-running a cycle for unchanged
/// text is harmless.
pub fn run_convert(raw: &str, table: &ConversionTable) -> ConvertOutcome {
    let value = match parse_value(raw) {
        ParsedInput::Valid(value) => value,
        ParsedInput::Invalid(reason) => {
            return ConvertOutcome::Rejected {
                reason,
                message: INVALID_INPUT_MESSAGE.to_string(),
            };
        }
    };

    // Table order is the contract: pair N feeds output target N.
    let pairs = table.ratios().iter().map(|r| pair_for(value, r)).collect();

    ConvertOutcome::Converted(ConversionResult {
        value,
        pairs,
        summary: format_summary(value, table),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InvalidReason, RatioKind};

    fn convert(raw: &str) -> ConvertOutcome {
        run_convert(raw, ConversionTable::standard())
    }

    #[test]
    fn invalid_inputs_share_one_message() {
        for raw in ["", "   ", "abc"] {
            match convert(raw) {
                ConvertOutcome::Rejected { message, .. } => {
                    assert_eq!(message, INVALID_INPUT_MESSAGE)
                }
                other => panic!("expected rejection for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn internal_reason_stays_distinct() {
        let ConvertOutcome::Rejected { reason, .. } = convert("  ") else {
            panic!("expected rejection");
        };
        assert_eq!(reason, InvalidReason::EmptyInput);

        let ConvertOutcome::Rejected { reason, .. } = convert("5abc") else {
            panic!("expected rejection");
        };
        assert_eq!(reason, InvalidReason::NotANumber);
    }

    #[test]
    fn converts_five_across_all_ratios() {
        let ConvertOutcome::Converted(result) = convert("5") else {
            panic!("expected conversion");
        };
        assert_eq!(result.value, 5.0);
        assert_eq!(result.pairs.len(), 3);
        assert_eq!(
            result.pairs[0].display_line(),
            "5 metres = 16.404 feet | 5 feet = 1.524 metres"
        );
        assert_eq!(
            result.pairs[1].display_line(),
            "5 litres = 1.321 gallons | 5 gallons = 18.927 litres"
        );
        assert_eq!(
            result.pairs[2].display_line(),
            "5 kilograms = 11.023 pounds | 5 pounds = 2.268 kilograms"
        );
        assert_eq!(result.summary, "5 entered. 16.404 feet; 1.321 gallons; 11.023 pounds.");
    }

    #[test]
    fn zero_pads_every_derived_figure() {
        let ConvertOutcome::Converted(result) = convert("0") else {
            panic!("expected conversion");
        };
        for pair in &result.pairs {
            assert!(pair.forward.ends_with(&format!("0.000 {}", unit_of(pair.ratio).1)));
            assert!(pair.backward.ends_with(&format!("0.000 {}", unit_of(pair.ratio).0)));
        }
    }

    #[test]
    fn pairs_preserve_table_order() {
        let ConvertOutcome::Converted(result) = convert("2.5") else {
            panic!("expected conversion");
        };
        let kinds: Vec<RatioKind> = result.pairs.iter().map(|p| p.ratio).collect();
        assert_eq!(kinds, vec![RatioKind::Length, RatioKind::Volume, RatioKind::Mass]);
    }

    #[test]
    fn identical_input_is_byte_identical() {
        assert_eq!(convert("12.75"), convert("12.75"));
        assert_eq!(convert("nonsense"), convert("nonsense"));
    }

    fn unit_of(kind: RatioKind) -> (&'static str, &'static str) {
        let ratio = ConversionTable::standard().get(kind);
        (ratio.forward_unit, ratio.backward_unit)
    }
}
