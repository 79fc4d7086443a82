//! Sink fan-out for conversion output.
//!
//! The presenter pushes a `ConvertOutcome` into dependency-injected output
//! targets. It has no conversion logic of its own: the front-end decides which
//! targets exist, the presenter decides only what text lands where.
//!
//! Update rules:
//! - rejection: the single message goes into every configured pair target;
//!   the summary target is left untouched (the live region only announces
//!   successes)
//! - success: pair N goes into target N by table order, summary into the
//!   summary target
//! - a `None` target is silently skipped; an absent sink is not an error

use crate::domain::ConvertOutcome;

/// Number of pair displays; one per ratio in the table.
pub const PAIR_TARGETS: usize = 3;

/// The text sinks a front-end exposes to the presenter.
///
/// `None` means "this target is not configured"; `Some` holds the text last
/// written to the target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputTargets {
    pub pairs: [Option<String>; PAIR_TARGETS],
    pub summary: Option<String>,
}

impl OutputTargets {
    /// Targets for a front-end that renders all four regions.
    pub fn all_configured() -> Self {
        Self {
            pairs: std::array::from_fn(|_| Some(String::new())),
            summary: Some(String::new()),
        }
    }
}

/// Render an outcome into the configured targets.
pub fn present(outcome: &ConvertOutcome, targets: &mut OutputTargets) {
    match outcome {
        ConvertOutcome::Rejected { message, .. } => {
            for slot in targets.pairs.iter_mut().flatten() {
                *slot = message.clone();
            }
        }
        ConvertOutcome::Converted(result) => {
            for (slot, pair) in targets.pairs.iter_mut().zip(&result.pairs) {
                if let Some(text) = slot {
                    *text = pair.display_line();
                }
            }
            if let Some(summary) = &mut targets.summary {
                *summary = result.summary.clone();
            }
        }
    }
}
