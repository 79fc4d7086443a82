//! Conversion output formatting.
//!
//! We keep formatting code in one place so:
//! - the pipeline stays clean and testable
//! - output changes are localized (the pair line layout is a compatibility contract)
//!
//! Rendering rules:
//! - the entered value uses default float-to-text rendering (`5`, not `5.000`)
//! - derived figures are padded to exactly 3 decimals (`16.404`, `0.000`)
//!
//! The asymmetry is deliberate and must be preserved.

use crate::domain::{ConversionPair, ConversionResult, ConversionTable, Ratio};

/// Build the bidirectional pair for one ratio.
pub fn pair_for(value: f64, ratio: &Ratio) -> ConversionPair {
    ConversionPair {
        ratio: ratio.kind,
        forward: format!(
            "{} {} = {} {}",
            fmt_value(value),
            ratio.forward_unit,
            fmt_fixed3(value * ratio.factor),
            ratio.backward_unit,
        ),
        backward: format!(
            "{} {} = {} {}",
            fmt_value(value),
            ratio.backward_unit,
            fmt_fixed3(value / ratio.factor),
            ratio.forward_unit,
        ),
    }
}

/// Format the full pair line for one ratio.
pub fn format_pair(value: f64, ratio: &Ratio) -> String {
    pair_for(value, ratio).display_line()
}

/// Build the accessible summary announced after a successful conversion.
///
/// Forward direction only, unlike the pair lines which show both directions.
pub fn format_summary(value: f64, table: &ConversionTable) -> String {
    let figures: Vec<String> = table
        .ratios()
        .iter()
        .map(|r| format!("{} {}", fmt_fixed3(value * r.factor), r.backward_unit))
        .collect();
    format!("{} entered. {}.", fmt_value(value), figures.join("; "))
}

/// Format the one-shot terminal report for the CLI front-end.
pub fn format_result(result: &ConversionResult, with_summary: bool) -> String {
    let mut out = String::new();

    out.push_str("=== uc — fixed-ratio unit conversions ===\n");
    out.push_str(&format!("Value: {}\n\n", fmt_value(result.value)));

    for pair in &result.pairs {
        out.push_str(&format!(
            "{:<8} {}\n",
            format!("{}:", pair.ratio.display_name()),
            pair.display_line()
        ));
    }

    if with_summary {
        out.push('\n');
        out.push_str(&result.summary);
        out.push('\n');
    }

    out
}

fn fmt_value(v: f64) -> String {
    format!("{v}")
}

fn fmt_fixed3(v: f64) -> String {
    format!("{v:.3}")
}
