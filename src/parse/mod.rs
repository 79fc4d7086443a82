//! Raw input validation.
//!
//! Turns whatever text is currently in the input field into either a finite
//! number or a rejection reason. The whole trimmed text must parse; partial
//! prefixes like `5abc` are rejections, not prefix successes.

use crate::domain::{InvalidReason, ParsedInput};

/// Parse and validate raw input text.
///
/// Returns exactly one of the two `ParsedInput` variants; never panics and
/// never returns an error across this boundary.
pub fn parse_value(raw: &str) -> ParsedInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedInput::Invalid(InvalidReason::EmptyInput);
    }

    // `f64::from_str` accepts `inf`/`nan` spellings; those are not convertible
    // values, so the finiteness check folds them into `NotANumber`.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedInput::Valid(value),
        _ => ParsedInput::Invalid(InvalidReason::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_empty_input() {
        assert_eq!(parse_value(""), ParsedInput::Invalid(InvalidReason::EmptyInput));
        assert_eq!(parse_value("   "), ParsedInput::Invalid(InvalidReason::EmptyInput));
        assert_eq!(parse_value("\t\n"), ParsedInput::Invalid(InvalidReason::EmptyInput));
    }

    #[test]
    fn garbage_is_not_a_number() {
        assert_eq!(parse_value("abc"), ParsedInput::Invalid(InvalidReason::NotANumber));
        assert_eq!(parse_value("5abc"), ParsedInput::Invalid(InvalidReason::NotANumber));
        assert_eq!(parse_value("1,5"), ParsedInput::Invalid(InvalidReason::NotANumber));
    }

    #[test]
    fn non_finite_spellings_are_not_a_number() {
        assert_eq!(parse_value("inf"), ParsedInput::Invalid(InvalidReason::NotANumber));
        assert_eq!(parse_value("-infinity"), ParsedInput::Invalid(InvalidReason::NotANumber));
        assert_eq!(parse_value("NaN"), ParsedInput::Invalid(InvalidReason::NotANumber));
    }

    #[test]
    fn finite_values_parse() {
        assert_eq!(parse_value("5"), ParsedInput::Valid(5.0));
        assert_eq!(parse_value("  5  "), ParsedInput::Valid(5.0));
        assert_eq!(parse_value("-2.75"), ParsedInput::Valid(-2.75));
        assert_eq!(parse_value("+0.5"), ParsedInput::Valid(0.5));
        assert_eq!(parse_value("1e3"), ParsedInput::Valid(1000.0));
        assert_eq!(parse_value("0"), ParsedInput::Valid(0.0));
    }
}
