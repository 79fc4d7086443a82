//! Interactive value prompt.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompt provides the "run `uc convert` and type a number" UX

use std::io::{self, Write};

use crate::app::pipeline::INVALID_INPUT_MESSAGE;
use crate::domain::ParsedInput;
use crate::error::AppError;
use crate::parse::parse_value;

/// Prompt the user for a value to convert.
///
/// Behavior:
/// - re-prompts until the text validates as a finite number
/// - `q` cancels
pub fn prompt_for_value() -> Result<String, AppError> {
    loop {
        print!("Enter a value to convert (q to quit): ");
        io::stdout()
            .flush()
            .map_err(|e| AppError::input(format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::input(
                "No input received. Pass a value with `uc convert <value>`.",
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::input("Canceled."));
        }

        match parse_value(input) {
            ParsedInput::Valid(_) => return Ok(input.to_string()),
            ParsedInput::Invalid(_) => {
                println!("{INVALID_INPUT_MESSAGE}");
                continue;
            }
        }
    }
}
