//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs one-shot conversions for `uc convert`
//! - hands off to the TUI for `uc tui`
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ConvertArgs};
use crate::domain::{ConversionTable, ConvertOutcome};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `uc` binary.
pub fn run() -> Result<(), AppError> {
    // We want `uc` to behave like `uc tui`, and `uc 12.5` like `uc convert 12.5`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the quick-conversion UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Convert(args) => handle_convert(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_convert(args: ConvertArgs) -> Result<(), AppError> {
    let table = ConversionTable::standard();
    let raw = match args.value {
        Some(value) => value,
        None => crate::cli::prompt::prompt_for_value()?,
    };

    match pipeline::run_convert(&raw, table) {
        ConvertOutcome::Converted(result) => {
            print!("{}", crate::report::format_result(&result, !args.no_summary));

            if let Some(path) = &args.export {
                crate::io::export::write_result_json(path, &result)?;
            }
            Ok(())
        }
        ConvertOutcome::Rejected { message, .. } => Err(AppError::input(message)),
    }
}

/// Rewrite argv so `uc` defaults to `uc tui` and a bare value to `uc convert`.
///
/// Rules:
/// - `uc`                      -> `uc tui`
/// - `uc 12.5` / `uc -3`       -> `uc convert 12.5` / `uc convert -3`
/// - `uc --export out.json 5`  -> `uc convert --export out.json 5`
/// - `uc --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "convert" | "tui");
    if is_subcommand {
        return argv;
    }

    // A bare numeric first token is a quick one-shot conversion.
    if arg1.parse::<f64>().is_ok() {
        argv.insert(1, "convert".to_string());
        return argv;
    }

    // If the first token is a flag, treat it as "convert flags".
    if arg1.starts_with('-') {
        argv.insert(1, "convert".to_string());
        return argv;
    }

    // Otherwise, leave as-is and let clap report the problem.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["uc"])), argv(&["uc", "tui"]));
    }

    #[test]
    fn bare_value_defaults_to_convert() {
        assert_eq!(
            rewrite_args(argv(&["uc", "12.5"])),
            argv(&["uc", "convert", "12.5"])
        );
        assert_eq!(
            rewrite_args(argv(&["uc", "-3"])),
            argv(&["uc", "convert", "-3"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["uc", "convert", "5"])),
            argv(&["uc", "convert", "5"])
        );
        assert_eq!(rewrite_args(argv(&["uc", "tui"])), argv(&["uc", "tui"]));
        assert_eq!(rewrite_args(argv(&["uc", "--help"])), argv(&["uc", "--help"]));
        assert_eq!(rewrite_args(argv(&["uc", "-V"])), argv(&["uc", "-V"]));
    }

    #[test]
    fn leading_flag_belongs_to_convert() {
        assert_eq!(
            rewrite_args(argv(&["uc", "--no-summary", "5"])),
            argv(&["uc", "convert", "--no-summary", "5"])
        );
    }

    #[test]
    fn non_numeric_tokens_are_left_for_clap() {
        assert_eq!(rewrite_args(argv(&["uc", "bogus"])), argv(&["uc", "bogus"]));
    }
}
