//! Command-line parsing for the unit-conversion widget.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the conversion/formatting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "uc", version, about = "Fixed-ratio unit conversion widget (length, volume, mass)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a value once, print the three unit pairs, and optionally export JSON.
    Convert(ConvertArgs),
    /// Launch the interactive TUI widget.
    ///
    /// This uses the same underlying conversion pipeline as `uc convert`, but
    /// renders results live in a terminal UI using Ratatui.
    Tui(TuiArgs),
}

/// Options for one-shot conversion.
#[derive(Debug, Parser, Clone)]
pub struct ConvertArgs {
    /// Value to convert. Prompts on stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Export the conversion result to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Suppress the trailing summary line.
    #[arg(long)]
    pub no_summary: bool,
}

/// Options for the TUI widget.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Value to pre-fill the input with (converted immediately on startup).
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}
