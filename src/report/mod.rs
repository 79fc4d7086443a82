//! Formatting utilities: bidirectional pair lines, the accessible summary,
//! and the one-shot terminal report.

pub mod format;

pub use format::*;
