//! Write conversion results to JSON.
//!
//! The export is the "portable" representation of one conversion:
//! - the entered value
//! - the three bidirectional pair lines
//! - the accessible summary
//! - an export timestamp
//!
//! The schema is defined by `domain::ResultFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{ConversionResult, ResultFile};
use crate::error::AppError;

/// Write a conversion result JSON file.
pub fn write_result_json(path: &Path, result: &ConversionResult) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create export JSON '{}': {e}",
            path.display()
        ))
    })?;

    let export = ResultFile {
        tool: "uc".to_string(),
        exported_at: Local::now(),
        result: result.clone(),
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::input(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_convert;
    use crate::domain::{ConversionTable, ConvertOutcome};

    #[test]
    fn export_is_valid_json_with_the_pair_lines() {
        let ConvertOutcome::Converted(result) =
            run_convert("5", ConversionTable::standard())
        else {
            panic!("expected conversion");
        };

        let dir = std::env::temp_dir();
        let path = dir.join("uc-export-test.json");
        write_result_json(&path, &result).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["tool"], "uc");
        assert_eq!(parsed["result"]["value"], 5.0);
        assert_eq!(parsed["result"]["pairs"][0]["ratio"], "length");
        assert_eq!(
            parsed["result"]["pairs"][0]["forward"],
            "5 metres = 16.404 feet"
        );

        let _ = std::fs::remove_file(&path);
    }
}
