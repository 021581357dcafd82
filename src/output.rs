//! CLI output formatting.
//!
//! Each display has a `format_*` function (pure, returns strings) and a
//! `print_*` wrapper that writes to stdout. Format functions carry no I/O
//! so tests can assert on exact output without capturing stdout.
//!
//! # Output Format
//!
//! Per file:
//!
//! ```text
//! Processed: dawn.jpg (1000x500 -> 500x250)
//! Failed to process broken.png: Decode failed: ...
//! ```
//!
//! Final summary:
//!
//! ```text
//! ==================================================
//! Processing complete!
//! Successfully processed: 14 images
//! Failed: 1 images
//! Output saved to: ./resized
//! ==================================================
//! ```

use crate::batch::{BatchReport, FileEvent};
use std::path::Path;

/// Width of the summary rule.
const RULE_WIDTH: usize = 50;

/// One progress line per file: dimensions on success, error on failure.
pub fn format_file_event(event: &FileEvent) -> String {
    match &event.result {
        Ok(outcome) => format!(
            "Processed: {} ({}x{} -> {}x{})",
            event.file_name,
            outcome.original.width,
            outcome.original.height,
            outcome.plan.width,
            outcome.plan.height,
        ),
        Err(err) => format!("Failed to process {}: {}", event.file_name, err),
    }
}

/// The end-of-run summary block, one line per entry.
pub fn format_summary(report: &BatchReport, output_dir: &Path) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    vec![
        String::new(),
        rule.clone(),
        "Processing complete!".to_string(),
        format!("Successfully processed: {} images", report.processed),
        format!("Failed: {} images", report.failed),
        format!("Output saved to: {}", output_dir.display()),
        rule,
    ]
}

pub fn print_file_event(event: &FileEvent) {
    println!("{}", format_file_event(event));
}

pub fn print_summary(report: &BatchReport, output_dir: &Path) {
    for line in format_summary(report, output_dir) {
        println!("{}", line);
    }
}
