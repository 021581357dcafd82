//! Sequential batch driver.
//!
//! Walks a single input directory, resizes every supported image through an
//! [`ImageBackend`], and tallies successes and failures. One file is fully
//! decoded, resized, encoded, and written before the next one starts.
//!
//! ## Error model
//!
//! The only fatal condition is a missing input directory, checked before
//! anything is written — a typo'd path never creates an empty output
//! folder. Everything that goes wrong with an individual file (unreadable,
//! undecodable, unencodable) is counted as failed, reported through the
//! observer, and the batch moves on. No retries, no cleanup of partial
//! writes beyond what the filesystem does on its own.

use crate::imaging::{
    BackendError, FileOutcome, ImageBackend, ResizeOptions, resize_file,
    supported_input_extensions,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("input folder '{0}' does not exist")]
    InputDirMissing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-file progress event, handed to the observer as processing goes.
#[derive(Debug)]
pub struct FileEvent {
    pub file_name: String,
    pub result: Result<FileOutcome, BackendError>,
}

/// Tally of one completed batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: u32,
    pub failed: u32,
}

/// True when the path's extension (lowercased) names a decodable format.
fn is_supported(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| {
        let lower = e.to_ascii_lowercase();
        supported_input_extensions().contains(&lower.as_str())
    })
}

/// Resize every supported image in `input_dir` into `output_dir`.
///
/// The observer is invoked once per file, success or failure, in filename
/// order (raw directory listing order is platform-dependent; sorting makes
/// progress output reproducible). Subdirectories and files with other
/// extensions are skipped silently.
pub fn run(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
    options: &ResizeOptions,
    mut observer: impl FnMut(&FileEvent),
) -> Result<BatchReport, BatchError> {
    if !input_dir.is_dir() {
        return Err(BatchError::InputDirMissing(input_dir.to_path_buf()));
    }

    std::fs::create_dir_all(output_dir)?;

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported(&path) {
            entries.push(path);
        }
    }
    entries.sort();

    let mut report = BatchReport::default();

    for path in entries {
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            // Non-UTF8 name: no way to derive an output filename
            None => continue,
        };

        let result = resize_file(backend, &path, &file_name, output_dir, options);
        match &result {
            Ok(_) => report.processed += 1,
            Err(_) => report.failed += 1,
        }
        observer(&FileEvent { file_name, result });
    }

    Ok(report)
}
