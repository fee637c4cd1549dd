//! Line supply for the log pipeline
//!
//! Validates the input path and reads the file into lines. Invalid UTF-8 is
//! decoded lossily so a single bad byte does not hide the rest of the file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::InputError;

/// Required suffix for input files
const LOG_SUFFIX: &str = ".log";

/// Check that `path` names an existing `.log` file
pub fn validate(path: &Path) -> Result<(), InputError> {
    if !path.to_string_lossy().ends_with(LOG_SUFFIX) {
        return Err(InputError::NotLogFile(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    Ok(())
}

/// Read the whole file as lines, terminators removed
pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    debug!(path = %path.display(), lines = lines.len(), "read log file");
    Ok(lines)
}
