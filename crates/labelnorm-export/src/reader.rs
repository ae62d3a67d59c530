use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ExportError;

/// Reads one label per line from a UTF-8 text file.
///
/// Lines are trimmed and blank lines skipped.
///
/// # Errors
///
/// Returns [`ExportError::Read`] if the file cannot be opened or a line is
/// not valid UTF-8.
pub fn read_labels(path: &Path) -> Result<Vec<String>, ExportError> {
    let to_error = |source| ExportError::Read {
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    let labels = read_labels_from(BufReader::new(file)).map_err(to_error)?;
    tracing::debug!(path = %path.display(), count = labels.len(), "read labels");
    Ok(labels)
}

/// Same as [`read_labels`] for any buffered reader.
///
/// # Errors
///
/// Propagates I/O and UTF-8 decoding errors from the reader.
pub fn read_labels_from<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            labels.push(trimmed.to_owned());
        }
    }
    Ok(labels)
}
