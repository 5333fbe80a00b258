//! Corpus file reading.

use crate::error::{IoError, Result};
use std::io::Read;
use std::path::Path;

/// Reads a UTF-8 file to a string.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing file and
/// [`IoError::ReadFailed`] if reading fails or the content is not UTF-8.
///
/// # Examples
///
/// ```no_run
/// use anekdots::io::read_file;
///
/// let corpus = read_file("data/raw_data/anekdoty_ru.txt").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let bytes = std::fs::read(path_ref).map_err(|e| IoError::ReadFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| {
        IoError::ReadFailed {
            path: path_str,
            reason: format!("invalid UTF-8: {e}"),
        }
        .into()
    })
}

/// Reads a corpus file as one item per line.
///
/// Both `\n` and `\r\n` endings are accepted; the terminator is not part of
/// the item.
///
/// # Errors
///
/// Same as [`read_file`].
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Ok(split_lines(&read_file(path)?))
}

/// Reads all of standard input as one item per line.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] if stdin is not readable UTF-8.
pub fn read_stdin_lines() -> Result<Vec<String>> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| IoError::ReadFailed {
            path: "<stdin>".to_string(),
            reason: e.to_string(),
        })?;
    Ok(split_lines(&input))
}

fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
