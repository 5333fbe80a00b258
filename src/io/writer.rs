//! Line-oriented corpus sink.
//!
//! Every item becomes exactly one `\n`-terminated UTF-8 line. Items are not
//! escaped; cleaned items never contain newlines because the symbol filter
//! drops them.

use crate::error::{IoError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered writer that appends text items as lines.
///
/// # Examples
///
/// ```
/// use anekdots::io::CorpusWriter;
///
/// let mut sink = CorpusWriter::new(Vec::new());
/// sink.write_items(&["Раз".to_string(), "Два".to_string()]).unwrap();
/// let bytes = sink.finish().unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "Раз\nДва\n");
/// ```
pub struct CorpusWriter<W: Write> {
    out: BufWriter<W>,
    /// Destination name for error messages.
    target: String,
}

impl CorpusWriter<File> {
    /// Creates (or truncates) a corpus file, creating parent directories
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        ensure_parent(path_ref)?;

        let file = File::create(path_ref).map_err(|e| IoError::WriteFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            out: BufWriter::new(file),
            target: path_str,
        })
    }
}

impl<W: Write> CorpusWriter<W> {
    /// Wraps an arbitrary writer (stdout, an in-memory buffer).
    pub fn new(inner: W) -> Self {
        Self {
            out: BufWriter::new(inner),
            target: "<stream>".to_string(),
        }
    }

    /// Appends one item as a line.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if the underlying writer fails.
    pub fn write_item(&mut self, item: &str) -> Result<()> {
        writeln!(self.out, "{item}").map_err(|e| IoError::WriteFailed {
            path: self.target.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Appends every item, in order.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] on the first failed write.
    pub fn write_items<S: AsRef<str>>(&mut self, items: &[S]) -> Result<()> {
        for item in items {
            self.write_item(item.as_ref())?;
        }
        Ok(())
    }

    /// Flushes buffered lines and returns the inner writer.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if the flush fails.
    pub fn finish(self) -> Result<W> {
        let target = self.target;
        self.out.into_inner().map_err(|e| {
            IoError::WriteFailed {
                path: target,
                reason: e.error().to_string(),
            }
            .into()
        })
    }
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();

    ensure_parent(path_ref)?;

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data/raw_data/anekdoty_ru.txt");

        let mut sink = CorpusWriter::create(&path).unwrap();
        sink.write_item("Штирлиц шёл по лесу.").unwrap();
        sink.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Штирлиц шёл по лесу.\n");
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corpus.txt");
        std::fs::write(&path, "old line\n").unwrap();

        let sink = CorpusWriter::create(&path).unwrap();
        sink.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_empty_items_become_empty_lines() {
        let mut sink = CorpusWriter::new(Vec::new());
        sink.write_items(&["а", "", "б"]).unwrap();

        let bytes = sink.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "а\n\nб\n");
    }

    #[test]
    fn test_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("subdir/output.txt");

        write_file(&file_path, "Test content").unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Test content");
    }
}
