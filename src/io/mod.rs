//! I/O utilities for anekdots.
//!
//! Provides the line-oriented corpus sink and readers for existing
//! corpus files.

pub mod reader;
pub mod writer;

pub use reader::{read_file, read_lines, read_stdin_lines};
pub use writer::{CorpusWriter, write_file};
