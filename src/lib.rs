//! # anekdots
//!
//! Collects short jokes ("anekdots") from anekdoty.ru into a line-oriented
//! corpus for NLP work.
//!
//! Scraped paragraphs are noisy: stray symbols, doubled punctuation and
//! random spacing. The [`text`] pipeline drops everything outside a Latin and
//! Cyrillic alphabet and rewrites punctuation runs into one canonical spacing.
//!
//! ## Features
//!
//! - **Text pipeline**: [`preprocess`] = symbol filter, punctuation normalizer, trim
//! - **Collector**: subtopic discovery and page walking over any [`PageSource`]
//! - **Corpus I/O**: one cleaned item per line, UTF-8
//! - **CLI**: `collect`, `clean` and `preprocess` commands

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod collector;
pub mod error;
pub mod io;
pub mod source;
pub mod text;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export the text pipeline
pub use text::{correct_punctuation, filter_symbols, preprocess};

// Re-export collection types
pub use collector::{CollectStats, Collector, CollectorConfig, DEFAULT_OUTPUT_PATH};
pub use io::CorpusWriter;
pub use source::{DEFAULT_BASE_URL, HttpSource, PageSource, StaticSource};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
