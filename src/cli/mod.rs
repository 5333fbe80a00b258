//! CLI layer for anekdots.
//!
//! Provides the command-line interface using clap, with commands for
//! collecting the corpus and cleaning existing text.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
