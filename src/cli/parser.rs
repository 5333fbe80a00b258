//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::collector::DEFAULT_OUTPUT_PATH;
use crate::source::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// anekdots: collect and clean a corpus of short jokes.
///
/// Scrapes anekdoty.ru, strips markup and normalizes punctuation, writing
/// one cleaned item per line.
#[derive(Parser, Debug)]
#[command(name = "anekdots")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrape the site and write the cleaned corpus.
    Collect {
        /// Corpus file to create (truncated if it exists).
        #[arg(short, long, env = "ANEKDOTS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Front page listing the subtopics.
        #[arg(long, env = "ANEKDOTS_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Highest page number fetched per subtopic.
        #[arg(long)]
        max_pages: Option<usize>,

        /// Request timeout in seconds.
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// Preprocess every line of an existing corpus.
    Clean {
        /// Input file (reads stdin if not provided).
        input: Option<PathBuf>,

        /// Output file (stdout if not specified).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Preprocess a single text item.
    Preprocess {
        /// Raw text to clean.
        text: String,
    },
}
