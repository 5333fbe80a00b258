//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{OutputFormat, format_clean, format_collect, format_preprocessed};
use crate::cli::parser::{Cli, Commands};
use crate::collector::{Collector, CollectorConfig};
use crate::error::{CommandError, Error, Result};
use crate::io::{CorpusWriter, read_lines, read_stdin_lines, write_file};
use crate::source::HttpSource;
use crate::text::preprocess;
use rayon::prelude::*;
use reqwest::Url;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Collect {
            output,
            base_url,
            max_pages,
            timeout,
        } => cmd_collect(output, base_url, *max_pages, *timeout, format),
        Commands::Clean { input, output } => {
            cmd_clean(input.as_deref(), output.as_deref(), format)
        }
        Commands::Preprocess { text } => Ok(format_preprocessed(text, &preprocess(text), format)),
    }
}

// ==================== Command Implementations ====================

fn cmd_collect(
    output: &Path,
    base_url: &str,
    max_pages: Option<usize>,
    timeout: u64,
    format: OutputFormat,
) -> Result<String> {
    let config = build_config(base_url, max_pages)?;
    let source = HttpSource::new(Duration::from_secs(timeout))?;

    info!(base_url = %config.base_url, output = %output.display(), "collecting corpus");

    let mut sink = CorpusWriter::create(output)?;
    let stats = Collector::new(source, config).collect(&mut sink)?;
    sink.finish()?;

    info!(items = stats.items, "corpus written");
    Ok(format_collect(&stats, output, format))
}

/// Validates the collector arguments.
fn build_config(base_url: &str, max_pages: Option<usize>) -> Result<CollectorConfig> {
    let url = Url::parse(base_url).map_err(|e| Error::Config {
        message: format!("invalid base URL {base_url}: {e}"),
    })?;

    let config = CollectorConfig::new(url);
    match max_pages {
        None => Ok(config),
        Some(0) => Err(CommandError::InvalidArgument(
            "--max-pages must be at least 1".to_string(),
        )
        .into()),
        Some(max) => Ok(config.with_max_pages(max)),
    }
}

fn cmd_clean(input: Option<&Path>, output: Option<&Path>, format: OutputFormat) -> Result<String> {
    let lines = match input {
        Some(path) => read_lines(path)?,
        None => read_stdin_lines()?,
    };

    let cleaned = clean_lines(&lines);
    let mut content = cleaned.join("\n");
    if !cleaned.is_empty() {
        content.push('\n');
    }

    match output {
        Some(path) => {
            write_file(path, &content)?;
            Ok(format_clean(cleaned.len(), path, format))
        }
        None => Ok(content),
    }
}

/// Preprocesses every line, in parallel, keeping the input order.
pub fn clean_lines(lines: &[String]) -> Vec<String> {
    lines.par_iter().map(|line| preprocess(line)).collect()
}
