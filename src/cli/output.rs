//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::collector::CollectStats;
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the summary of a `collect` run.
#[must_use]
pub fn format_collect(stats: &CollectStats, output: &Path, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str("Collection finished\n");
            out.push_str("===================\n\n");
            let _ = writeln!(out, "  Topics:  {}", stats.topics);
            let _ = writeln!(out, "  Pages:   {}", stats.pages);
            let _ = writeln!(out, "  Items:   {}", stats.items);
            let _ = writeln!(out, "  Output:  {}", output.display());
            out
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CollectOutput<'a> {
                #[serde(flatten)]
                stats: &'a CollectStats,
                output: String,
            }
            format_json(&CollectOutput {
                stats,
                output: output.to_string_lossy().to_string(),
            })
        }
    }
}

/// Formats the summary of a `clean` run that wrote to a file.
#[must_use]
pub fn format_clean(lines: usize, output: &Path, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Cleaned {lines} lines into {}\n", output.display()),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CleanOutput {
                lines: usize,
                output: String,
            }
            format_json(&CleanOutput {
                lines,
                output: output.to_string_lossy().to_string(),
            })
        }
    }
}

/// Formats a single preprocessed item.
#[must_use]
pub fn format_preprocessed(input: &str, cleaned: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{cleaned}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PreprocessOutput<'a> {
                input: &'a str,
                output: &'a str,
            }
            format_json(&PreprocessOutput {
                input,
                output: cleaned,
            })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
