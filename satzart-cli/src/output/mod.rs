//! Output formatting module

use anyhow::Result;
use satzart_engine::DocumentAnalysis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the analysis of one input
    fn format_analysis(&mut self, source: &str, analysis: &DocumentAnalysis) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Writer shared by all formatters
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON object per input
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    /// All formats, for listing
    pub const ALL: [OutputFormat; 3] = [Self::Text, Self::Json, Self::Markdown];

    /// Format name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "report with sentences, label distribution and marker frequencies",
            Self::Json => "{sentences, distribution, intro_counts}; an array of {source, analysis} for several inputs",
            Self::Markdown => "sentence table followed by summary tables",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create the formatter for a format.
///
/// `multiple` tells the JSON formatter to emit an array of
/// `{source, analysis}` entries instead of a single object.
pub fn create_formatter(
    format: OutputFormat,
    writer: OutputWriter,
    pretty_json: bool,
    multiple: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json, multiple)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
