//! JSON output formatter

use super::{OutputFormatter, OutputWriter};
use anyhow::Result;
use satzart_engine::DocumentAnalysis;
use serde::Serialize;
use std::io::Write;

/// JSON formatter
///
/// A single input is written as its analysis object; several inputs as an
/// array of `{source, analysis}` entries.
pub struct JsonFormatter {
    writer: OutputWriter,
    pretty: bool,
    multiple: bool,
    entries: Vec<SourceAnalysis>,
}

/// Analysis of one named input
#[derive(Debug, Serialize)]
pub struct SourceAnalysis {
    /// File path or `<stdin>`
    pub source: String,
    /// Analysis result
    pub analysis: DocumentAnalysis,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(writer: OutputWriter, pretty: bool, multiple: bool) -> Self {
        Self {
            writer,
            pretty,
            multiple,
            entries: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&mut self, source: &str, analysis: &DocumentAnalysis) -> Result<()> {
        self.entries.push(SourceAnalysis {
            source: source.to_string(),
            analysis: analysis.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let entries = std::mem::take(&mut self.entries);
        if self.multiple {
            self.write_value(&entries)?;
        } else if let Some(entry) = entries.first() {
            self.write_value(&entry.analysis)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_analysis, SharedBuffer};

    fn render(multiple: bool, sources: &[&str]) -> serde_json::Value {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(Box::new(buffer.clone()), false, multiple);
        for source in sources {
            formatter
                .format_analysis(source, &sample_analysis())
                .unwrap();
        }
        formatter.finish().unwrap();
        serde_json::from_str(&buffer.contents()).unwrap()
    }

    #[test]
    fn test_single_input_object() {
        let value = render(false, &["a.conllu"]);
        assert_eq!(value["distribution"]["Hypotaxis"], 2);
        assert_eq!(value["intro_counts"]["weil"], 2);
        assert_eq!(value["sentences"][2]["intro"][0], "dass");
        assert_eq!(value["sentences"][1]["index"], 2);
    }

    #[test]
    fn test_multiple_inputs_array() {
        let value = render(true, &["a.conllu", "b.conllu"]);
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["source"], "b.conllu");
        assert_eq!(entries[1]["analysis"]["distribution"]["Ellipsis"], 1);
    }

    #[test]
    fn test_nothing_written_without_results() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(Box::new(buffer.clone()), true, false);
        formatter.finish().unwrap();
        assert!(buffer.contents().is_empty());
    }
}
