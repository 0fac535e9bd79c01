//! Markdown output formatter

use super::{OutputFormatter, OutputWriter};
use anyhow::Result;
use satzart_core::ClauseLabel;
use satzart_engine::DocumentAnalysis;
use std::io::Write;

/// Markdown formatter - a sentence table followed by summary tables
pub struct MarkdownFormatter {
    writer: OutputWriter,
    sentence_count: usize,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new(writer: OutputWriter) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl OutputFormatter for MarkdownFormatter {
    fn format_analysis(&mut self, source: &str, analysis: &DocumentAnalysis) -> Result<()> {
        self.sentence_count += analysis.total();

        writeln!(self.writer, "## {}", escape_cell(source))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Sentence | Label | Markers |")?;
        writeln!(self.writer, "|---:|---|---|---|")?;
        for entry in analysis.sentences() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                entry.index,
                escape_cell(&entry.text),
                entry.label,
                entry.intro
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "| Label | Count | Share |")?;
        writeln!(self.writer, "|---|---:|---:|")?;
        for label in ClauseLabel::ALL {
            writeln!(
                self.writer,
                "| {} | {}/{} | {:.1}% |",
                label,
                analysis.count(label),
                analysis.total(),
                analysis.share(label)
            )?;
        }
        writeln!(self.writer)?;

        let frequencies = analysis.marker_frequencies();
        if frequencies.is_empty() {
            writeln!(self.writer, "*Subordination markers: (none)*")?;
        } else {
            writeln!(self.writer, "| Marker | Count |")?;
            writeln!(self.writer, "|---|---:|")?;
            for (marker, count) in frequencies {
                writeln!(self.writer, "| {marker} | {count} |")?;
            }
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "*Distinct markers: {}*",
                analysis.distinct_markers()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_analysis, SharedBuffer};

    #[test]
    fn test_tables() {
        let buffer = SharedBuffer::default();
        let mut formatter = MarkdownFormatter::new(Box::new(buffer.clone()));
        formatter
            .format_analysis("a.conllu", &sample_analysis())
            .unwrap();
        formatter.finish().unwrap();
        let output = buffer.contents();

        assert!(output.starts_with("## a.conllu\n"));
        assert!(output.contains("| 1 | Weil es regnet, bleiben wir. | Hypotaxis | weil |"));
        assert!(output.contains("| 2 | Ein schöner Tag. | Ellipsis |  |"));
        assert!(output.contains("| Hypotaxis | 2/3 | 66.7% |"));
        assert!(output.contains("| weil | 2 |"));
        assert!(output.contains("*Distinct markers: 2*"));
        assert!(output.ends_with("*Total sentences: 3*\n"));
    }

    #[test]
    fn test_pipe_escaped() {
        assert_eq!(escape_cell("a | b"), "a \\| b");
    }
}
