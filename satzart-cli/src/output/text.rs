//! Human-readable report

use super::{OutputFormatter, OutputWriter};
use anyhow::Result;
use satzart_core::ClauseLabel;
use satzart_engine::DocumentAnalysis;
use std::io::Write;

const LABEL_WIDTH: usize = 16;

/// Text formatter writing one report per input
pub struct TextFormatter {
    writer: OutputWriter,
    reports: usize,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(writer: OutputWriter) -> Self {
        Self { writer, reports: 0 }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_analysis(&mut self, source: &str, analysis: &DocumentAnalysis) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        let total = analysis.total();
        writeln!(self.writer, "Clause analysis: {source} ({total} sentences)")?;
        writeln!(self.writer)?;

        for entry in analysis.sentences() {
            let markers = if entry.intro.is_empty() {
                "-".to_string()
            } else {
                entry.intro.to_string()
            };
            writeln!(
                self.writer,
                "{:>3}) {} → {} | {}",
                entry.index, entry.text, entry.label, markers
            )?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "Distribution:")?;
        for label in ClauseLabel::ALL {
            writeln!(
                self.writer,
                "  {:<width$} {:>4}/{:<4} {:>5.1}%",
                label.as_str(),
                analysis.count(label),
                total,
                analysis.share(label),
                width = LABEL_WIDTH
            )?;
        }

        writeln!(self.writer)?;
        let frequencies = analysis.marker_frequencies();
        if frequencies.is_empty() {
            writeln!(self.writer, "Subordination markers: (none)")?;
        } else {
            writeln!(self.writer, "Subordination markers:")?;
            for (marker, count) in frequencies {
                writeln!(self.writer, "  {marker:<width$} {count:>4}", width = LABEL_WIDTH)?;
            }
            writeln!(
                self.writer,
                "Distinct markers: {}",
                analysis.distinct_markers()
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_analysis, SharedBuffer};

    fn render(analysis: &DocumentAnalysis) -> String {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(Box::new(buffer.clone()));
        formatter.format_analysis("roman.conllu", analysis).unwrap();
        formatter.finish().unwrap();
        buffer.contents()
    }

    #[test]
    fn test_report_lists_sentences_and_markers() {
        let report = render(&sample_analysis());

        assert!(report.starts_with("Clause analysis: roman.conllu (3 sentences)"));
        assert!(report.contains("  1) Weil es regnet, bleiben wir. → Hypotaxis | weil"));
        assert!(report.contains("  2) Ein schöner Tag. → Ellipsis | -"));
        assert!(report.contains("→ Hypotaxis | dass, weil"));
        assert!(report.contains("Distinct markers: 2"));

        let weil = report.find("  weil ").unwrap();
        let dass = report.find("  dass ").unwrap();
        assert!(weil < dass, "markers sorted by descending count");
    }

    #[test]
    fn test_distribution_covers_every_label() {
        let report = render(&sample_analysis());
        for label in ClauseLabel::ALL {
            assert!(report.contains(label.as_str()), "missing {label}");
        }
        assert!(report.contains("   2/3     66.7%"));
        assert!(report.contains("   0/3      0.0%"));
    }

    #[test]
    fn test_no_markers() {
        let report = render(&DocumentAnalysis::new());
        assert!(report.contains("(0 sentences)"));
        assert!(report.contains("Subordination markers: (none)"));
    }
}
