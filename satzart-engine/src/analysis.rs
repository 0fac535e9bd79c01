//! Per-sentence and per-document analysis results

use satzart_core::{Classification, ClauseLabel, MarkerSet, Sentence};
use serde::Serialize;
use std::collections::BTreeMap;

/// Classification of one sentence with its position in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceAnalysis {
    /// 1-based running index among non-blank sentences
    pub index: usize,
    /// Trimmed sentence text
    pub text: String,
    /// Clause label
    pub label: ClauseLabel,
    /// Subordination markers, or the infinitive label
    pub intro: MarkerSet,
    /// Start character offset in the document
    pub start: usize,
    /// End character offset in the document (exclusive)
    pub end: usize,
    /// Cascade rule that produced the label
    #[serde(skip)]
    pub rule: &'static str,
}

/// Analysis of a whole document
///
/// Also used for the partial results of parallel workers, which are combined
/// with [`DocumentAnalysis::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentAnalysis {
    sentences: Vec<SentenceAnalysis>,
    distribution: BTreeMap<ClauseLabel, usize>,
    intro_counts: BTreeMap<String, usize>,
}

impl DocumentAnalysis {
    /// Create an empty analysis
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a classified sentence and update the counts
    pub fn record(&mut self, sentence: &Sentence, classification: Classification) {
        *self.distribution.entry(classification.label).or_insert(0) += 1;
        for marker in classification.markers.iter() {
            *self.intro_counts.entry(marker.to_string()).or_insert(0) += 1;
        }

        self.sentences.push(SentenceAnalysis {
            index: self.sentences.len() + 1,
            text: sentence.text().trim().to_string(),
            label: classification.label,
            intro: classification.markers,
            start: sentence.start(),
            end: sentence.end(),
            rule: classification.rule,
        });
    }

    /// Append another analysis, renumbering its sentences to follow this one
    pub fn merge(&mut self, other: DocumentAnalysis) {
        let offset = self.sentences.len();
        self.sentences
            .extend(other.sentences.into_iter().enumerate().map(|(i, mut entry)| {
                entry.index = offset + i + 1;
                entry
            }));
        for (label, count) in other.distribution {
            *self.distribution.entry(label).or_insert(0) += count;
        }
        for (marker, count) in other.intro_counts {
            *self.intro_counts.entry(marker).or_insert(0) += count;
        }
    }

    /// Sentence analyses in document order
    pub fn sentences(&self) -> &[SentenceAnalysis] {
        &self.sentences
    }

    /// Label counts, only labels that occurred
    pub fn distribution(&self) -> &BTreeMap<ClauseLabel, usize> {
        &self.distribution
    }

    /// Marker counts
    pub fn intro_counts(&self) -> &BTreeMap<String, usize> {
        &self.intro_counts
    }

    /// Number of analysed sentences
    pub fn total(&self) -> usize {
        self.sentences.len()
    }

    /// True if no sentence was analysed
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of sentences with a label
    pub fn count(&self, label: ClauseLabel) -> usize {
        self.distribution.get(&label).copied().unwrap_or(0)
    }

    /// Percentage of sentences with a label; 0 for an empty document
    pub fn share(&self, label: ClauseLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            100.0 * self.count(label) as f64 / total as f64
        }
    }

    /// Marker counts sorted by descending count, ties alphabetically
    pub fn marker_frequencies(&self) -> Vec<(&str, usize)> {
        let mut frequencies: Vec<(&str, usize)> = self
            .intro_counts
            .iter()
            .map(|(marker, count)| (marker.as_str(), *count))
            .collect();
        frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        frequencies
    }

    /// Number of distinct markers
    pub fn distinct_markers(&self) -> usize {
        self.intro_counts.len()
    }
}
