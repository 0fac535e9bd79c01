//! Sentence-by-sentence aggregation into a [`DocumentAnalysis`]

use crate::analysis::DocumentAnalysis;
use satzart_core::{Classifier, Sentence};

/// Classifies sentences in order and accumulates the document statistics
#[derive(Debug, Clone)]
pub struct Aggregator {
    classifier: Classifier,
}

impl Aggregator {
    /// Create an aggregator around a classifier
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// The classifier in use
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify sentences in order, skipping blank ones.
    ///
    /// Indices run from 1 over the non-blank sentences.
    pub fn aggregate<'a, I>(&self, sentences: I) -> DocumentAnalysis
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        let mut analysis = DocumentAnalysis::new();
        for sentence in sentences {
            if sentence.is_blank() {
                log::trace!("skipping blank sentence at {}", sentence.start());
                continue;
            }
            let classification = self.classifier.classify(sentence);
            analysis.record(sentence, classification);
        }
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satzart_core::{Category, ClauseLabel, Token};

    #[test]
    fn test_blank_sentences_skipped() {
        let aggregator = Aggregator::new(Classifier::german().unwrap());
        let sentences = vec![
            Sentence::new(vec![Token::new("Hallo", Category::Other)]),
            Sentence::new(vec![Token::new(" ", Category::Other)]).with_text("  "),
            Sentence::new(vec![
                Token::new("Er", Category::Pronoun),
                Token::new("kam", Category::Verb).with_feats("VerbForm=Fin"),
            ]),
        ];

        let analysis = aggregator.aggregate(&sentences);
        assert_eq!(analysis.total(), 2);
        assert_eq!(analysis.sentences()[1].index, 2);
        assert_eq!(analysis.sentences()[1].text, "Er kam");
        assert_eq!(analysis.count(ClauseLabel::Ellipsis), 1);
        assert_eq!(analysis.count(ClauseLabel::MainClause), 1);
    }
}
