//! True coordination of finite predicates (parataxis)
//!
//! A bare "und" between two noun phrases is not parataxis, so every rule
//! requires evidence of a second finite predicate.

use crate::features::{count_finite_verbs, is_conjunct, is_finite};
use crate::language::Lexicon;
use crate::markers::collect_markers;
use crate::types::{Category, Sentence};

/// Which coordination rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinationKind {
    /// A coordinator governs a finite conjunct
    ConjunctDependency,
    /// Semicolon with at least two finite verbs
    Semicolon,
    /// Comma plus connector on the surface, no subordination markers
    CommaConnector,
}

impl CoordinationKind {
    /// Rule name used in trace logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConjunctDependency => "conjunct-dependency",
            Self::Semicolon => "semicolon",
            Self::CommaConnector => "comma-connector",
        }
    }
}

/// Detect coordination, computing the subordination markers on demand
pub fn detect_coordination(sentence: &Sentence, lexicon: &Lexicon) -> Option<CoordinationKind> {
    detect_coordination_with(sentence, lexicon, count_finite_verbs(sentence), || {
        !collect_markers(sentence, lexicon).is_empty()
    })
}

/// Detect coordination from precomputed sentence features.
///
/// `has_markers` is only consulted by the surface comma-connector rule.
pub fn detect_coordination_with(
    sentence: &Sentence,
    lexicon: &Lexicon,
    finite_count: usize,
    has_markers: impl FnOnce() -> bool,
) -> Option<CoordinationKind> {
    if has_finite_conjunct(sentence, lexicon) {
        return Some(CoordinationKind::ConjunctDependency);
    }

    let text = sentence.text();
    if text.contains(';') && finite_count >= 2 {
        return Some(CoordinationKind::Semicolon);
    }

    if !has_markers() && lexicon.has_comma_connector(text) && finite_count >= 2 {
        return Some(CoordinationKind::CommaConnector);
    }

    None
}

fn has_finite_conjunct(sentence: &Sentence, lexicon: &Lexicon) -> bool {
    sentence
        .tokens()
        .iter()
        .filter(|t| {
            t.category() == Category::CoordinatingConjunction || lexicon.is_coordinator(t.lower())
        })
        .any(|coordinator| {
            sentence
                .children(coordinator.index())
                .any(|child| is_conjunct(child, lexicon) && is_finite(child))
        })
}
