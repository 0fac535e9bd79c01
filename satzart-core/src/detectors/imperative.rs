//! Imperative detection
//!
//! The strict check trusts the annotator's mood feature. Taggers regularly
//! miss `Mood=Imp` on sentence-initial verbs, so a positional fallback covers
//! "Gib mir das Buch." style sentences when no verb-first conditional and no
//! question mark are present.

use super::conditional::is_verb_first_conditional_with;
use crate::features::{first_word_index, is_subject, CommaProbe};
use crate::language::Lexicon;
use crate::types::{Category, MorphFeatures, Sentence};

/// How an imperative was recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImperativeKind {
    /// A verb carries imperative mood
    Mood,
    /// Verb-initial sentence without a preceding subject
    VerbInitial,
}

/// Any verb in imperative mood
pub fn is_imperative_strict(sentence: &Sentence) -> bool {
    sentence
        .tokens()
        .iter()
        .any(|t| t.category() == Category::Verb && t.morph().is_imperative_mood())
}

/// Positional imperative heuristic
pub fn is_imperative_fallback(sentence: &Sentence, lexicon: &Lexicon) -> bool {
    is_imperative_fallback_with(sentence, lexicon, &CommaProbe::probe(sentence, lexicon))
}

/// [`is_imperative_fallback`] with a precomputed comma probe
pub fn is_imperative_fallback_with(
    sentence: &Sentence,
    lexicon: &Lexicon,
    probe: &CommaProbe,
) -> bool {
    if is_verb_first_conditional_with(sentence, probe) || sentence.text().contains('?') {
        return false;
    }
    let Some(first_index) = first_word_index(sentence) else {
        return false;
    };
    let Some(first) = sentence.get(first_index) else {
        return false;
    };

    let verb_like =
        first.category().is_verb_like() || first.tag().is_some_and(|tag| tag.starts_with('V'));
    verb_like
        && !sentence.tokens()[..first_index]
            .iter()
            .any(|t| is_subject(t, lexicon))
}

/// Strict check first, then the fallback
pub fn detect_imperative(sentence: &Sentence, lexicon: &Lexicon) -> Option<ImperativeKind> {
    if is_imperative_strict(sentence) {
        Some(ImperativeKind::Mood)
    } else if is_imperative_fallback(sentence, lexicon) {
        Some(ImperativeKind::VerbInitial)
    } else {
        None
    }
}
