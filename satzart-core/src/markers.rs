//! Subordination marker detection
//!
//! Two independent passes find the words that introduce a subordinate
//! clause: one looks only at the sentence-initial word, the other scans every
//! token after the first comma. A candidate word alone is never enough; each
//! rule asks for confirming evidence (a finite verb in the right place, or a
//! relative-pronoun morphology) before recording a marker.

use crate::features::{first_word, is_finite, CommaProbe};
use crate::language::Lexicon;
use crate::marker_set::MarkerSet;
use crate::types::{Category, MorphFeatures, Sentence};

/// Synthetic marker for a verb-initial conditional clause ("Geht er, so folgt ...")
pub const VERB_FIRST_CONDITIONAL: &str = "verb-first-conditional";

/// Suffix tagging the subordinate-clause use of an uninflected subordinator
pub const CLAUSE_SUFFIX: &str = "-clause";

/// Markers signalled by the sentence-initial word
pub fn start_markers(sentence: &Sentence, lexicon: &Lexicon) -> MarkerSet {
    start_markers_with(sentence, lexicon, &CommaProbe::probe(sentence, lexicon))
}

/// [`start_markers`] with a precomputed comma probe
pub fn start_markers_with(sentence: &Sentence, lexicon: &Lexicon, probe: &CommaProbe) -> MarkerSet {
    let mut markers = MarkerSet::new();
    let Some(first) = first_word(sentence) else {
        return markers;
    };
    let word = first.lower();

    // "Weil er kam, ging sie." / "Um zu gewinnen, ..."
    if lexicon.is_subordinator(word) && (probe.finite_after || lexicon.is_purpose_connector(word)) {
        markers.insert(word);
    }

    if is_finite(first) && probe.finite_after && !first.morph().is_imperative_mood() {
        markers.insert(VERB_FIRST_CONDITIONAL);
    }

    if lexicon.is_uninflected_subordinator(word) && probe.finite_after {
        markers.insert(format!("{word}{CLAUSE_SUFFIX}"));
    }

    markers
}

/// Markers of subordinate clauses introduced after a comma
pub fn anywhere_markers(sentence: &Sentence, lexicon: &Lexicon) -> MarkerSet {
    anywhere_markers_with(sentence, lexicon, &CommaProbe::probe(sentence, lexicon))
}

/// [`anywhere_markers`] with a precomputed comma probe
pub fn anywhere_markers_with(
    sentence: &Sentence,
    lexicon: &Lexicon,
    probe: &CommaProbe,
) -> MarkerSet {
    let mut markers = MarkerSet::new();
    if !probe.has_comma() {
        return markers;
    }

    let tokens = sentence.tokens();
    for (i, token) in tokens.iter().enumerate() {
        if !probe.comma_at_or_before(i) {
            continue;
        }
        let word = token.lower();

        if lexicon.is_subordinator(word) {
            let window_end = (i + 1 + lexicon.subordinator_lookahead()).min(tokens.len());
            if tokens[i + 1..window_end].iter().any(is_finite) {
                markers.insert(word);
            }
        }

        // Relative forms are homographs of articles; morphology decides
        if lexicon.is_relative_candidate(word)
            && token.category() != Category::Determiner
            && token.morph().is_relative_pron_type()
        {
            markers.insert(word);
        }
    }

    markers
}

/// Start markers followed by anywhere markers, duplicates removed
pub fn collect_markers(sentence: &Sentence, lexicon: &Lexicon) -> MarkerSet {
    let probe = CommaProbe::probe(sentence, lexicon);
    start_markers_with(sentence, lexicon, &probe)
        .union(&anywhere_markers_with(sentence, lexicon, &probe))
}
