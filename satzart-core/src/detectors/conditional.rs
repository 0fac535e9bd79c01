use crate::features::{first_word, is_finite, CommaProbe};
use crate::language::Lexicon;
use crate::types::Sentence;

/// Verb-first conditional: "Regnet es, bleiben wir zu Hause."
///
/// The sentence-initial word is finite and the token right after the first
/// comma is finite as well.
pub fn is_verb_first_conditional(sentence: &Sentence, lexicon: &Lexicon) -> bool {
    is_verb_first_conditional_with(sentence, &CommaProbe::probe(sentence, lexicon))
}

/// [`is_verb_first_conditional`] with a precomputed comma probe
pub fn is_verb_first_conditional_with(sentence: &Sentence, probe: &CommaProbe) -> bool {
    probe.has_comma() && probe.finite_after && first_word(sentence).is_some_and(is_finite)
}
