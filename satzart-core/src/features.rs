//! Read-only feature queries over annotated tokens and sentences
//!
//! Every detector goes through these helpers instead of inspecting the raw
//! annotation, so "finite" or "comma" mean the same thing everywhere.

use crate::language::Lexicon;
use crate::types::{Category, MorphFeatures, Sentence, Token};

/// Verb or auxiliary whose morphology marks it finite
#[inline]
pub fn is_finite(token: &Token) -> bool {
    token.category().is_verb_like() && token.morph().is_finite_form()
}

/// Number of finite verbs and auxiliaries in the sentence
pub fn count_finite_verbs(sentence: &Sentence) -> usize {
    sentence.tokens().iter().filter(|t| is_finite(t)).count()
}

/// Position of the first comma-equivalent token
pub fn first_comma_index(sentence: &Sentence, lexicon: &Lexicon) -> Option<usize> {
    sentence
        .tokens()
        .iter()
        .position(|t| lexicon.is_comma(t.text()))
}

/// The token right after `index` exists and is finite
pub fn is_finite_after(sentence: &Sentence, index: usize) -> bool {
    sentence.get(index + 1).is_some_and(is_finite)
}

/// Position of the first token that is not punctuation.
///
/// This is the sentence-initial word for all first-position checks, so an
/// opening quotation mark does not hide a leading verb or subordinator.
pub fn first_word_index(sentence: &Sentence) -> Option<usize> {
    sentence
        .tokens()
        .iter()
        .position(|t| t.category() != Category::Punctuation)
}

/// The sentence-initial word, see [`first_word_index`]
pub fn first_word(sentence: &Sentence) -> Option<&Token> {
    first_word_index(sentence).and_then(|i| sentence.get(i))
}

/// Token is marked as a grammatical subject
pub fn is_subject(token: &Token, lexicon: &Lexicon) -> bool {
    lexicon.is_subject_relation(token.base_dep())
}

/// Token is marked as a coordinated conjunct
pub fn is_conjunct(token: &Token, lexicon: &Lexicon) -> bool {
    lexicon.is_conjunct_relation(token.base_dep())
}

/// First comma of a sentence and whether a finite verb follows it directly.
///
/// Both the sentence-initial marker pass and verb-first conditional detection
/// hinge on this one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommaProbe {
    /// Position of the first comma
    pub first_comma: Option<usize>,
    /// The token right after the first comma is finite
    pub finite_after: bool,
}

impl CommaProbe {
    /// Probe a sentence
    pub fn probe(sentence: &Sentence, lexicon: &Lexicon) -> Self {
        let first_comma = first_comma_index(sentence, lexicon);
        let finite_after = first_comma.is_some_and(|i| is_finite_after(sentence, i));
        Self {
            first_comma,
            finite_after,
        }
    }

    /// The sentence contains a comma
    pub fn has_comma(&self) -> bool {
        self.first_comma.is_some()
    }

    /// Some comma occurs at or before `index`
    pub fn comma_at_or_before(&self, index: usize) -> bool {
        self.first_comma.is_some_and(|comma| comma <= index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_lexicon;

    fn finite(text: &str) -> Token {
        Token::new(text, Category::Verb).with_feats("Mood=Ind|VerbForm=Fin")
    }

    fn word(text: &str) -> Token {
        Token::new(text, Category::Other)
    }

    fn comma() -> Token {
        Token::new(",", Category::Punctuation)
    }

    #[test]
    fn test_is_finite_requires_verb_category() {
        assert!(is_finite(&finite("geht")));
        assert!(is_finite(
            &Token::new("hat", Category::Auxiliary).with_feats("VerbForm=Fin")
        ));
        assert!(!is_finite(
            &Token::new("gehen", Category::Verb).with_feats("VerbForm=Inf")
        ));
        // Finite morphology on a non-verb does not count
        assert!(!is_finite(
            &Token::new("Lauf", Category::Other).with_feats("VerbForm=Fin")
        ));
    }

    #[test]
    fn test_count_finite_verbs() {
        let sentence = Sentence::new(vec![word("Er"), finite("kam"), comma(), finite("sah")]);
        assert_eq!(count_finite_verbs(&sentence), 2);
        assert_eq!(count_finite_verbs(&Sentence::new(Vec::new())), 0);
    }

    #[test]
    fn test_comma_probe() {
        let lexicon = get_lexicon("de").unwrap();
        let sentence = Sentence::new(vec![finite("Geht"), word("er"), comma(), finite("folgt")]);
        let probe = CommaProbe::probe(&sentence, lexicon);
        assert_eq!(probe.first_comma, Some(2));
        assert!(probe.finite_after);
        assert!(probe.comma_at_or_before(3));
        assert!(!probe.comma_at_or_before(1));
    }

    #[test]
    fn test_comma_probe_comma_at_end() {
        let lexicon = get_lexicon("de").unwrap();
        let sentence = Sentence::new(vec![finite("Geht"), word("er"), comma()]);
        let probe = CommaProbe::probe(&sentence, lexicon);
        assert!(probe.has_comma());
        assert!(!probe.finite_after);
    }

    #[test]
    fn test_first_word_skips_punctuation() {
        let sentence = Sentence::new(vec![
            Token::new("„", Category::Punctuation),
            finite("Komm"),
        ]);
        assert_eq!(first_word_index(&sentence), Some(1));
        assert_eq!(first_word(&sentence).map(Token::text), Some("Komm"));
        assert_eq!(first_word_index(&Sentence::new(vec![comma()])), None);
    }
}
