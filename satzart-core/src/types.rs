//! Annotated tokens and sentences
//!
//! These types are the annotation contract between an annotator (tagger,
//! morphological analyser, dependency parser) and the classifier. The
//! classifier only reads them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coarse grammatical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Full verb
    Verb,
    /// Auxiliary or modal verb
    Auxiliary,
    /// Coordinating conjunction ("und", "oder")
    CoordinatingConjunction,
    /// Subordinating conjunction ("weil", "dass")
    SubordinatingConjunction,
    /// Pronoun
    Pronoun,
    /// Determiner, including articles
    Determiner,
    /// Punctuation mark
    Punctuation,
    /// Any other category
    Other,
}

impl Category {
    /// Map a Universal Dependencies UPOS tag to a category
    pub fn from_upos(tag: &str) -> Self {
        match tag {
            "VERB" => Category::Verb,
            "AUX" => Category::Auxiliary,
            "CCONJ" | "CONJ" => Category::CoordinatingConjunction,
            "SCONJ" => Category::SubordinatingConjunction,
            "PRON" => Category::Pronoun,
            "DET" => Category::Determiner,
            "PUNCT" => Category::Punctuation,
            _ => Category::Other,
        }
    }

    /// Verb or auxiliary
    #[inline]
    pub fn is_verb_like(self) -> bool {
        matches!(self, Category::Verb | Category::Auxiliary)
    }
}

/// Morphological queries the detectors rely on.
///
/// Any annotation backend can plug its own feature representation in by
/// implementing the three accessors; the predicates are derived from them.
pub trait MorphFeatures {
    /// Value of the VerbForm feature (`Fin`, `Inf`, `Part`, ...)
    fn verb_form(&self) -> Option<&str>;

    /// Value of the Mood feature (`Ind`, `Sub`, `Imp`, ...)
    fn mood(&self) -> Option<&str>;

    /// Raw value of the PronType feature, possibly multi-valued (`Int,Rel`)
    fn pron_type(&self) -> Option<&str>;

    /// Inflected for person/number
    fn is_finite_form(&self) -> bool {
        self.verb_form() == Some("Fin")
    }

    /// Bare infinitive form
    fn is_infinitive_form(&self) -> bool {
        self.verb_form() == Some("Inf")
    }

    /// Imperative mood
    fn is_imperative_mood(&self) -> bool {
        self.mood() == Some("Imp")
    }

    /// PronType carries the relative value
    fn is_relative_pron_type(&self) -> bool {
        self.pron_type()
            .is_some_and(|value| value.split(',').any(|v| v == "Rel"))
    }
}

/// Feature bag in Universal Dependencies `Key=Value|Key=Value` notation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphology {
    features: BTreeMap<String, String>,
}

impl Morphology {
    /// Create an empty feature bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a FEATS column. `_` and the empty string yield an empty bag;
    /// entries without `=` are ignored.
    pub fn parse(feats: &str) -> Self {
        let mut morph = Self::new();
        let feats = feats.trim();
        if feats.is_empty() || feats == "_" {
            return morph;
        }

        for pair in feats.split('|') {
            if let Some((key, value)) = pair.split_once('=') {
                if !key.is_empty() && !value.is_empty() {
                    morph.insert(key, value);
                }
            }
        }

        morph
    }

    /// Set a feature value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.features.insert(key.into(), value.into());
    }

    /// Look up a feature value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.features.get(key).map(String::as_str)
    }

    /// True if no feature is set
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl MorphFeatures for Morphology {
    fn verb_form(&self) -> Option<&str> {
        self.get("VerbForm")
    }

    fn mood(&self) -> Option<&str> {
        self.get("Mood")
    }

    fn pron_type(&self) -> Option<&str> {
        self.get("PronType")
    }
}

impl fmt::Display for Morphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.features.is_empty() {
            return write!(f, "_");
        }
        for (i, (key, value)) in self.features.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// A single annotated token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    text: String,
    #[serde(skip)]
    lower: String,
    category: Category,
    tag: Option<String>,
    morph: Morphology,
    dep: String,
    head: Option<usize>,
    index: usize,
}

impl Token {
    /// Create a token with no morphology and an empty dependency relation
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        let text = text.into();
        Self {
            lower: text.to_lowercase(),
            text,
            category,
            tag: None,
            morph: Morphology::new(),
            dep: String::new(),
            head: None,
            index: 0,
        }
    }

    /// Set the fine-grained tag (XPOS)
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set morphology from a FEATS string
    pub fn with_feats(mut self, feats: &str) -> Self {
        self.morph = Morphology::parse(feats);
        self
    }

    /// Set morphology
    pub fn with_morph(mut self, morph: Morphology) -> Self {
        self.morph = morph;
        self
    }

    /// Set the dependency relation and the sentence-relative head index
    pub fn with_dep(mut self, relation: impl Into<String>, head: Option<usize>) -> Self {
        self.dep = relation.into();
        self.head = head;
        self
    }

    /// Surface form
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased surface form
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Coarse category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Fine-grained tag, if the annotator supplied one
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Morphological features
    pub fn morph(&self) -> &Morphology {
        &self.morph
    }

    /// Dependency relation label
    pub fn dep(&self) -> &str {
        &self.dep
    }

    /// Dependency relation without subtype (`nsubj:pass` -> `nsubj`)
    pub fn base_dep(&self) -> &str {
        self.dep.split(':').next().unwrap_or_default()
    }

    /// Head index within the sentence, `None` for the root
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Position within the sentence
    pub fn index(&self) -> usize {
        self.index
    }
}

/// An annotated sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    tokens: Vec<Token>,
    text: String,
    start: usize,
    end: usize,
}

impl Sentence {
    /// Create a sentence from tokens in surface order.
    ///
    /// Token positions are renumbered densely from zero. The text is derived
    /// from the token forms and the span covers it from offset 0.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        for (i, token) in tokens.iter_mut().enumerate() {
            token.index = i;
        }
        let text = derive_text(&tokens);
        let end = text.chars().count();
        Self {
            tokens,
            text,
            start: 0,
            end,
        }
    }

    /// Replace the raw text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.end = self.start + self.text.chars().count();
        self
    }

    /// Set the character span into the source document
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Tokens in surface order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token at a position
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Raw text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start character offset
    pub fn start(&self) -> usize {
        self.start
    }

    /// End character offset (exclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if the trimmed text is empty
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Tokens whose head is the token at `head`
    pub fn children(&self, head: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .iter()
            .filter(move |token| token.head == Some(head))
    }
}

/// Join forms with single spaces, without a space before punctuation
fn derive_text(tokens: &[Token]) -> String {
    let mut text = String::new();
    for token in tokens {
        if !text.is_empty() && token.category != Category::Punctuation {
            text.push(' ');
        }
        text.push_str(&token.text);
    }
    text
}
