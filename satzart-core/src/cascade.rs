//! The classification cascade
//!
//! Sentences are classified by an ordered table of rules; the first rule
//! whose predicate holds decides the label and produces the markers. The
//! table ends with an unconditional rule, so classification is total.
//!
//! Detector results shared between rules (finite-verb count, comma probe,
//! marker passes, infinitive match) live in a [`SentenceContext`] and are
//! computed at most once per sentence.

use crate::detectors::{
    detect_coordination_with, detect_infinitive, is_imperative_fallback_with,
    is_imperative_strict, is_verb_first_conditional_with, CoordinationKind, ImperativeKind,
    InfinitiveClause,
};
use crate::error::Result;
use crate::features::{count_finite_verbs, CommaProbe};
use crate::label::{Classification, ClauseLabel};
use crate::language::{get_lexicon, Lexicon, DEFAULT_LEXICON};
use crate::marker_set::MarkerSet;
use crate::markers::{anywhere_markers_with, start_markers_with, VERB_FIRST_CONDITIONAL};
use crate::types::Sentence;
use std::cell::OnceCell;
use std::sync::Arc;

/// Lazily evaluated features of one sentence
pub struct SentenceContext<'a> {
    sentence: &'a Sentence,
    lexicon: &'a Lexicon,
    finite_count: OnceCell<usize>,
    probe: OnceCell<CommaProbe>,
    start: OnceCell<MarkerSet>,
    anywhere: OnceCell<MarkerSet>,
    collected: OnceCell<MarkerSet>,
    infinitive: OnceCell<Option<InfinitiveClause>>,
}

impl<'a> SentenceContext<'a> {
    pub fn new(sentence: &'a Sentence, lexicon: &'a Lexicon) -> Self {
        Self {
            sentence,
            lexicon,
            finite_count: OnceCell::new(),
            probe: OnceCell::new(),
            start: OnceCell::new(),
            anywhere: OnceCell::new(),
            collected: OnceCell::new(),
            infinitive: OnceCell::new(),
        }
    }

    pub fn sentence(&self) -> &'a Sentence {
        self.sentence
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Trimmed raw text
    pub fn text(&self) -> &'a str {
        self.sentence.text().trim()
    }

    pub fn finite_count(&self) -> usize {
        *self
            .finite_count
            .get_or_init(|| count_finite_verbs(self.sentence))
    }

    pub fn probe(&self) -> &CommaProbe {
        self.probe
            .get_or_init(|| CommaProbe::probe(self.sentence, self.lexicon))
    }

    pub fn start_markers(&self) -> &MarkerSet {
        self.start
            .get_or_init(|| start_markers_with(self.sentence, self.lexicon, self.probe()))
    }

    pub fn anywhere_markers(&self) -> &MarkerSet {
        self.anywhere
            .get_or_init(|| anywhere_markers_with(self.sentence, self.lexicon, self.probe()))
    }

    /// Start markers followed by anywhere markers, deduplicated
    pub fn markers(&self) -> &MarkerSet {
        self.collected.get_or_init(|| {
            self.start_markers()
                .clone()
                .union(self.anywhere_markers())
        })
    }

    pub fn infinitive(&self) -> Option<&InfinitiveClause> {
        self.infinitive
            .get_or_init(|| detect_infinitive(self.sentence, self.lexicon))
            .as_ref()
    }

    pub fn is_verb_first_conditional(&self) -> bool {
        is_verb_first_conditional_with(self.sentence, self.probe())
    }

    pub fn imperative(&self) -> Option<ImperativeKind> {
        if is_imperative_strict(self.sentence) {
            Some(ImperativeKind::Mood)
        } else if is_imperative_fallback_with(self.sentence, self.lexicon, self.probe()) {
            Some(ImperativeKind::VerbInitial)
        } else {
            None
        }
    }

    pub fn coordination(&self) -> Option<CoordinationKind> {
        detect_coordination_with(self.sentence, self.lexicon, self.finite_count(), || {
            !self.markers().is_empty()
        })
    }
}

/// One step of the cascade
pub struct Rule {
    pub name: &'static str,
    pub label: ClauseLabel,
    applies: fn(&SentenceContext<'_>) -> bool,
    markers: fn(&SentenceContext<'_>) -> MarkerSet,
}

impl Rule {
    pub fn applies(&self, ctx: &SentenceContext<'_>) -> bool {
        (self.applies)(ctx)
    }

    pub fn markers(&self, ctx: &SentenceContext<'_>) -> MarkerSet {
        (self.markers)(ctx)
    }

    fn classify(&self, ctx: &SentenceContext<'_>) -> Classification {
        Classification::new(self.label, self.markers(ctx), self.name)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish()
    }
}

/// Cascade rules in evaluation order
pub static CASCADE: [Rule; 9] = [
    Rule {
        name: "ellipsis",
        label: ClauseLabel::Ellipsis,
        applies: is_fragment,
        markers: no_markers,
    },
    Rule {
        name: "interrogative",
        label: ClauseLabel::Interrogative,
        applies: has_question_mark,
        markers: collected_markers,
    },
    Rule {
        name: "infinitive",
        label: ClauseLabel::InfinitiveClause,
        applies: has_infinitive,
        markers: infinitive_marker,
    },
    Rule {
        name: "verb-first-conditional",
        label: ClauseLabel::Hypotaxis,
        applies: is_conditional,
        markers: conditional_markers,
    },
    Rule {
        name: "imperative",
        label: ClauseLabel::Imperative,
        applies: is_imperative,
        markers: collected_markers,
    },
    Rule {
        name: "exclamative",
        label: ClauseLabel::Exclamative,
        applies: has_exclamation_mark,
        markers: collected_markers,
    },
    Rule {
        name: "subordination",
        label: ClauseLabel::Hypotaxis,
        applies: has_markers,
        markers: collected_markers,
    },
    Rule {
        name: "coordination",
        label: ClauseLabel::Parataxis,
        applies: is_coordinated,
        markers: no_markers,
    },
    Rule {
        name: "main-clause",
        label: ClauseLabel::MainClause,
        applies: always,
        markers: no_markers,
    },
];

fn is_fragment(ctx: &SentenceContext<'_>) -> bool {
    ctx.text().is_empty() || ctx.sentence().is_empty() || ctx.finite_count() == 0
}

fn has_question_mark(ctx: &SentenceContext<'_>) -> bool {
    ctx.text().contains('?')
}

fn has_infinitive(ctx: &SentenceContext<'_>) -> bool {
    ctx.infinitive().is_some()
}

fn is_conditional(ctx: &SentenceContext<'_>) -> bool {
    ctx.is_verb_first_conditional()
}

fn is_imperative(ctx: &SentenceContext<'_>) -> bool {
    ctx.imperative().is_some()
}

fn has_exclamation_mark(ctx: &SentenceContext<'_>) -> bool {
    ctx.text().contains('!')
}

fn has_markers(ctx: &SentenceContext<'_>) -> bool {
    !ctx.markers().is_empty()
}

fn is_coordinated(ctx: &SentenceContext<'_>) -> bool {
    match ctx.coordination() {
        Some(kind) => {
            log::trace!("coordination by {}", kind.as_str());
            true
        }
        None => false,
    }
}

fn always(_: &SentenceContext<'_>) -> bool {
    true
}

fn no_markers(_: &SentenceContext<'_>) -> MarkerSet {
    MarkerSet::new()
}

fn collected_markers(ctx: &SentenceContext<'_>) -> MarkerSet {
    ctx.markers().clone()
}

fn infinitive_marker(ctx: &SentenceContext<'_>) -> MarkerSet {
    ctx.infinitive()
        .map(|clause| MarkerSet::single(clause.label()))
        .unwrap_or_default()
}

fn conditional_markers(ctx: &SentenceContext<'_>) -> MarkerSet {
    MarkerSet::single(VERB_FIRST_CONDITIONAL).union(ctx.markers())
}

/// Sentence classifier bound to a lexicon
#[derive(Debug, Clone)]
pub struct Classifier {
    lexicon: Arc<Lexicon>,
}

impl Classifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Classifier using an embedded lexicon
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(Arc::new(get_lexicon(code)?.clone())))
    }

    /// Classifier using the default German lexicon
    pub fn german() -> Result<Self> {
        Self::for_language(DEFAULT_LEXICON)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify one sentence
    pub fn classify(&self, sentence: &Sentence) -> Classification {
        let ctx = SentenceContext::new(sentence, &self.lexicon);
        for rule in &CASCADE {
            if rule.applies(&ctx) {
                let classification = rule.classify(&ctx);
                log::debug!(
                    "rule '{}' -> {} [{}] for {:?}",
                    rule.name,
                    classification.label,
                    classification.markers,
                    ctx.text()
                );
                return classification;
            }
            log::trace!("rule '{}' did not apply", rule.name);
        }

        // Unreachable while the table ends with `main-clause`
        Classification::new(ClauseLabel::MainClause, MarkerSet::new(), "main-clause")
    }
}
