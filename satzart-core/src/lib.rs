//! Clause-type classification for annotated German sentences
//!
//! This crate contains the pure, annotator-independent part of satzart: given
//! a sentence whose tokens carry a coarse category, morphological features
//! and a dependency relation, it decides whether the sentence is a main
//! clause, a hypotactic or paratactic construction, a question, a command, an
//! exclamation, an infinitive construction or an elliptical fragment, and
//! which words introduce its subordinate clauses.
//!
//! # Architecture
//!
//! - **Feature accessor** ([`features`]): finiteness, comma position and
//!   relation queries over tokens
//! - **Marker detector** ([`markers`]): start-of-sentence and anywhere passes
//!   producing subordination markers
//! - **Construction detectors** ([`detectors`]): infinitive, verb-first
//!   conditional, imperative and coordination
//! - **Cascade** ([`cascade`]): ordered rule table, first match wins
//!
//! Word lists and relation labels come from a [`Lexicon`].
//!
//! # Example
//!
//! ```rust
//! use satzart_core::{Category, Classifier, ClauseLabel, Sentence, Token};
//!
//! let classifier = Classifier::german().unwrap();
//!
//! // "Weil es regnet, bleiben wir."
//! let sentence = Sentence::new(vec![
//!     Token::new("Weil", Category::SubordinatingConjunction),
//!     Token::new("es", Category::Pronoun),
//!     Token::new("regnet", Category::Verb).with_feats("VerbForm=Fin"),
//!     Token::new(",", Category::Punctuation),
//!     Token::new("bleiben", Category::Verb).with_feats("VerbForm=Fin"),
//!     Token::new("wir", Category::Pronoun),
//!     Token::new(".", Category::Punctuation),
//! ]);
//!
//! let result = classifier.classify(&sentence);
//! assert_eq!(result.label, ClauseLabel::Hypotaxis);
//! assert_eq!(result.markers.into_vec(), vec!["weil"]);
//! ```

pub mod cascade;
pub mod detectors;
pub mod error;
pub mod features;
pub mod label;
pub mod language;
pub mod marker_set;
pub mod markers;
pub mod types;

pub use cascade::{Classifier, Rule, SentenceContext, CASCADE};
pub use error::{CoreError, Result};
pub use label::{Classification, ClauseLabel};
pub use language::{get_lexicon, list_available_lexicons, Lexicon, DEFAULT_LEXICON};
pub use marker_set::MarkerSet;
pub use markers::{collect_markers, VERB_FIRST_CONDITIONAL};
pub use types::{Category, MorphFeatures, Morphology, Sentence, Token};
