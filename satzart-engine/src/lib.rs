//! Document-level orchestration for clause-type classification
//!
//! This crate connects an annotator (CoNLL-U input or an external tagger and
//! parser) to the classifier from `satzart-core`, aggregates per-sentence
//! results into a [`DocumentAnalysis`] and provides sequential and parallel
//! execution strategies.
//!
//! # Example
//!
//! ```rust
//! use satzart_engine::{ClauseAnalyzer, ConlluAnnotator};
//! use satzart_core::ClauseLabel;
//!
//! let analyzer = ClauseAnalyzer::builder()
//!     .annotator(ConlluAnnotator::new())
//!     .build()
//!     .unwrap();
//!
//! let conllu = "\
//! 1\tEr\ter\tPRON\tPPER\tPronType=Prs\t2\tnsubj\t_\t_
//! 2\tschläft\tschlafen\tVERB\tVVFIN\tMood=Ind|VerbForm=Fin\t0\troot\t_\tSpaceAfter=No
//! 3\t.\t.\tPUNCT\t$.\t_\t2\tpunct\t_\t_
//! ";
//!
//! let analysis = analyzer.analyze_text(conllu).unwrap();
//! assert_eq!(analysis.count(ClauseLabel::MainClause), 1);
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod analysis;
pub mod annotator;
pub mod config;
pub mod document;
pub mod error;
pub mod executor;
pub mod processor;

// Re-export key types
pub use aggregator::Aggregator;
pub use analysis::{DocumentAnalysis, SentenceAnalysis};
pub use annotator::{parse_conllu, Annotator, CommandAnnotator, CommandConfig, ConlluAnnotator};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use document::{align_offsets, AnnotatedDocument};
pub use error::{AnnotatorError, EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use processor::{ClauseAnalyzer, ClauseAnalyzerBuilder};

// Re-export from core for convenience
pub use satzart_core::{Classification, ClauseLabel, Classifier, Lexicon, MarkerSet};
