//! Language data for clause classification
//!
//! The closed word classes (subordinators, relative pronoun forms,
//! coordinators) and the annotation labels the detectors look for are data,
//! not code. They are kept in TOML lexicons embedded at compile time; a
//! custom lexicon with the same schema can be loaded from a file.

pub mod config;
mod lexicon;
mod loader;

pub use config::LexiconConfig;
pub use lexicon::Lexicon;
pub use loader::{get_lexicon, list_available_lexicons};

/// Code of the lexicon used when none is requested
pub const DEFAULT_LEXICON: &str = "de";
