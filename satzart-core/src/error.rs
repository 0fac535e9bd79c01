//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a lexicon.
///
/// Classification itself never fails; only the closed word lists it depends on
/// can be malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Lexicon TOML could not be parsed
    #[error("Failed to parse lexicon '{name}': {message}")]
    LexiconParse {
        /// Lexicon code or file name
        name: String,
        /// Parser message
        message: String,
    },

    /// Lexicon parsed but violates a structural requirement
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// No embedded lexicon for the requested code
    #[error("Unsupported lexicon: {0}")]
    UnsupportedLexicon(String),

    /// Lexicon file could not be read
    #[error("Failed to read lexicon file {path}: {message}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// I/O error message
        message: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
