//! Layered error types
//!
//! [`AnnotatorError`] covers everything that can go wrong while turning raw
//! text into annotated sentences; [`EngineError`] wraps it together with
//! core and configuration failures.

use satzart_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Annotation errors (adapter layer)
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// Malformed CoNLL-U input
    #[error("CoNLL-U line {line}: {message}")]
    Conllu {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// The annotator program could not be resolved
    #[error("annotator program '{program}' not found; {hint}")]
    ProgramNotFound {
        /// Program as configured
        program: String,
        /// How to install it
        hint: String,
    },

    /// The annotation model does not exist
    #[error("annotation model '{}' not available; {hint}", path.display())]
    ModelUnavailable {
        /// Configured model path
        path: PathBuf,
        /// How to obtain it
        hint: String,
    },

    /// The annotator program failed
    #[error("annotator '{program}' failed ({status}): {stderr}")]
    ProcessFailed {
        /// Program that was run
        program: String,
        /// Exit status description
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The annotator produced output that is not valid UTF-8
    #[error("annotator output is not valid UTF-8: {0}")]
    Encoding(String),

    /// I/O error while talking to the annotator
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AnnotatorError {
    fn from(err: std::io::Error) -> Self {
        AnnotatorError::Io(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for AnnotatorError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AnnotatorError::Encoding(err.to_string())
    }
}

/// Engine-level errors (application layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core error (lexicon loading)
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Annotation failed
    #[error("annotation failed: {0}")]
    Annotator(#[from] AnnotatorError),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
