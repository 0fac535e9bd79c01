//! Annotation adapters
//!
//! An [`Annotator`] turns raw text into sentences whose tokens carry the
//! features the classifier reads. It is constructed once, before any request
//! is served, and shared by reference afterwards.

mod command;
mod conllu;

pub use command::{CommandAnnotator, CommandConfig, MODEL_PLACEHOLDER};
pub use conllu::{parse_conllu, ConlluAnnotator};

use crate::document::AnnotatedDocument;
use crate::error::AnnotatorError;

/// Sentence segmentation, tagging and parsing behind one call
pub trait Annotator: Send + Sync {
    /// Short name for logs and reports
    fn name(&self) -> &str;

    /// Annotate a document
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotatorError>;
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotatorError> {
        (**self).annotate(text)
    }
}
