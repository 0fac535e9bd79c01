//! Annotated documents and sentence offset alignment

use satzart_core::Sentence;

/// Source text together with its annotated sentences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDocument {
    text: String,
    sentences: Vec<Sentence>,
}

impl AnnotatedDocument {
    /// Create a document from source text and sentences whose spans are
    /// already set
    pub fn new(text: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            text: text.into(),
            sentences,
        }
    }

    /// Create a document from sentences alone.
    ///
    /// The document text is the sentence texts joined by single spaces and
    /// sentence spans are aligned against it.
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        let text = sentences
            .iter()
            .map(|s| s.text().trim())
            .collect::<Vec<_>>()
            .join(" ");
        let sentences = align_offsets(&text, sentences);
        Self { text, sentences }
    }

    /// Create a document with no sentences
    pub fn empty() -> Self {
        Self::default()
    }

    /// Source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True if the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Locate each sentence text in `source` and set its character span.
///
/// The search for a sentence starts where the previous one ended. A sentence
/// whose trimmed text does not occur verbatim keeps the cursor position as its
/// start and its own length as extent; the cursor does not advance past it.
pub fn align_offsets(source: &str, sentences: Vec<Sentence>) -> Vec<Sentence> {
    let mut cursor_byte = 0;
    let mut cursor_char = 0;

    sentences
        .into_iter()
        .map(|sentence| {
            let needle = sentence.text().trim();
            let length = needle.chars().count();
            if needle.is_empty() {
                return sentence.with_span(cursor_char, cursor_char);
            }

            match source[cursor_byte..].find(needle) {
                Some(relative) => {
                    let found = cursor_byte + relative;
                    let start = cursor_char + source[cursor_byte..found].chars().count();
                    let end = start + length;
                    cursor_byte = found + needle.len();
                    cursor_char = end;
                    sentence.with_span(start, end)
                }
                None => {
                    log::warn!(
                        "sentence text not found in source after offset {}: {:?}",
                        cursor_char,
                        needle
                    );
                    sentence.with_span(cursor_char, cursor_char + length)
                }
            }
        })
        .collect()
}
