//! CoNLL-U reader and the pass-through annotator for pre-annotated input
//!
//! Only syntactic words are kept: multiword token ranges (`1-2`) and empty
//! nodes (`8.1`) are skipped. `HEAD` is converted to a zero-based index into
//! the sentence, with `0` (root) and `_` mapping to no head.

use super::Annotator;
use crate::document::AnnotatedDocument;
use crate::error::AnnotatorError;
use satzart_core::{Category, Morphology, Sentence, Token};

const COLUMNS: usize = 10;

/// Parse CoNLL-U text into sentences.
///
/// Sentence text comes from the `# text = ...` comment when present and is
/// otherwise rebuilt from the word forms, honouring `SpaceAfter=No`. Spans are
/// not set; see [`crate::document::align_offsets`].
pub fn parse_conllu(input: &str) -> Result<Vec<Sentence>, AnnotatorError> {
    let mut sentences = Vec::new();
    let mut builder = SentenceBuilder::default();

    for (number, raw_line) in input.lines().enumerate() {
        let line_number = number + 1;
        let line = raw_line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if let Some(sentence) = builder.finish() {
                sentences.push(sentence);
            }
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if let Some(text) = comment.trim_start().strip_prefix("text") {
                if let Some(value) = text.trim_start().strip_prefix('=') {
                    builder.text = Some(value.trim().to_string());
                }
            }
            continue;
        }

        builder.push_line(line, line_number)?;
    }

    if let Some(sentence) = builder.finish() {
        sentences.push(sentence);
    }

    Ok(sentences)
}

#[derive(Default)]
struct SentenceBuilder {
    text: Option<String>,
    tokens: Vec<Token>,
    space_after: Vec<bool>,
}

impl SentenceBuilder {
    fn push_line(&mut self, line: &str, line_number: usize) -> Result<(), AnnotatorError> {
        let mut fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMNS {
            // Some tools emit space-separated columns
            fields = line.split_whitespace().collect();
        }
        if fields.len() != COLUMNS {
            return Err(syntax_error(
                line_number,
                format!("expected {COLUMNS} columns, found {}", fields.len()),
            ));
        }

        let id = fields[0];
        if id.contains('-') || id.contains('.') {
            log::debug!("line {line_number}: skipping non-word node {id}");
            return Ok(());
        }

        let id: usize = id
            .parse()
            .map_err(|_| syntax_error(line_number, format!("invalid token id '{id}'")))?;
        if id != self.tokens.len() + 1 {
            return Err(syntax_error(
                line_number,
                format!("expected token id {}, found {id}", self.tokens.len() + 1),
            ));
        }

        let head = match fields[6] {
            "_" | "0" => None,
            value => {
                let head: usize = value.parse().map_err(|_| {
                    syntax_error(line_number, format!("invalid head '{value}'"))
                })?;
                head.checked_sub(1)
            }
        };

        let mut token = Token::new(fields[1], Category::from_upos(fields[3]))
            .with_morph(Morphology::parse(fields[5]))
            .with_dep(none_if_underscore(fields[7]).unwrap_or_default(), head);
        if let Some(xpos) = none_if_underscore(fields[4]) {
            token = token.with_tag(xpos);
        }

        self.tokens.push(token);
        self.space_after
            .push(!fields[9].split('|').any(|item| item == "SpaceAfter=No"));
        Ok(())
    }

    fn finish(&mut self) -> Option<Sentence> {
        let text = self.text.take();
        let space_after = std::mem::take(&mut self.space_after);
        let tokens = std::mem::take(&mut self.tokens);
        if tokens.is_empty() {
            return None;
        }

        let text = text.unwrap_or_else(|| rebuild_text(&tokens, &space_after));
        Some(Sentence::new(tokens).with_text(text))
    }
}

fn rebuild_text(tokens: &[Token], space_after: &[bool]) -> String {
    let mut text = String::new();
    for (i, token) in tokens.iter().enumerate() {
        text.push_str(token.text());
        if i + 1 < tokens.len() && space_after.get(i).copied().unwrap_or(true) {
            text.push(' ');
        }
    }
    text
}

fn none_if_underscore(value: &str) -> Option<&str> {
    (value != "_").then_some(value)
}

fn syntax_error(line: usize, message: String) -> AnnotatorError {
    AnnotatorError::Conllu { line, message }
}

/// Annotator for input that is already CoNLL-U
#[derive(Debug, Clone, Copy, Default)]
pub struct ConlluAnnotator;

impl ConlluAnnotator {
    /// Create the annotator
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for ConlluAnnotator {
    fn name(&self) -> &str {
        "conllu"
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotatorError> {
        Ok(AnnotatedDocument::from_sentences(parse_conllu(text)?))
    }
}
