//! Infinitive clause detection ("um ... zu gewinnen", "zu gehen")

use crate::language::Lexicon;
use crate::types::{MorphFeatures, Sentence};
use std::fmt;

/// An infinitive construction found in a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfinitiveClause {
    /// Purpose connector followed by particle and infinitive ("um ... zu sparen")
    Purpose { connector: String, particle: String },
    /// Particle directly followed by an infinitive ("zu gehen")
    Bare { particle: String },
}

impl InfinitiveClause {
    /// Marker label reported for the construction
    pub fn label(&self) -> String {
        match self {
            Self::Purpose {
                connector,
                particle,
            } => format!("infinitive ({connector} {particle})"),
            Self::Bare { particle } => format!("infinitive ({particle})"),
        }
    }
}

impl fmt::Display for InfinitiveClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Find an infinitive construction; purpose constructions take precedence.
pub fn detect_infinitive(sentence: &Sentence, lexicon: &Lexicon) -> Option<InfinitiveClause> {
    let tokens = sentence.tokens();

    for (i, token) in tokens.iter().enumerate() {
        if !lexicon.is_purpose_connector(token.lower()) {
            continue;
        }
        let window_end = (i + 1 + lexicon.purpose_lookahead()).min(tokens.len());
        if (i + 1..window_end).any(|j| particle_with_infinitive(sentence, lexicon, j)) {
            return Some(InfinitiveClause::Purpose {
                connector: token.lower().to_string(),
                particle: lexicon.infinitive_particle().to_string(),
            });
        }
    }

    (0..tokens.len())
        .any(|i| particle_with_infinitive(sentence, lexicon, i))
        .then(|| InfinitiveClause::Bare {
            particle: lexicon.infinitive_particle().to_string(),
        })
}

/// Token at `index` is the particle and the next token is an infinitive
fn particle_with_infinitive(sentence: &Sentence, lexicon: &Lexicon, index: usize) -> bool {
    sentence
        .get(index)
        .is_some_and(|t| lexicon.is_infinitive_particle(t.lower()))
        && sentence
            .get(index + 1)
            .is_some_and(|t| t.morph().is_infinitive_form())
}
