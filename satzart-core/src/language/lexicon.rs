//! Runtime lexicon built from a [`LexiconConfig`]

use super::config::LexiconConfig;
use crate::error::{CoreError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Closed word lists and annotation labels consulted by the detectors.
///
/// All word lookups expect lower-cased input.
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    subordinators: HashSet<String>,
    relative_pronouns: HashSet<String>,
    purpose_connectors: HashSet<String>,
    uninflected_subordinators: HashSet<String>,
    coordinators: HashSet<String>,
    infinitive_particle: String,
    commas: HashSet<String>,
    conjunct_relations: HashSet<String>,
    subject_relations: HashSet<String>,
    subordinator_lookahead: usize,
    purpose_lookahead: usize,
    comma_connector: Option<Regex>,
}

impl Lexicon {
    /// Build and validate a lexicon from its configuration
    pub fn from_config(config: LexiconConfig) -> Result<Self> {
        if config.markers.subordinators.is_empty() {
            return Err(CoreError::InvalidLexicon(
                "markers.subordinators must not be empty".into(),
            ));
        }
        if config.punctuation.commas.is_empty() {
            return Err(CoreError::InvalidLexicon(
                "punctuation.commas must not be empty".into(),
            ));
        }
        if config.infinitive.particle.trim().is_empty() {
            return Err(CoreError::InvalidLexicon(
                "infinitive.particle must not be empty".into(),
            ));
        }
        if config.windows.subordinator_lookahead == 0 || config.windows.purpose_lookahead == 0 {
            return Err(CoreError::InvalidLexicon(
                "lookahead windows must be greater than 0".into(),
            ));
        }

        let comma_connector = build_comma_connector(&config.coordination.comma_connectors)?;

        Ok(Self {
            code: config.metadata.code,
            name: config.metadata.name,
            subordinators: word_set(config.markers.subordinators),
            relative_pronouns: word_set(config.markers.relative_pronouns),
            purpose_connectors: word_set(config.markers.purpose_connectors),
            uninflected_subordinators: word_set(config.markers.uninflected_subordinators),
            coordinators: word_set(config.coordination.coordinators),
            infinitive_particle: config.infinitive.particle.trim().to_lowercase(),
            commas: config.punctuation.commas.into_iter().collect(),
            conjunct_relations: config.relations.conjunct.into_iter().collect(),
            subject_relations: config.relations.subject.into_iter().collect(),
            subordinator_lookahead: config.windows.subordinator_lookahead,
            purpose_lookahead: config.windows.purpose_lookahead,
            comma_connector,
        })
    }

    /// Parse a lexicon from TOML text
    pub fn from_toml_str(name: &str, content: &str) -> Result<Self> {
        let config: LexiconConfig =
            toml::from_str(content).map_err(|e| CoreError::LexiconParse {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CoreError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&path.display().to_string(), &content)
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subordinating-conjunction-like word
    pub fn is_subordinator(&self, word: &str) -> bool {
        self.subordinators.contains(word)
    }

    /// Form that may be a relative pronoun
    pub fn is_relative_candidate(&self, word: &str) -> bool {
        self.relative_pronouns.contains(word)
    }

    /// Connector opening an infinitive clause of purpose
    pub fn is_purpose_connector(&self, word: &str) -> bool {
        self.purpose_connectors.contains(word)
    }

    /// Subordinator that is also used as comparative/manner adverb
    pub fn is_uninflected_subordinator(&self, word: &str) -> bool {
        self.uninflected_subordinators.contains(word)
    }

    /// Coordinating connector
    pub fn is_coordinator(&self, word: &str) -> bool {
        self.coordinators.contains(word)
    }

    /// The infinitive particle ("zu")
    pub fn is_infinitive_particle(&self, word: &str) -> bool {
        self.infinitive_particle == word
    }

    /// The infinitive particle itself
    pub fn infinitive_particle(&self) -> &str {
        &self.infinitive_particle
    }

    /// Comma-equivalent punctuation token
    pub fn is_comma(&self, text: &str) -> bool {
        self.commas.contains(text)
    }

    /// Relation label marking a coordinated conjunct
    pub fn is_conjunct_relation(&self, relation: &str) -> bool {
        self.conjunct_relations.contains(relation)
    }

    /// Relation label marking a grammatical subject
    pub fn is_subject_relation(&self, relation: &str) -> bool {
        self.subject_relations.contains(relation)
    }

    /// Tokens inspected after a subordinator when looking for a finite verb
    pub fn subordinator_lookahead(&self) -> usize {
        self.subordinator_lookahead
    }

    /// Tokens inspected after a purpose connector when looking for "zu"
    pub fn purpose_lookahead(&self) -> usize {
        self.purpose_lookahead
    }

    /// Text contains a comma directly followed by a coordinating connector
    pub fn has_comma_connector(&self, text: &str) -> bool {
        self.comma_connector
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }
}

fn word_set(words: Vec<String>) -> HashSet<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// `,\s*(und|oder|...)\b`, case-insensitive
fn build_comma_connector(connectors: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = connectors
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = format!(r"(?i),\s*(?:{})\b", alternatives.join("|"));
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| CoreError::InvalidLexicon(format!("comma connector pattern: {e}")))
}
