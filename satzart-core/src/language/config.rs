//! TOML schema for lexicon configuration
//!
//! Field-level meaning is documented in `configs/lexicon/german.toml`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    pub markers: MarkerConfig,
    pub coordination: CoordinationConfig,
    pub infinitive: InfinitiveConfig,
    #[serde(default)]
    pub punctuation: PunctuationConfig,
    pub relations: RelationConfig,
    #[serde(default)]
    pub windows: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub subordinators: Vec<String>,
    #[serde(default)]
    pub relative_pronouns: Vec<String>,
    #[serde(default)]
    pub purpose_connectors: Vec<String>,
    #[serde(default)]
    pub uninflected_subordinators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinationConfig {
    pub coordinators: Vec<String>,
    #[serde(default)]
    pub comma_connectors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfinitiveConfig {
    pub particle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunctuationConfig {
    #[serde(default = "default_commas")]
    pub commas: Vec<String>,
}

impl Default for PunctuationConfig {
    fn default() -> Self {
        Self {
            commas: default_commas(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationConfig {
    pub conjunct: Vec<String>,
    pub subject: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_lookahead")]
    pub subordinator_lookahead: usize,
    #[serde(default = "default_lookahead")]
    pub purpose_lookahead: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            subordinator_lookahead: default_lookahead(),
            purpose_lookahead: default_lookahead(),
        }
    }
}

fn default_commas() -> Vec<String> {
    vec![",".to_string()]
}

fn default_lookahead() -> usize {
    9
}
