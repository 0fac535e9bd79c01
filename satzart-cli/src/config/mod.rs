//! Configuration module
//!
//! The CLI reads an optional TOML file given with `--config` or the
//! `SATZART_CONFIG` environment variable. Command-line flags override the
//! values found there. Relative paths in the file are resolved against the
//! directory that contains it.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use satzart_engine::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Annotator configuration
    #[serde(default)]
    pub annotator: AnnotatorConfig,

    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// How raw input is annotated
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnnotatorKind {
    /// Input is already CoNLL-U
    #[default]
    Conllu,
    /// Input is raw text piped through an external program
    Command,
}

/// Annotator-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotatorConfig {
    /// Annotator kind
    pub kind: AnnotatorKind,

    /// Program for `kind = "command"`
    pub program: Option<String>,

    /// Program arguments; `{model}` is replaced by the model path
    pub args: Vec<String>,

    /// Model file or directory
    pub model: Option<PathBuf>,

    /// Shown when the program or model is missing
    pub install_hint: Option<String>,
}

/// Processing-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Execution mode: sequential, parallel or adaptive
    pub mode: Option<String>,

    /// Number of worker threads
    pub threads: Option<usize>,

    /// Minimum sentence count for adaptive parallel execution
    pub parallel_threshold: Option<usize>,

    /// Lexicon file replacing the embedded German lexicon
    pub lexicon: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file, resolving relative paths against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the given file, or the defaults when there is none
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Execution mode from the processing section
    pub fn execution_mode(&self) -> Result<Option<ExecutionMode>> {
        self.processing
            .mode
            .as_deref()
            .map(|mode| {
                mode.parse::<ExecutionMode>()
                    .map_err(|e| anyhow::Error::from(CliError::ConfigError(e.to_string())))
            })
            .transpose()
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        if let Some(model) = self.annotator.model.as_mut() {
            resolve(model);
        }
        if let Some(lexicon) = self.processing.lexicon.as_mut() {
            resolve(lexicon);
        }
    }
}
