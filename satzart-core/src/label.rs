//! Clause labels and per-sentence classification results

use crate::marker_set::MarkerSet;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sentence-level clause type.
///
/// Variants are declared in report order, which is also their `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseLabel {
    /// Main clause with at least one subordinate clause
    Hypotaxis,
    /// Coordinated main clauses
    Parataxis,
    /// Single declarative main clause
    MainClause,
    /// Infinitive construction
    InfinitiveClause,
    /// Question
    Interrogative,
    /// Command or request
    Imperative,
    /// Exclamation
    Exclamative,
    /// Fragment without a finite verb
    Ellipsis,
}

impl ClauseLabel {
    /// All labels in report order
    pub const ALL: [ClauseLabel; 8] = [
        Self::Hypotaxis,
        Self::Parataxis,
        Self::MainClause,
        Self::InfinitiveClause,
        Self::Interrogative,
        Self::Imperative,
        Self::Exclamative,
        Self::Ellipsis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hypotaxis => "Hypotaxis",
            Self::Parataxis => "Parataxis",
            Self::MainClause => "MainClause",
            Self::InfinitiveClause => "InfinitiveClause",
            Self::Interrogative => "Interrogative",
            Self::Imperative => "Imperative",
            Self::Exclamative => "Exclamative",
            Self::Ellipsis => "Ellipsis",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hypotaxis => "main clause with subordinate clause(s)",
            Self::Parataxis => "coordinated main clauses",
            Self::MainClause => "single main clause",
            Self::InfinitiveClause => "infinitive construction",
            Self::Interrogative => "question",
            Self::Imperative => "command or request",
            Self::Exclamative => "exclamation",
            Self::Ellipsis => "fragment without finite verb",
        }
    }
}

impl fmt::Display for ClauseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClauseLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown clause label: {s}"))
    }
}

impl Serialize for ClauseLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of classifying one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub label: ClauseLabel,
    pub markers: MarkerSet,
    /// Name of the cascade rule that fired
    pub rule: &'static str,
}

impl Classification {
    pub fn new(label: ClauseLabel, markers: MarkerSet, rule: &'static str) -> Self {
        Self {
            label,
            markers,
            rule,
        }
    }
}
