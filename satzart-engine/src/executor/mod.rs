//! Execution strategies for document analysis

use crate::aggregator::Aggregator;
use crate::analysis::DocumentAnalysis;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use satzart_core::Sentence;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded, in document order
    Sequential,
    /// Contiguous slices classified on a rayon pool
    Parallel,
    /// Parallel for large documents on multi-core machines
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Mode name as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            "adaptive" => Ok(Self::Adaptive),
            other => Err(EngineError::ConfigError(format!(
                "unknown execution mode '{other}'"
            ))),
        }
    }
}

/// Strategy for classifying the sentences of one document
pub trait Executor: Send + Sync {
    /// Classify and aggregate sentences in document order
    fn execute(&self, sentences: &[Sentence], aggregator: &Aggregator)
        -> Result<DocumentAnalysis>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Resolve the mode actually used for a document of `sentence_count`
/// sentences
pub fn auto_select(sentence_count: usize, config: &EngineConfig) -> ExecutionMode {
    match config.execution_mode {
        ExecutionMode::Sequential => ExecutionMode::Sequential,
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => ExecutionMode::Parallel,
        #[cfg(feature = "parallel")]
        ExecutionMode::Adaptive => {
            let cpus = config.threads.unwrap_or_else(num_cpus::get);
            if sentence_count >= config.parallel_threshold && cpus > 1 {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Sequential
            }
        }
        #[cfg(not(feature = "parallel"))]
        _ => {
            let _ = sentence_count;
            ExecutionMode::Sequential
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Parallel".parse::<ExecutionMode>().unwrap(), ExecutionMode::Parallel);
        assert_eq!(
            "adaptive".parse::<ExecutionMode>().unwrap(),
            ExecutionMode::Adaptive
        );
        assert!("fast".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn test_auto_select_sequential_is_fixed() {
        let config = EngineConfig::sequential();
        assert_eq!(auto_select(1_000_000, &config), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_auto_select_adaptive() {
        let config = EngineConfig::builder()
            .parallel_threshold(100)
            .threads(Some(4))
            .build()
            .unwrap();
        assert_eq!(auto_select(99, &config), ExecutionMode::Sequential);
        assert_eq!(auto_select(100, &config), ExecutionMode::Parallel);

        let single = EngineConfig::builder()
            .parallel_threshold(1)
            .threads(Some(1))
            .build()
            .unwrap();
        assert_eq!(auto_select(1_000, &single), ExecutionMode::Sequential);
    }
}
