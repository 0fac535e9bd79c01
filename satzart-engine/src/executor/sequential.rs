//! Sequential execution strategy

use crate::{
    aggregator::Aggregator,
    analysis::DocumentAnalysis,
    error::Result,
    executor::{ExecutionMode, Executor},
};
use satzart_core::Sentence;

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        sentences: &[Sentence],
        aggregator: &Aggregator,
    ) -> Result<DocumentAnalysis> {
        Ok(aggregator.aggregate(sentences))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
