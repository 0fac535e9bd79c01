//! Parallel execution strategy
//!
//! Non-blank sentences are split into contiguous slices. Each worker
//! aggregates its slice into a partial analysis; the partials are merged in
//! slice order, which renumbers the sentences by document position.

use crate::{
    aggregator::Aggregator,
    analysis::DocumentAnalysis,
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use rayon::prelude::*;
use satzart_core::Sentence;
use std::sync::Arc;

/// Slices per worker thread, for load balancing
const SLICES_PER_THREAD: usize = 4;

/// Parallel multi-threaded executor
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl ParallelExecutor {
    /// Create an executor on the global rayon pool, or on a dedicated pool
    /// when a thread count is given
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?,
            )),
            None => None,
        };
        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map(|pool| pool.current_num_threads())
            .unwrap_or_else(rayon::current_num_threads)
    }

    fn slice_len(&self, count: usize) -> usize {
        let slices = self.threads().max(1) * SLICES_PER_THREAD;
        count.div_ceil(slices).max(1)
    }

    fn process_parallel(&self, sentences: &[Sentence], aggregator: &Aggregator) -> DocumentAnalysis {
        let non_blank: Vec<&Sentence> = sentences.iter().filter(|s| !s.is_blank()).collect();
        let slice_len = self.slice_len(non_blank.len());
        log::debug!(
            "classifying {} sentences in slices of {} on {} threads",
            non_blank.len(),
            slice_len,
            self.threads()
        );

        let partials: Vec<DocumentAnalysis> = non_blank
            .par_chunks(slice_len)
            .map(|slice| aggregator.aggregate(slice.iter().copied()))
            .collect();

        partials
            .into_iter()
            .fold(DocumentAnalysis::new(), |mut analysis, partial| {
                analysis.merge(partial);
                analysis
            })
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        sentences: &[Sentence],
        aggregator: &Aggregator,
    ) -> Result<DocumentAnalysis> {
        Ok(match &self.pool {
            Some(pool) => pool.install(|| self.process_parallel(sentences, aggregator)),
            None => self.process_parallel(sentences, aggregator),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
