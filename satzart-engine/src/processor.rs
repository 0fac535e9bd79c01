//! Clause analyzer and builder
//!
//! A [`ClauseAnalyzer`] owns an initialised annotator and the classifier. It
//! is built once and then serves any number of requests.

use crate::{
    aggregator::Aggregator,
    analysis::DocumentAnalysis,
    annotator::Annotator,
    config::EngineConfig,
    document::AnnotatedDocument,
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};
use satzart_core::{Classifier, Lexicon, DEFAULT_LEXICON};
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Annotator plus classifier, ready to analyse documents
pub struct ClauseAnalyzer {
    annotator: Box<dyn Annotator>,
    aggregator: Aggregator,
    config: EngineConfig,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

impl std::fmt::Debug for ClauseAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClauseAnalyzer")
            .field("annotator", &self.annotator.name())
            .field("aggregator", &self.aggregator)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ClauseAnalyzer {
    /// Start building an analyzer
    pub fn builder() -> ClauseAnalyzerBuilder {
        ClauseAnalyzerBuilder::new()
    }

    /// Name of the annotator in use
    pub fn annotator_name(&self) -> &str {
        self.annotator.name()
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The classifier in use
    pub fn classifier(&self) -> &Classifier {
        self.aggregator.classifier()
    }

    /// Annotate and analyse raw text.
    ///
    /// Blank text yields an empty analysis without calling the annotator.
    pub fn analyze_text(&self, text: &str) -> Result<DocumentAnalysis> {
        if text.trim().is_empty() {
            log::debug!("blank input, nothing to annotate");
            return Ok(DocumentAnalysis::new());
        }
        let document = self.annotator.annotate(text)?;
        self.analyze_document(&document)
    }

    /// Analyse an annotated document with the configured execution mode
    pub fn analyze_document(&self, document: &AnnotatedDocument) -> Result<DocumentAnalysis> {
        self.analyze_with_mode(document, self.config.execution_mode)
    }

    /// Analyse an annotated document with a specific execution mode
    pub fn analyze_with_mode(
        &self,
        document: &AnnotatedDocument,
        mode: ExecutionMode,
    ) -> Result<DocumentAnalysis> {
        let mode = match mode {
            ExecutionMode::Adaptive => {
                let config = EngineConfig {
                    execution_mode: mode,
                    ..self.config.clone()
                };
                auto_select(document.len(), &config)
            }
            other => other,
        };

        let analysis = self.executor(mode).execute(document.sentences(), &self.aggregator)?;
        log::info!(
            "analysed {} sentences ({} mode, annotator {})",
            analysis.total(),
            mode,
            self.annotator.name()
        );
        Ok(analysis)
    }

    /// Analyse several texts independently.
    ///
    /// A failing text does not stop the batch; each text gets its own result.
    pub fn analyze_batch<I, S>(&self, texts: I) -> Vec<Result<DocumentAnalysis>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let result = self.analyze_text(text.as_ref());
                if let Err(e) = &result {
                    log::error!("request {} failed: {}", i + 1, e);
                }
                result
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn executor(&self, mode: ExecutionMode) -> &dyn Executor {
        match mode {
            ExecutionMode::Parallel => &self.parallel,
            _ => &SequentialExecutor,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn executor(&self, mode: ExecutionMode) -> &dyn Executor {
        if mode == ExecutionMode::Parallel {
            log::warn!("parallel execution not compiled in, running sequentially");
        }
        &SequentialExecutor
    }
}

/// Where the classifier's lexicon comes from
#[derive(Debug, Clone)]
enum LexiconSource {
    Embedded(String),
    File(PathBuf),
    Custom(Lexicon),
}

/// Builder for [`ClauseAnalyzer`]
pub struct ClauseAnalyzerBuilder {
    annotator: Option<Box<dyn Annotator>>,
    lexicon: LexiconSource,
    config: EngineConfig,
}

impl Default for ClauseAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseAnalyzerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            annotator: None,
            lexicon: LexiconSource::Embedded(DEFAULT_LEXICON.to_string()),
            config: EngineConfig::default(),
        }
    }

    /// Set the annotator
    pub fn annotator<A: Annotator + 'static>(mut self, annotator: A) -> Self {
        self.annotator = Some(Box::new(annotator));
        self
    }

    /// Set an already boxed annotator
    pub fn boxed_annotator(mut self, annotator: Box<dyn Annotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    /// Use an embedded lexicon by code
    pub fn lexicon<S: Into<String>>(mut self, code: S) -> Self {
        self.lexicon = LexiconSource::Embedded(code.into());
        self
    }

    /// Load the lexicon from a TOML file
    pub fn lexicon_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.lexicon = LexiconSource::File(path.into());
        self
    }

    /// Use an already built lexicon
    pub fn custom_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = LexiconSource::Custom(lexicon);
        self
    }

    /// Replace the whole engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Set the adaptive parallel threshold in sentences
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<ClauseAnalyzer> {
        let annotator = self
            .annotator
            .ok_or_else(|| EngineError::ConfigError("no annotator configured".into()))?;
        self.config.validate()?;

        let lexicon = match self.lexicon {
            LexiconSource::Embedded(code) => satzart_core::get_lexicon(&code)?.clone(),
            LexiconSource::File(path) => Lexicon::from_file(&path)?,
            LexiconSource::Custom(lexicon) => lexicon,
        };
        log::debug!("using lexicon '{}' ({})", lexicon.code(), lexicon.name());

        #[cfg(feature = "parallel")]
        let parallel = ParallelExecutor::new(self.config.threads)?;

        Ok(ClauseAnalyzer {
            annotator,
            aggregator: Aggregator::new(Classifier::new(Arc::new(lexicon))),
            config: self.config,
            #[cfg(feature = "parallel")]
            parallel,
        })
    }
}
