//! Analyze command implementation

use crate::config::{AnnotatorConfig, AnnotatorKind, CliConfig};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, Input};
use crate::output::{create_formatter, OutputFormat, OutputWriter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use satzart_engine::{
    Annotator, ClauseAnalyzer, CommandAnnotator, CommandConfig, ConlluAnnotator, ExecutionMode,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Printed when there is nothing to analyse
pub const USAGE_GUIDANCE: &str = "\
No text to analyse.

Pass CoNLL-U files with -i/--input (glob patterns are accepted) or pipe them
on standard input:

    satzart analyze -i 'korpus/*.conllu'
    cat roman.conllu | satzart analyze --json

Raw text needs an annotator program that writes CoNLL-U, configured with
--annotator or in the [annotator] section of a config file.";

/// Added to CoNLL-U errors when the input has no tab-separated token lines
pub const RAW_TEXT_HINT: &str = "\
The input looks like raw text, but the CoNLL-U reader expects tab-separated
token lines. Annotate it first with --annotator <PROGRAM> (see --help).";

/// Arguments for the analyze command
#[derive(Debug, Default, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob); standard input when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Treat input as CoNLL-U regardless of the configured annotator
    #[arg(long, conflicts_with = "annotator")]
    pub conllu: bool,

    /// External annotator program reading text and writing CoNLL-U
    #[arg(long, value_name = "PROGRAM")]
    pub annotator: Option<String>,

    /// Argument for the annotator program (repeatable)
    #[arg(long = "annotator-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub annotator_args: Vec<String>,

    /// Annotation model substituted for {model} in annotator arguments
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Execution mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of worker threads for parallel execution
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Lexicon file replacing the embedded German lexicon
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SATZART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Execution modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// One sentence after another
    Sequential,
    /// Sentences split across worker threads
    Parallel,
    /// Parallel for large documents only
    Adaptive,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => ExecutionMode::Sequential,
            ModeArg::Parallel => ExecutionMode::Parallel,
            ModeArg::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);
        let config = CliConfig::load_or_default(self.config.as_deref())?;

        let inputs = self.read_inputs()?;
        let mut writer = self.create_writer()?;
        if inputs.iter().all(|input| matches!(input, Ok(input) if input.is_blank())) {
            writeln!(writer, "{USAGE_GUIDANCE}")?;
            writer.flush()?;
            return Ok(());
        }

        let analyzer = self.build_analyzer(&config)?;
        log::info!(
            "analysing {} input(s) with the {} annotator",
            inputs.len(),
            analyzer.annotator_name()
        );

        let format = self.output_format(&config);
        let mut formatter =
            create_formatter(format, writer, config.output.pretty_json, inputs.len() > 1);

        let reads_conllu = self.reads_conllu(&config.annotator);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(inputs.len() as u64);

        let total = inputs.len();
        let mut failed = 0;
        for input in inputs {
            let outcome = input.and_then(|input| {
                let analysis = analyzer.analyze_text(&input.text).map_err(|e| {
                    let e = anyhow::Error::new(e)
                        .context(format!("Failed to analyse {}", input.source));
                    if reads_conllu && looks_like_raw_text(&input.text) {
                        anyhow::anyhow!("{e:#}\n{RAW_TEXT_HINT}")
                    } else {
                        e
                    }
                })?;
                formatter.format_analysis(&input.source, &analysis)?;
                progress.input_completed(&input.source);
                Ok(())
            });

            if let Err(e) = outcome {
                failed += 1;
                progress.suspend(|| log::error!("{e:#}"));
                if self.quiet {
                    eprintln!("Error: {e:#}");
                }
            }
        }

        progress.finish();
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::InputsFailed { failed, total }.into());
        }
        Ok(())
    }

    /// Output format from flags, falling back to the configuration
    pub fn output_format(&self, config: &CliConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.unwrap_or(config.output.format)
        }
    }

    /// Build the analyzer from flags and configuration
    pub fn build_analyzer(&self, config: &CliConfig) -> Result<ClauseAnalyzer> {
        let mut builder =
            ClauseAnalyzer::builder().boxed_annotator(self.build_annotator(&config.annotator)?);

        let mode = match self.mode {
            Some(mode) => Some(mode.into()),
            None => config.execution_mode()?,
        };
        if let Some(mode) = mode {
            builder = builder.execution_mode(mode);
        }
        if let Some(threads) = self.threads.or(config.processing.threads) {
            builder = builder.threads(Some(threads));
        }
        if let Some(threshold) = config.processing.parallel_threshold {
            builder = builder.parallel_threshold(threshold);
        }
        if let Some(lexicon) = self.lexicon.as_ref().or(config.processing.lexicon.as_ref()) {
            builder = builder.lexicon_file(lexicon);
        }

        builder.build().context("Failed to set up the analyzer")
    }

    /// True when inputs go through the CoNLL-U reader rather than a program
    fn reads_conllu(&self, config: &AnnotatorConfig) -> bool {
        self.conllu || (self.annotator.is_none() && config.kind == AnnotatorKind::Conllu)
    }

    fn build_annotator(&self, config: &AnnotatorConfig) -> Result<Box<dyn Annotator>> {
        if self.conllu {
            return Ok(Box::new(ConlluAnnotator::new()));
        }

        let program = match (&self.annotator, config.kind) {
            (Some(program), _) => program.clone(),
            (None, AnnotatorKind::Conllu) => return Ok(Box::new(ConlluAnnotator::new())),
            (None, AnnotatorKind::Command) => config.program.clone().ok_or_else(|| {
                CliError::ConfigError(
                    "annotator.program is required when annotator.kind = \"command\"".into(),
                )
            })?,
        };

        let mut command = CommandConfig::new(program);
        command.args = if self.annotator_args.is_empty() && self.annotator.is_none() {
            config.args.clone()
        } else {
            self.annotator_args.clone()
        };
        command.model = self.model.clone().or_else(|| config.model.clone());
        command.install_hint = config.install_hint.clone();

        let annotator = CommandAnnotator::new(command).context("Failed to start the annotator")?;
        Ok(Box::new(annotator))
    }

    fn read_inputs(&self) -> Result<Vec<Result<Input>>> {
        if self.input.is_empty() {
            return Ok(vec![Ok(FileReader::read_stdin()?)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::debug!("resolved {} input file(s)", files.len());
        Ok(files
            .iter()
            .map(|path| FileReader::read_input(path))
            .collect())
    }

    fn create_writer(&self) -> Result<OutputWriter> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// True when the first content line carries no tab, so it cannot be a token line
fn looks_like_raw_text(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .is_some_and(|line| !line.contains('\t'))
}
