//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-input batches
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar; nothing is shown for a single input
    pub fn init_inputs(&mut self, total_inputs: u64) {
        if self.quiet || total_inputs < 2 {
            return;
        }

        let pb = ProgressBar::new(total_inputs);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} inputs {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed input
    pub fn input_completed(&self, source: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Analysed: {source}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Run `f` with the bar hidden so log lines do not tear it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.progress_bar {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_stays_inactive() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_inputs(10);
        assert!(reporter.progress_bar.is_none());
        reporter.input_completed("a.conllu");
        assert_eq!(reporter.suspend(|| "logged"), "logged");
        reporter.finish();
    }

    #[test]
    fn test_single_input_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_inputs(1);
        assert!(reporter.progress_bar.is_none());
    }

    #[test]
    fn test_batch_progress() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_inputs(2);
        assert!(reporter.progress_bar.is_some());
        reporter.input_completed("a.conllu");
        assert_eq!(reporter.suspend(|| 7), 7);
        reporter.input_completed("b.conllu");
        reporter.finish();
    }
}
