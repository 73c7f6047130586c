//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for script files and session events
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

    /// Initialize a bar over `total` items called `unit`
    pub fn start(&mut self, total: u64, unit: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} {{msg}}");
        match ProgressStyle::default_bar().template(&template) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::warn!("Falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record one finished item
    pub fn tick(&self, message: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(message.to_string());
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start(3, "files");
        assert!(!reporter.is_active());
        reporter.tick("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_reporter_counts_ticks() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start(2, "events");
        reporter.tick("transcript");
        reporter.tick("advance");
        assert_eq!(reporter.progress_bar.as_ref().unwrap().position(), 2);
        reporter.finish();
    }
}
