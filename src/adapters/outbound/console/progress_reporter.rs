use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on stdout.
/// Conflicts and errors are colored when stderr is a terminal.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppresses plain progress lines; conflicts, errors and completion
    /// messages are still written
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_conflict(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    fn report_error(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.red())
        );
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.bold())
        );
    }
}
