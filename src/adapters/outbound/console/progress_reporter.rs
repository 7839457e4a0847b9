use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter writing progress messages to stderr,
/// keeping stdout free for the formatted BOM itself.
#[derive(Debug, Default)]
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", message);
    }
}
