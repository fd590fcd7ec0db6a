/// ProgressReporter port for reporting progress during reconciliation
///
/// This port abstracts user-facing progress output (e.g., to stderr)
/// so conflicts and fix attempts are visible while they happen.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a detected conflict
    ///
    /// Defaults to a plain progress message; console adapters highlight it.
    fn report_conflict(&self, message: &str) {
        self.report(message);
    }

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_conflict(&self, message: &str) {
        (**self).report_conflict(message);
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
