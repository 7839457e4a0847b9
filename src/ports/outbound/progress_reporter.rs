/// ProgressReporter port for reporting progress during operations.
///
/// This port abstracts user feedback (e.g. to stderr) so the core and
/// use cases stay free of I/O.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
