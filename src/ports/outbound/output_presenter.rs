use crate::shared::Result;

/// OutputPresenter port for delivering the formatted document.
pub trait OutputPresenter {
    /// Presents the formatted output (stdout, a file, ...).
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
