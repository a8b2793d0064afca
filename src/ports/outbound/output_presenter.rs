use crate::shared::Result;

/// OutputPresenter port for delivering a rendered report
///
/// The report arrives fully formatted; presenters only decide where it goes.
pub trait OutputPresenter {
    /// Writes the report to its destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, for example a
    /// missing parent directory or a symlinked output path.
    fn present(&self, content: &str) -> Result<()>;
}
