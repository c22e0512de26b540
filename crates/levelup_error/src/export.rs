//! Export packaging error types.

/// A local packaging step failed (file write or zip assembly).
///
/// Export failures are transient and retryable from the caller's point of
/// view; the already-produced artifact is unaffected.
#[derive(Debug, Clone)]
pub struct ExportError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelup_error::ExportError;
    ///
    /// let err = ExportError::new("failed to create level.zip");
    /// assert!(format!("{}", err).contains("level.zip"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Export Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ExportError {}
