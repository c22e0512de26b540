//! Request validation error types.

/// A required input was absent from a generation request.
///
/// Raised before any external call is made, so the caller can surface it
/// as a blocking validation message.
///
/// # Examples
///
/// ```
/// use levelup_error::MissingInputError;
///
/// let err = MissingInputError::new("image reference is required");
/// assert!(format!("{}", err).contains("image reference"));
/// ```
#[derive(Debug, Clone)]
pub struct MissingInputError {
    /// Error message naming the missing input
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MissingInputError {
    /// Create a new MissingInputError at the current location.
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

impl std::fmt::Display for MissingInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Missing Input: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for MissingInputError {}
