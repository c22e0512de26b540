//! Output schema validation error types.

/// Specific error conditions for schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaErrorKind {
    /// A required input field was absent when rendering a template
    MissingField {
        /// Template name
        template: String,
        /// Field name
        field: String,
    },
    /// The response contained no JSON payload to parse
    NoJsonPayload(String),
    /// The extracted payload was not parseable JSON
    UnparseableJson(String),
    /// The parsed JSON did not match the declared output record
    WrongShape {
        /// Template name
        template: String,
        /// Deserialization error message
        message: String,
    },
}

impl std::fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaErrorKind::MissingField { template, field } => write!(
                f,
                "Input field '{}' required by template '{}' is missing",
                field, template
            ),
            SchemaErrorKind::NoJsonPayload(msg) => {
                write!(f, "Response contains no JSON payload: {}", msg)
            }
            SchemaErrorKind::UnparseableJson(msg) => {
                write!(f, "Failed to parse JSON payload: {}", msg)
            }
            SchemaErrorKind::WrongShape { template, message } => write!(
                f,
                "Response does not match output schema for '{}': {}",
                template, message
            ),
        }
    }
}

/// Schema validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use levelup_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::MissingField {
///     template: "generate_layout".to_string(),
///     field: "theme".to_string(),
/// });
/// assert!(format!("{}", err).contains("theme"));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// The specific error condition
    pub kind: SchemaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schema Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for SchemaError {}
