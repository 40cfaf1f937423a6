use thiserror::Error;

/// Validation errors for event fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or only whitespace.
    #[error("{field} must not be blank")]
    Blank {
        /// Field name that failed validation.
        field: &'static str,
    },
    /// A timestamp could not be parsed as RFC 3339.
    #[error("timestamp '{value}' is not valid RFC 3339: {reason}")]
    InvalidTimestamp {
        /// Offending value.
        value: String,
        /// Parser message.
        reason: String,
    },
}
