use thiserror::Error;

/// Caller-correctable input problems
///
/// Always surfaced as a 400-class response. Never retried, never leaves state behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown functionalityname found: {0}")]
    UnknownFunctionality(String),

    #[error("Unknown eventtypename found: {event_type} (functionality: {functionality})")]
    UnknownEventType {
        functionality: String,
        event_type: String,
    },

    #[error("Invalid {field}: '{value}' is not a recognized date/time")]
    InvalidTimestamp { field: String, value: String },

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ValidationError {
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_timestamp(field: &str, value: &str) -> Self {
        ValidationError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
