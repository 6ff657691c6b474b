use chrono::NaiveDateTime;

use crate::errors::internal::ValidationError;

/// Acknowledgement for a stored event
#[derive(Debug, Clone, PartialEq)]
pub struct InsertAck {
    pub id: i64,
    /// Canonical civil time as stored
    pub event_timestamp: NaiveDateTime,
}

/// Result of an ingestion attempt that reached the store
///
/// Rejections are values, not errors: nothing was written and the caller
/// should answer 400. Infrastructure faults travel as `InternalError` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    Created(InsertAck),
    Rejected(ValidationError),
}
