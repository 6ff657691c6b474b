use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// "healthy" when every database answers, "degraded" otherwise
    pub status: String,

    /// Whether the audit database answered a ping
    pub audit_database: bool,

    /// Whether the directory database answered a ping
    pub directory_database: bool,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Standardized error response model
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Message used by every listing response
pub fn listing_message(count: usize) -> String {
    if count == 0 {
        "Data not found".to_string()
    } else {
        "Data fetched successfully".to_string()
    }
}
