use crate::errors::internal::{CatalogError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};

const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// Client-visible error for the audit endpoints
#[derive(ApiResponse, Debug)]
pub enum AuditApiError {
    /// Request rejected by validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Missing or wrong API key
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuditApiError {
    pub fn validation_failed(message: String) -> Self {
        AuditApiError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message,
            status_code: 400,
        }))
    }

    pub fn unauthorized() -> Self {
        AuditApiError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message: "Invalid or missing API key".to_string(),
            status_code: 401,
        }))
    }

    pub fn internal_server_error() -> Self {
        AuditApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            status_code: 500,
        }))
    }

    /// Convert InternalError to AuditApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Validation problems keep their message; everything else is logged and
    /// replaced with a generic message.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Validation(validation) => {
                tracing::warn!("Request rejected: {}", validation);
                Self::validation_failed(validation.to_string())
            }
            InternalError::Database(_) => {
                tracing::error!("Persistence fault: {}", err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
            InternalError::Catalog(CatalogError::FunctionalityNotFound(name)) => {
                tracing::error!("Catalog lookup failed for functionality {}: {}", name, err);
                Self::internal_server_error()
            }
            InternalError::Catalog(_) => {
                tracing::error!("Catalog error: {}", err);
                Self::internal_server_error()
            }
            InternalError::Export(_) => {
                tracing::error!("Export failed: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> &str {
        match self {
            AuditApiError::ValidationFailed(json)
            | AuditApiError::Unauthorized(json)
            | AuditApiError::InternalError(json) => &json.0.message,
        }
    }

    /// Get the HTTP status code carried in the body
    pub fn status_code(&self) -> u16 {
        match self {
            AuditApiError::ValidationFailed(json)
            | AuditApiError::Unauthorized(json)
            | AuditApiError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for AuditApiError {
    fn from(err: InternalError) -> Self {
        AuditApiError::from_internal_error(err)
    }
}
