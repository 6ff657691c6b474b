use thiserror::Error;

pub mod catalog;
pub mod database;
pub mod export;
pub mod validation;

pub use catalog::CatalogError;
pub use database::DatabaseError;
pub use export::ExportError;
pub use validation::ValidationError;

/// Internal error type for store and service operations
///
/// Infrastructure errors (database, parse) are shared; domain errors are grouped
/// per component. Not exposed via API - endpoints convert to `AuditApiError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn transaction_begin(source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::TransactionBegin { source })
    }

    pub fn transaction_commit(source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::TransactionCommit { source })
    }

    pub fn parse(value_type: &str, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.to_string(),
            message: message.into(),
        }
    }
}
