use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::config::DatabaseConnections;
use crate::types::dto::common::HealthResponse;
use chrono::Utc;

/// Health check API
pub struct HealthApi {
    connections: DatabaseConnections,
}

impl HealthApi {
    pub fn new(connections: DatabaseConnections) -> Self {
        Self { connections }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Pings both databases and reports "degraded" if either fails
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let audit_database = match self.connections.audit.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Audit database ping failed: {}", e);
                false
            }
        };
        let directory_database = match self.connections.directory.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Directory database ping failed: {}", e);
                false
            }
        };

        let status = if audit_database && directory_database {
            "healthy"
        } else {
            "degraded"
        };

        Json(HealthResponse {
            status: status.to_string(),
            audit_database,
            directory_database,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
