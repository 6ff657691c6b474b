use poem_openapi::param::Query;
use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};
use std::sync::Arc;

use crate::coordinators::AuditCoordinator;
use crate::errors::AuditApiError;
use crate::types::dto::catalog::{EventTypeListResponse, FunctionalityListResponse};
use crate::types::dto::directory::{CompanyListResponse, StoreLocationListResponse};

/// Catalog and directory listings used to build search filters
pub struct ReferenceApi {
    audit_coordinator: Arc<AuditCoordinator>,
}

impl ReferenceApi {
    pub fn new(audit_coordinator: Arc<AuditCoordinator>) -> Self {
        Self { audit_coordinator }
    }
}

#[derive(Tags)]
enum ReferenceTags {
    /// Functionalities and event types
    Catalog,
    /// Companies and store locations
    Directory,
}

#[OpenApi(prefix_path = "/audit-events")]
impl ReferenceApi {
    /// All functionalities, ordered by id
    #[oai(path = "/functionalities", method = "get", tag = "ReferenceTags::Catalog")]
    async fn functionalities(&self) -> Result<Json<FunctionalityListResponse>, AuditApiError> {
        let functionalities = self
            .audit_coordinator
            .list_functionalities()
            .await
            .map_err(AuditApiError::from_internal_error)?;

        Ok(Json(functionalities.into()))
    }

    /// Event types of one functionality, ordered by id
    #[oai(path = "/event-types", method = "get", tag = "ReferenceTags::Catalog")]
    async fn event_types(
        &self,
        functionality: Query<String>,
    ) -> Result<Json<EventTypeListResponse>, AuditApiError> {
        let event_types = self
            .audit_coordinator
            .list_event_types(&functionality.0)
            .await
            .map_err(AuditApiError::from_internal_error)?;

        Ok(Json(event_types.into()))
    }

    /// All companies, ordered by name
    #[oai(path = "/companies", method = "get", tag = "ReferenceTags::Directory")]
    async fn companies(&self) -> Result<Json<CompanyListResponse>, AuditApiError> {
        let companies = self
            .audit_coordinator
            .list_companies()
            .await
            .map_err(AuditApiError::from_internal_error)?;

        Ok(Json(companies.into()))
    }

    /// Store locations of one company, ordered by name
    #[oai(path = "/store-locations", method = "get", tag = "ReferenceTags::Directory")]
    async fn store_locations(
        &self,
        company_id: Query<i64>,
    ) -> Result<Json<StoreLocationListResponse>, AuditApiError> {
        let store_locations = self
            .audit_coordinator
            .list_store_locations(company_id.0)
            .await
            .map_err(AuditApiError::from_internal_error)?;

        Ok(Json(store_locations.into()))
    }
}
