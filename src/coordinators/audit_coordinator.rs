use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::services::{ExportDocument, ExportFormatter, ExportRequest, QueryEngine};
use crate::stores::{AuditStore, CatalogStore, DirectoryStore};
use crate::types::db::{company, event_type, functionality, store_location};
use crate::types::internal::{
    AuditEventCreate, IngestOutcome, InsertAck, RawSearchParams, RecentPage, SearchCriteria,
    SearchPage,
};

/// Audit coordinator that orchestrates the audit event endpoints
///
/// Turns transport input into core calls and core outcomes into
/// `InternalError` where the API must answer with an error.
pub struct AuditCoordinator {
    audit_db: DatabaseConnection,
    catalog_store: Arc<CatalogStore>,
    audit_store: Arc<AuditStore>,
    directory_store: Arc<DirectoryStore>,
    query_engine: Arc<QueryEngine>,
    exporter: Arc<dyn ExportFormatter>,
}

impl AuditCoordinator {
    /// Create AuditCoordinator from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            audit_db: app_data.connections.audit.clone(),
            catalog_store: app_data.catalog_store.clone(),
            audit_store: app_data.audit_store.clone(),
            directory_store: app_data.directory_store.clone(),
            query_engine: app_data.query_engine.clone(),
            exporter: app_data.exporter.clone(),
        }
    }

    /// Store one event
    ///
    /// # Returns
    /// * `Ok(InsertAck)` - Event committed
    /// * `Err(InternalError::Validation)` - Rejected, nothing written
    /// * `Err(InternalError)` - Persistence fault
    pub async fn create_event(&self, event: AuditEventCreate) -> Result<InsertAck, InternalError> {
        match self.audit_store.insert(event).await? {
            IngestOutcome::Created(ack) => Ok(ack),
            IngestOutcome::Rejected(rejection) => Err(rejection.into()),
        }
    }

    /// Validate raw parameters and run the search
    pub async fn search(&self, params: RawSearchParams) -> Result<SearchPage, InternalError> {
        let criteria = SearchCriteria::from_raw(params)?;
        self.query_engine.search(&criteria).await
    }

    pub async fn recent(&self) -> Result<RecentPage, InternalError> {
        self.query_engine.recent().await
    }

    /// Export the recent window, or a search page when `recent` is false
    pub async fn export(&self, params: RawSearchParams, recent: bool) -> Result<ExportDocument, InternalError> {
        let request = if recent {
            ExportRequest::Recent
        } else {
            ExportRequest::Search(SearchCriteria::from_raw(params)?)
        };

        self.query_engine.export(&request, self.exporter.as_ref()).await
    }

    pub async fn list_functionalities(&self) -> Result<Vec<functionality::Model>, InternalError> {
        self.catalog_store.list_functionalities(&self.audit_db).await
    }

    pub async fn list_event_types(&self, functionality_name: &str) -> Result<Vec<event_type::Model>, InternalError> {
        self.catalog_store
            .list_event_types(&self.audit_db, functionality_name)
            .await
    }

    pub async fn list_companies(&self) -> Result<Vec<company::Model>, InternalError> {
        self.directory_store.list_companies().await
    }

    pub async fn list_store_locations(&self, company_id: i64) -> Result<Vec<store_location::Model>, InternalError> {
        self.directory_store.list_store_locations(company_id).await
    }
}
