use std::sync::Arc;

use crate::config::{BootstrapSettings, DatabaseConnections};
use crate::services::{ExportFormatter, QueryEngine, XlsxExporter};
use crate::stores::{AuditStore, CatalogStore, DirectoryLookup, DirectoryStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across coordinators.
///
/// # Architecture
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ↓ creates once
///   ├─ connections (audit + directory DatabaseConnection)
///   ├─ catalog_store (Arc<CatalogStore>)
///   ├─ audit_store (Arc<AuditStore>)         uses catalog_store
///   ├─ directory_store (Arc<DirectoryStore>)
///   ├─ query_engine (Arc<QueryEngine>)       uses audit_store + directory_store
///   └─ exporter (Arc<dyn ExportFormatter>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to coordinators
///   └─ AuditCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub connections: DatabaseConnections,
    pub catalog_store: Arc<CatalogStore>,
    pub audit_store: Arc<AuditStore>,
    pub directory_store: Arc<DirectoryStore>,
    pub query_engine: Arc<QueryEngine>,
    pub exporter: Arc<dyn ExportFormatter>,
}

impl AppData {
    /// Build every store and service over already-open connections
    ///
    /// Migrations should have run before calling this.
    pub fn init(connections: DatabaseConnections, bootstrap_settings: &BootstrapSettings) -> Self {
        tracing::info!("Initializing AppData...");

        let catalog_store = Arc::new(CatalogStore::new());
        let audit_store = Arc::new(AuditStore::new(
            connections.audit.clone(),
            catalog_store.clone(),
        ));
        let directory_store = Arc::new(DirectoryStore::new(connections.directory.clone()));

        let directory: Arc<dyn DirectoryLookup> = directory_store.clone();
        let query_engine = Arc::new(QueryEngine::new(
            audit_store.clone(),
            directory,
            bootstrap_settings.directory_lookup_timeout(),
        ));

        tracing::info!("AppData initialization complete");

        Self {
            connections,
            catalog_store,
            audit_store,
            directory_store,
            query_engine,
            exporter: Arc::new(XlsxExporter),
        }
    }
}
