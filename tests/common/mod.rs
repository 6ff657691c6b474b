// Common test utilities for integration tests

use migration::{AuditMigrator, DirectoryMigrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use std::sync::Arc;
use std::time::Duration;
use storeaudit_backend::services::QueryEngine;
use storeaudit_backend::stores::{AuditStore, CatalogStore, DirectoryLookup, DirectoryStore};
use storeaudit_backend::types::db::{company, store_location};
use storeaudit_backend::types::internal::AuditEventCreate;

pub struct TestContext {
    pub audit_db: DatabaseConnection,
    pub catalog_store: Arc<CatalogStore>,
    pub audit_store: Arc<AuditStore>,
    pub query_engine: QueryEngine,
}

/// Creates a test audit database with migrations applied
pub async fn setup_test_audit_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create audit database");

    AuditMigrator::up(&db, None)
        .await
        .expect("Failed to run audit migrations");

    db
}

/// Creates a test directory database with one company and one store
pub async fn setup_test_directory_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create directory database");

    DirectoryMigrator::up(&db, None)
        .await
        .expect("Failed to run directory migrations");

    company::ActiveModel {
        company_id: Set(1),
        company_name: Set(Some("Acme Foods".to_string())),
    }
    .insert(&db)
    .await
    .expect("Failed to insert company");

    store_location::ActiveModel {
        store_location_id: Set(10),
        company_id: Set(1),
        store_name: Set(Some("Downtown".to_string())),
    }
    .insert(&db)
    .await
    .expect("Failed to insert store location");

    db
}

/// Full store + query stack over fresh databases, catalog holds Login / Login/Login
pub async fn setup_test_context() -> TestContext {
    let audit_db = setup_test_audit_db().await;
    let directory_db = setup_test_directory_db().await;

    let catalog_store = Arc::new(CatalogStore::new());
    catalog_store
        .create_functionality(&audit_db, "Login")
        .await
        .expect("Failed to create functionality");
    catalog_store
        .create_event_type(&audit_db, "Login", "Login/Login")
        .await
        .expect("Failed to create event type");

    let audit_store = Arc::new(AuditStore::new(audit_db.clone(), catalog_store.clone()));
    let directory: Arc<dyn DirectoryLookup> = Arc::new(DirectoryStore::new(directory_db));
    let query_engine = QueryEngine::new(audit_store.clone(), directory, Duration::from_millis(500));

    TestContext {
        audit_db,
        catalog_store,
        audit_store,
        query_engine,
    }
}

pub fn login_event(event_timestamp: &str, user_name: &str) -> AuditEventCreate {
    AuditEventCreate {
        event_timestamp: event_timestamp.to_string(),
        functionality: "Login".to_string(),
        event_type: "Login/Login".to_string(),
        store_location_id: Some(10),
        company_id: 1,
        user_name: user_name.to_string(),
        message: "signed in".to_string(),
        status: None,
        additional_data: None,
    }
}
