// Test utilities shared across unit tests
// Only compiled when running tests

use async_trait::async_trait;
use migration::{AuditMigrator, DirectoryMigrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, Set};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::app_data::AppData;
use crate::config::{BootstrapSettings, DatabaseConnections, MockEnvironment};
use crate::errors::InternalError;
use crate::stores::{AuditStore, CatalogStore, DirectoryLookup};
use crate::types::db::{audit_event, company, store_location};
use crate::types::internal::{EventStatus, LookupKind};

/// Creates a migrated in-memory audit database
pub async fn setup_audit_db() -> DatabaseConnection {
    let audit_db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create audit database");

    AuditMigrator::up(&audit_db, None)
        .await
        .expect("Failed to run audit migrations");

    audit_db
}

/// Creates a migrated in-memory directory database
pub async fn setup_directory_db() -> DatabaseConnection {
    let directory_db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create directory database");

    DirectoryMigrator::up(&directory_db, None)
        .await
        .expect("Failed to run directory migrations");

    directory_db
}

/// Audit database with the standard catalog plus an `AuditStore` over it
///
/// Catalog: "Login" owns "Login/Login" and "Logout"; "Inventory" owns "Adjust"
/// and its own "Logout".
pub async fn setup_audit_store() -> (DatabaseConnection, Arc<CatalogStore>, Arc<AuditStore>) {
    let audit_db = setup_audit_db().await;
    let catalog_store = Arc::new(CatalogStore::new());

    seed_catalog(&audit_db, &catalog_store).await;

    let audit_store = Arc::new(AuditStore::new(audit_db.clone(), catalog_store.clone()));
    (audit_db, catalog_store, audit_store)
}

pub async fn seed_catalog(audit_db: &DatabaseConnection, catalog_store: &CatalogStore) {
    for functionality in ["Login", "Inventory"] {
        catalog_store
            .create_functionality(audit_db, functionality)
            .await
            .expect("Failed to create functionality");
    }

    for (functionality, event_type) in [
        ("Login", "Login/Login"),
        ("Login", "Logout"),
        ("Inventory", "Adjust"),
        ("Inventory", "Logout"),
    ] {
        catalog_store
            .create_event_type(audit_db, functionality, event_type)
            .await
            .expect("Failed to create event type");
    }
}

/// Directory with company 1 "Acme Foods" (stores 10 "Downtown", 11 "Airport")
/// and company 2 "Bolt Hardware" (store 20 with no name)
pub async fn seed_directory(directory_db: &DatabaseConnection) {
    for (company_id, company_name) in [(1, Some("Acme Foods")), (2, Some("Bolt Hardware"))] {
        company::ActiveModel {
            company_id: Set(company_id),
            company_name: Set(company_name.map(str::to_string)),
        }
        .insert(directory_db)
        .await
        .expect("Failed to seed company");
    }

    for (store_location_id, company_id, store_name) in [
        (10, 1, Some("Downtown")),
        (11, 1, Some("Airport")),
        (20, 2, None),
    ] {
        store_location::ActiveModel {
            store_location_id: Set(store_location_id),
            company_id: Set(company_id),
            store_name: Set(store_name.map(str::to_string)),
        }
        .insert(directory_db)
        .await
        .expect("Failed to seed store location");
    }
}

/// In-memory directory that records every lookup it serves
///
/// Ids listed in `failing` return a database error; ids in `slow` never answer
/// within any realistic timeout.
#[derive(Default)]
pub struct CountingDirectory {
    pub stores: HashMap<i64, String>,
    pub companies: HashMap<i64, String>,
    pub failing: Vec<i64>,
    pub slow: Vec<i64>,
    calls: Mutex<Vec<(LookupKind, i64)>>,
}

impl CountingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(mut self, id: i64, name: &str) -> Self {
        self.stores.insert(id, name.to_string());
        self
    }

    pub fn with_company(mut self, id: i64, name: &str) -> Self {
        self.companies.insert(id, name.to_string());
        self
    }

    pub fn with_failing(mut self, id: i64) -> Self {
        self.failing.push(id);
        self
    }

    pub fn with_slow(mut self, id: i64) -> Self {
        self.slow.push(id);
        self
    }

    pub fn calls(&self) -> Vec<(LookupKind, i64)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, kind: LookupKind) -> usize {
        self.calls().iter().filter(|(k, _)| *k == kind).count()
    }
}

#[async_trait]
impl DirectoryLookup for CountingDirectory {
    async fn lookup_name(&self, kind: LookupKind, id: i64) -> Result<Option<String>, InternalError> {
        self.calls.lock().unwrap().push((kind, id));

        if self.slow.contains(&id) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        if self.failing.contains(&id) {
            return Err(InternalError::database(
                "lookup_name",
                DbErr::Custom("directory unavailable".to_string()),
            ));
        }

        let names = match kind {
            LookupKind::Store => &self.stores,
            LookupKind::Company => &self.companies,
        };
        Ok(names.get(&id).cloned())
    }
}

/// Insert `count` "Login/Login" events for company 1 directly, one second apart
///
/// Bypasses `AuditStore::insert` so large fixtures stay fast.
pub async fn bulk_insert_login_events(audit_db: &DatabaseConnection, count: u64) {
    let catalog_store = CatalogStore::new();
    let functionality_id = catalog_store
        .resolve_functionality(audit_db, "Login")
        .await
        .expect("Failed to resolve functionality")
        .expect("Login functionality missing");
    let event_type_id = catalog_store
        .resolve_event_type(audit_db, functionality_id, "Login/Login")
        .await
        .expect("Failed to resolve event type")
        .expect("Login/Login event type missing");

    let start = chrono::NaiveDate::from_ymd_opt(2025, 4, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid start");

    let rows: Vec<audit_event::ActiveModel> = (0..count)
        .map(|n| audit_event::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            event_timestamp: Set(start + chrono::Duration::seconds(n as i64)),
            functionality_id: Set(functionality_id),
            event_type_id: Set(event_type_id),
            store_location_id: Set(None),
            company_id: Set(1),
            username: Set("load".to_string()),
            message: Set(format!("bulk event {}", n)),
            status: Set(EventStatus::Success),
            additional_data: Set(None),
        })
        .collect();

    for chunk in rows.chunks(500) {
        audit_event::Entity::insert_many(chunk.to_vec())
            .exec(audit_db)
            .await
            .expect("Failed to bulk insert audit events");
    }
}

pub const TEST_API_KEY: &str = "test-api-key-0123456789";

/// Bootstrap settings with the test API key and a short lookup timeout
pub fn test_bootstrap_settings() -> BootstrapSettings {
    let env = MockEnvironment::empty()
        .with_var("AUDIT_API_KEY", TEST_API_KEY)
        .with_var("DIRECTORY_LOOKUP_TIMEOUT_MS", "500");

    BootstrapSettings::from_env_provider(Arc::new(env)).expect("Failed to build test settings")
}

/// Full AppData over seeded in-memory audit and directory databases
pub async fn setup_app_data() -> Arc<AppData> {
    let audit_db = setup_audit_db().await;
    seed_catalog(&audit_db, &CatalogStore::new()).await;

    let directory_db = setup_directory_db().await;
    seed_directory(&directory_db).await;

    let connections = DatabaseConnections {
        audit: audit_db,
        directory: directory_db,
    };

    Arc::new(AppData::init(connections, &test_bootstrap_settings()))
}
