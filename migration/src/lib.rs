pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_audit_catalog;
mod m20250301_000002_create_audit_events;
mod m20250301_000003_create_audit_events_archival;
mod m20250301_000004_create_directory_tables;

pub struct AuditMigrator;

#[async_trait::async_trait]
impl MigratorTrait for AuditMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_audit_catalog::Migration),
            Box::new(m20250301_000002_create_audit_events::Migration),
            Box::new(m20250301_000003_create_audit_events_archival::Migration),
        ]
    }
}

/// Read-model tables for the company/store directory.
///
/// The production directory is owned by another system; this migrator only
/// exists so local development and tests have something to point at.
pub struct DirectoryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for DirectoryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000004_create_directory_tables::Migration),
        ]
    }
}
