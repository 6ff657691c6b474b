use crate::config::{migrate_audit_database, migrate_directory_database, DatabaseConnections};

/// Run database migrations
///
/// The audit database is always migrated. The directory tables are only
/// created when `with_directory` is set, since production reads a directory
/// owned by another system.
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(...)` - Migration failed
pub async fn run_migrations(
    connections: &DatabaseConnections,
    with_directory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Migrating audit database...");
    migrate_audit_database(&connections.audit).await?;

    if with_directory {
        tracing::info!("Migrating directory database...");
        migrate_directory_database(&connections.directory).await?;
    }

    tracing::info!("All migrations completed successfully");

    Ok(())
}
