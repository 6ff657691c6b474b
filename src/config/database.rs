use migration::{AuditMigrator, DirectoryMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Connection pools owned by the process
///
/// Created once at startup, handed to the stores through `AppData` and closed
/// by `close()` on shutdown.
#[derive(Clone)]
pub struct DatabaseConnections {
    pub audit: DatabaseConnection,
    pub directory: DatabaseConnection,
}

impl DatabaseConnections {
    /// Connect to the audit store and the company/store directory
    ///
    /// Does NOT run migrations - call `migrate()` separately.
    pub async fn init(bootstrap_settings: &BootstrapSettings) -> Result<Self, InternalError> {
        let audit = Self::connect("connect_audit_database", bootstrap_settings.audit_database_url()).await?;
        tracing::debug!("Connected to audit database");

        let directory = Self::connect("connect_directory_database", bootstrap_settings.directory_database_url()).await?;
        tracing::debug!("Connected to directory database");

        Ok(Self { audit, directory })
    }

    async fn connect(operation: &str, url: &str) -> Result<DatabaseConnection, InternalError> {
        Database::connect(url)
            .await
            .map_err(|e| InternalError::database(operation, e))
    }

    /// Run pending migrations on the audit database only
    ///
    /// The directory belongs to another system and is never migrated from here
    /// outside of local development.
    pub async fn migrate(&self) -> Result<(), InternalError> {
        migrate_audit_database(&self.audit).await
    }

    /// Close both pools
    pub async fn close(self) -> Result<(), InternalError> {
        self.audit
            .close()
            .await
            .map_err(|e| InternalError::database("close_audit_database", e))?;
        self.directory
            .close()
            .await
            .map_err(|e| InternalError::database("close_directory_database", e))?;

        tracing::debug!("Database connections closed");

        Ok(())
    }
}

/// Run migrations on the audit database
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_audit_database(audit_db: &DatabaseConnection) -> Result<(), InternalError> {
    AuditMigrator::up(audit_db, None)
        .await
        .map_err(|e| InternalError::database("run_audit_migrations", e))?;

    tracing::debug!("Audit database migrations completed");

    Ok(())
}

/// Create the directory read-model tables (local development only)
pub async fn migrate_directory_database(directory_db: &DatabaseConnection) -> Result<(), InternalError> {
    DirectoryMigrator::up(directory_db, None)
        .await
        .map_err(|e| InternalError::database("run_directory_migrations", e))?;

    tracing::debug!("Directory database migrations completed");

    Ok(())
}
