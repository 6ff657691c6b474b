use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::InternalError;
use crate::types::db::{company, store_location};
use crate::types::internal::LookupKind;

/// Point lookups against the company/store directory
///
/// The directory belongs to another system; this side only reads it.
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    /// Display name for one entity
    ///
    /// `Ok(None)` when the id is unknown or the entity has no name.
    async fn lookup_name(&self, kind: LookupKind, id: i64) -> Result<Option<String>, InternalError>;
}

/// SeaORM-backed directory reader
pub struct DirectoryStore {
    db: DatabaseConnection,
}

impl DirectoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All companies ordered by name
    pub async fn list_companies(&self) -> Result<Vec<company::Model>, InternalError> {
        company::Entity::find()
            .order_by_asc(company::Column::CompanyName)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_companies", e))
    }

    /// Store locations of one company ordered by name
    pub async fn list_store_locations(
        &self,
        company_id: i64,
    ) -> Result<Vec<store_location::Model>, InternalError> {
        store_location::Entity::find()
            .filter(store_location::Column::CompanyId.eq(company_id))
            .order_by_asc(store_location::Column::StoreName)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_store_locations", e))
    }
}

#[async_trait]
impl DirectoryLookup for DirectoryStore {
    async fn lookup_name(&self, kind: LookupKind, id: i64) -> Result<Option<String>, InternalError> {
        match kind {
            LookupKind::Store => {
                let found = store_location::Entity::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(|e| InternalError::database("lookup_store_name", e))?;
                Ok(found.and_then(|model| model.store_name))
            }
            LookupKind::Company => {
                let found = company::Entity::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(|e| InternalError::database("lookup_company_name", e))?;
                Ok(found.and_then(|model| model.company_name))
            }
        }
    }
}
