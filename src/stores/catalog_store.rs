use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::errors::internal::CatalogError;
use crate::types::db::{event_type, functionality};

/// CatalogStore resolves and maintains functionality / event type names
///
/// Methods take the connection so resolution can run inside the caller's
/// ingestion transaction. Lookups return `None` on a miss; translating a miss
/// into a rejection is the caller's job.
pub struct CatalogStore {}

impl CatalogStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Resolve a functionality name to its id
    ///
    /// # Returns
    /// * `Ok(Some(id))` - Name is in the catalog
    /// * `Ok(None)` - Unknown name
    /// * `Err(InternalError)` - Database error
    pub async fn resolve_functionality(
        &self,
        conn: &impl ConnectionTrait,
        name: &str,
    ) -> Result<Option<i32>, InternalError> {
        let found = functionality::Entity::find()
            .filter(functionality::Column::Name.eq(name))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("resolve_functionality", e))?;

        Ok(found.map(|model| model.functionality_id))
    }

    /// Resolve an event type name within one functionality
    ///
    /// The same name may exist under several functionalities, so the lookup is
    /// always scoped.
    pub async fn resolve_event_type(
        &self,
        conn: &impl ConnectionTrait,
        functionality_id: i32,
        name: &str,
    ) -> Result<Option<i32>, InternalError> {
        let found = event_type::Entity::find()
            .filter(event_type::Column::FunctionalityId.eq(functionality_id))
            .filter(event_type::Column::Name.eq(name))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("resolve_event_type", e))?;

        Ok(found.map(|model| model.event_type_id))
    }

    /// List every functionality ordered by id
    pub async fn list_functionalities(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<functionality::Model>, InternalError> {
        functionality::Entity::find()
            .order_by_asc(functionality::Column::FunctionalityId)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_functionalities", e))
    }

    /// List the event types of a functionality ordered by id
    ///
    /// An unknown functionality yields an empty list.
    pub async fn list_event_types(
        &self,
        conn: &impl ConnectionTrait,
        functionality_name: &str,
    ) -> Result<Vec<event_type::Model>, InternalError> {
        let Some(functionality_id) = self.resolve_functionality(conn, functionality_name).await? else {
            return Ok(Vec::new());
        };

        event_type::Entity::find()
            .filter(event_type::Column::FunctionalityId.eq(functionality_id))
            .order_by_asc(event_type::Column::EventTypeId)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_event_types", e))
    }

    /// Append a functionality to the catalog
    ///
    /// # Errors
    /// * `CatalogError::DuplicateFunctionality` - Name already present
    pub async fn create_functionality(
        &self,
        conn: &impl ConnectionTrait,
        name: &str,
    ) -> Result<functionality::Model, InternalError> {
        if self.resolve_functionality(conn, name).await?.is_some() {
            return Err(CatalogError::DuplicateFunctionality(name.to_string()).into());
        }

        let model = functionality::ActiveModel {
            functionality_id: sea_orm::ActiveValue::NotSet,
            name: Set(name.to_string()),
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_functionality", e))?;

        tracing::info!(functionality_id = model.functionality_id, "Created functionality {}", name);

        Ok(model)
    }

    /// Append an event type under an existing functionality
    ///
    /// # Errors
    /// * `CatalogError::FunctionalityNotFound` - Parent functionality unknown
    /// * `CatalogError::DuplicateEventType` - Pair already present
    pub async fn create_event_type(
        &self,
        conn: &impl ConnectionTrait,
        functionality_name: &str,
        name: &str,
    ) -> Result<event_type::Model, InternalError> {
        let functionality_id = self
            .resolve_functionality(conn, functionality_name)
            .await?
            .ok_or_else(|| CatalogError::FunctionalityNotFound(functionality_name.to_string()))?;

        if self.resolve_event_type(conn, functionality_id, name).await?.is_some() {
            return Err(CatalogError::DuplicateEventType {
                functionality: functionality_name.to_string(),
                event_type: name.to_string(),
            }
            .into());
        }

        let model = event_type::ActiveModel {
            event_type_id: sea_orm::ActiveValue::NotSet,
            functionality_id: Set(functionality_id),
            name: Set(name.to_string()),
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_event_type", e))?;

        tracing::info!(
            event_type_id = model.event_type_id,
            "Created event type {} under {}",
            name,
            functionality_name
        );

        Ok(model)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{seed_catalog, setup_audit_db};

    async fn seeded() -> (sea_orm::DatabaseConnection, CatalogStore) {
        let db = setup_audit_db().await;
        let store = CatalogStore::new();
        seed_catalog(&db, &store).await;
        (db, store)
    }

    #[tokio::test]
    async fn test_resolve_known_and_unknown_functionality() {
        let (db, store) = seeded().await;

        assert!(store.resolve_functionality(&db, "Login").await.unwrap().is_some());
        assert_eq!(store.resolve_functionality(&db, "Payroll").await.unwrap(), None);
        assert_eq!(store.resolve_functionality(&db, "login").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_event_type_resolution_is_scoped_to_functionality() {
        let (db, store) = seeded().await;
        let login = store.resolve_functionality(&db, "Login").await.unwrap().unwrap();
        let inventory = store.resolve_functionality(&db, "Inventory").await.unwrap().unwrap();

        let login_logout = store.resolve_event_type(&db, login, "Logout").await.unwrap().unwrap();
        let inventory_logout = store.resolve_event_type(&db, inventory, "Logout").await.unwrap().unwrap();

        assert_ne!(login_logout, inventory_logout);
        assert_eq!(store.resolve_event_type(&db, login, "Adjust").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_listings_are_ordered_by_id() {
        let (db, store) = seeded().await;

        let functionalities = store.list_functionalities(&db).await.unwrap();
        let names: Vec<&str> = functionalities.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Login", "Inventory"]);

        let event_types = store.list_event_types(&db, "Login").await.unwrap();
        let names: Vec<&str> = event_types.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Login/Login", "Logout"]);

        assert!(store.list_event_types(&db, "Payroll").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicates_are_rejected() {
        let (db, store) = seeded().await;

        let result = store.create_functionality(&db, "Login").await;
        assert!(matches!(result, Err(InternalError::Catalog(CatalogError::DuplicateFunctionality(_)))));

        let result = store.create_event_type(&db, "Login", "Logout").await;
        assert!(matches!(result, Err(InternalError::Catalog(CatalogError::DuplicateEventType { .. }))));

        let result = store.create_event_type(&db, "Payroll", "Run").await;
        assert!(matches!(result, Err(InternalError::Catalog(CatalogError::FunctionalityNotFound(_)))));
    }
}
