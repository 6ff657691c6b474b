// Catalog maintenance CLI commands

use sea_orm::DatabaseConnection;

use crate::stores::CatalogStore;

pub async fn add_functionality(
    catalog_store: &CatalogStore,
    audit_db: &DatabaseConnection,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Functionality name must not be empty".into());
    }

    let created = catalog_store.create_functionality(audit_db, name).await?;
    println!("✅ Added functionality '{}' (id {})", created.name, created.functionality_id);

    Ok(())
}

pub async fn add_event_type(
    catalog_store: &CatalogStore,
    audit_db: &DatabaseConnection,
    functionality: &str,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Event type name must not be empty".into());
    }

    let created = catalog_store
        .create_event_type(audit_db, functionality.trim(), name)
        .await?;
    println!(
        "✅ Added event type '{}' under '{}' (id {})",
        created.name, functionality, created.event_type_id
    );

    Ok(())
}

pub async fn list_catalog(
    catalog_store: &CatalogStore,
    audit_db: &DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let functionalities = catalog_store.list_functionalities(audit_db).await?;
    if functionalities.is_empty() {
        println!("ℹ️  Catalog is empty.");
        return Ok(());
    }

    for functionality in functionalities {
        println!("{:>4}  {}", functionality.functionality_id, functionality.name);
        for event_type in catalog_store.list_event_types(audit_db, &functionality.name).await? {
            println!("      {:>4}  {}", event_type.event_type_id, event_type.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_audit_db;

    #[tokio::test]
    async fn test_add_and_list() {
        let db = setup_audit_db().await;
        let store = CatalogStore::new();

        add_functionality(&store, &db, " Inventory ").await.unwrap();
        add_event_type(&store, &db, "Inventory", "Adjust").await.unwrap();
        list_catalog(&store, &db).await.unwrap();

        assert!(store.resolve_functionality(&db, "Inventory").await.unwrap().is_some());
        assert!(add_functionality(&store, &db, "Inventory").await.is_err());
        assert!(add_functionality(&store, &db, "   ").await.is_err());
    }
}
