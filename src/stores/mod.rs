// Stores layer - Data access and repository pattern
pub mod audit_store;
pub mod catalog_store;
pub mod directory_store;

pub use audit_store::AuditStore;
pub use catalog_store::CatalogStore;
pub use directory_store::{DirectoryLookup, DirectoryStore};
