// Database entities - SeaORM models
pub mod audit_event;
pub mod audit_event_archival;
pub mod company;
pub mod event_type;
pub mod functionality;
pub mod store_location;
