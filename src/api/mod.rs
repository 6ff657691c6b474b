// API layer - HTTP endpoints
pub mod audit_events;
pub mod health;
pub mod reference;

pub use audit_events::{ApiKeyAuth, AuditEventsApi};
pub use health::HealthApi;
pub use reference::ReferenceApi;
