// API-facing error types
pub mod audit;

// Re-exports for convenience
pub use audit::AuditApiError;
