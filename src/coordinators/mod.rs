// Coordinators layer - Workflow orchestration
//
// Coordinators compose store and service operations for specific API
// endpoints. They determine the sequence of operations without containing
// business logic themselves.

pub mod audit_coordinator;

pub use audit_coordinator::AuditCoordinator;
