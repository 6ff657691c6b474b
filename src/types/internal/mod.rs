pub mod audit_event_create;
pub mod event_row;
pub mod event_status;
pub mod ingest_outcome;
pub mod lookup_kind;
pub mod result_page;
pub mod search_criteria;

pub use audit_event_create::AuditEventCreate;
pub use event_row::EventRow;
pub use event_status::EventStatus;
pub use ingest_outcome::{IngestOutcome, InsertAck};
pub use lookup_kind::LookupKind;
pub use result_page::{AuditEventView, PageStatus, RecentPage, SearchPage, RESULT_CEILING_MESSAGE};
pub use search_criteria::{RawSearchParams, SearchCriteria, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
