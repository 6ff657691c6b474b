// Services layer - Business logic and orchestration
pub mod canonical_time;
pub mod enrichment_cache;
pub mod export_formatter;
pub mod query_engine;

pub use enrichment_cache::EnrichmentCache;
pub use export_formatter::{ExportFormatter, XlsxExporter};
pub use query_engine::{ExportDocument, ExportRequest, QueryEngine};
