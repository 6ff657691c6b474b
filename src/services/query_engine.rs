use std::sync::Arc;
use std::time::Duration;

use crate::errors::InternalError;
use crate::services::canonical_time;
use crate::services::enrichment_cache::EnrichmentCache;
use crate::services::export_formatter::ExportFormatter;
use crate::stores::{AuditStore, DirectoryLookup};
use crate::types::internal::{
    AuditEventView, EventRow, LookupKind, PageStatus, RecentPage, SearchCriteria, SearchPage,
};

/// Matches above this count degrade the search to a warning response
pub const MAX_RESULT_ROWS: u64 = 5000;

/// Size of the most-recent window
pub const RECENT_LIMIT: u64 = 500;

const EXPORT_TIMESTAMP_FORMAT: &str = "%m%d%Y_%H%M%S";

/// What an export should contain
#[derive(Debug, Clone)]
pub enum ExportRequest {
    Recent,
    Search(SearchCriteria),
}

/// A rendered export ready to be sent
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Read side of the audit log
///
/// Runs filtered searches and the recent-events fast path, enriching each
/// returned row with directory names through a cache that lives only as long
/// as the call.
pub struct QueryEngine {
    audit_store: Arc<AuditStore>,
    directory: Arc<dyn DirectoryLookup>,
    lookup_timeout: Duration,
}

impl QueryEngine {
    pub fn new(
        audit_store: Arc<AuditStore>,
        directory: Arc<dyn DirectoryLookup>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            audit_store,
            directory,
            lookup_timeout,
        }
    }

    /// Filtered, paginated search
    ///
    /// When more than `MAX_RESULT_ROWS` events match, the first page is
    /// returned regardless of the requested page and the status is
    /// `TooManyResults`.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchPage, InternalError> {
        let total_count = self.audit_store.count_events(criteria).await?;

        let (status, page_number) = if total_count > MAX_RESULT_ROWS {
            tracing::warn!(
                total_count,
                ?criteria,
                "Search exceeds result ceiling, returning first page only"
            );
            (PageStatus::TooManyResults, 1)
        } else if total_count == 0 {
            (PageStatus::Empty, criteria.page_number)
        } else {
            (PageStatus::Found, criteria.page_number)
        };

        let offset = match status {
            PageStatus::TooManyResults => Some(0),
            _ => criteria.offset(),
        };

        let rows = match offset {
            Some(offset) if offset < total_count => {
                self.audit_store
                    .fetch_events(criteria, offset, criteria.page_size)
                    .await?
            }
            _ => Vec::new(),
        };

        let cache = EnrichmentCache::new(self.directory.as_ref(), self.lookup_timeout);
        let events = enrich(rows, cache).await;

        tracing::debug!(total_count, page_number, returned = events.len(), "Search completed");

        Ok(SearchPage {
            status,
            total_count,
            current_page: page_number,
            total_pages: total_count.div_ceil(criteria.page_size),
            page_size: criteria.page_size,
            events,
        })
    }

    /// The `RECENT_LIMIT` newest events
    pub async fn recent(&self) -> Result<RecentPage, InternalError> {
        let rows = self.audit_store.recent_events(RECENT_LIMIT).await?;

        let cache = EnrichmentCache::new(self.directory.as_ref(), self.lookup_timeout);
        let events = enrich(rows, cache).await;

        Ok(RecentPage { events })
    }

    /// Run a recent or search query and render it with `formatter`
    pub async fn export(
        &self,
        request: &ExportRequest,
        formatter: &dyn ExportFormatter,
    ) -> Result<ExportDocument, InternalError> {
        let (label, events) = match request {
            ExportRequest::Recent => ("recent", self.recent().await?.events),
            ExportRequest::Search(criteria) => ("search", self.search(criteria).await?.events),
        };

        let bytes = formatter.format(&events)?;
        let file_name = format!(
            "audit_events_{}_{}.{}",
            label,
            canonical_time::canonical_now().format(EXPORT_TIMESTAMP_FORMAT),
            formatter.file_extension()
        );

        tracing::info!(%file_name, rows = events.len(), "Prepared audit export");

        Ok(ExportDocument {
            file_name,
            bytes,
        })
    }
}

/// Attach directory names and display timestamps to raw rows
///
/// Takes the cache by value; it is dropped when enrichment finishes.
pub async fn enrich(rows: Vec<EventRow>, mut cache: EnrichmentCache<'_>) -> Vec<AuditEventView> {
    let mut events = Vec::with_capacity(rows.len());

    for row in rows {
        let store_name = cache.get_or_fetch(LookupKind::Store, row.store_location_id).await;
        let company_name = cache.get_or_fetch(LookupKind::Company, Some(row.company_id)).await;

        events.push(AuditEventView {
            id: row.id,
            event_timestamp: canonical_time::format_display(&row.event_timestamp),
            functionality: row.functionality,
            event_type: row.event_type,
            store_location_id: row.store_location_id,
            store_name,
            company_id: row.company_id,
            company_name,
            user_name: row.username,
            message: row.message,
            status: row.status,
            additional_data: row.additional_data,
        });
    }

    events
}
