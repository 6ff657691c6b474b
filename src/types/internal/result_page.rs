use serde_json::Value;

use super::EventStatus;

pub const RESULT_CEILING_MESSAGE: &str =
    "Search may return more than 5000 rows. Please modify search criteria.";

/// An enriched, display-ready audit event
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEventView {
    pub id: i64,
    /// `MM-DD-YYYY HH:MM:SS`, canonical civil time
    pub event_timestamp: String,
    pub functionality: String,
    pub event_type: String,
    pub store_location_id: Option<i64>,
    pub store_name: Option<String>,
    pub company_id: i64,
    pub company_name: Option<String>,
    pub user_name: String,
    pub message: String,
    pub status: EventStatus,
    pub additional_data: Option<Value>,
}

/// How a search page should be reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Found,
    Empty,
    /// More than the result ceiling matched; the page is still populated
    TooManyResults,
}

impl PageStatus {
    pub fn status_code(&self) -> u16 {
        match self {
            PageStatus::Found | PageStatus::Empty => 200,
            PageStatus::TooManyResults => 400,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PageStatus::Found => "Search completed successfully",
            PageStatus::Empty => "No audit events found",
            PageStatus::TooManyResults => RESULT_CEILING_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub status: PageStatus,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub page_size: u64,
    pub events: Vec<AuditEventView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentPage {
    pub events: Vec<AuditEventView>,
}

impl RecentPage {
    pub fn message(&self) -> &'static str {
        if self.events.is_empty() {
            "Data not found"
        } else {
            "Data fetched successfully"
        }
    }
}
