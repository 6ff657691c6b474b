use poem_openapi::payload::{Binary, Json};
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::services::canonical_time;
use crate::types::internal::{AuditEventCreate, AuditEventView, InsertAck, PageStatus, RecentPage, SearchPage};

/// Request body for creating an audit event
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditEventRequest {
    /// When the event happened (ISO 8601; no offset means UTC)
    pub event_timestamp: String,

    /// Functionality name, e.g. "Login"
    pub functionality: String,

    /// Event type name within the functionality
    pub event_type: String,

    /// Store the event relates to, if any
    pub store_location_id: Option<i64>,

    /// Company the event relates to
    pub company_id: i64,

    /// Acting user (at most 20 characters)
    pub user_name: String,

    /// Free-text description
    pub message: String,

    /// "Success" (default) or "Failed"
    pub status: Option<String>,

    /// Arbitrary structured payload
    pub additional_data: Option<serde_json::Value>,
}

impl From<CreateAuditEventRequest> for AuditEventCreate {
    fn from(request: CreateAuditEventRequest) -> Self {
        Self {
            event_timestamp: request.event_timestamp,
            functionality: request.functionality,
            event_type: request.event_type,
            store_location_id: request.store_location_id,
            company_id: request.company_id,
            user_name: request.user_name,
            message: request.message,
            status: request.status,
            additional_data: request.additional_data,
        }
    }
}

/// Response after storing an audit event
#[derive(Object, Debug)]
pub struct CreateAuditEventResponse {
    pub status_code: u16,
    pub message: String,

    /// Id of the stored event
    pub id: i64,

    /// Stored timestamp in canonical time (MM-DD-YYYY HH:MM:SS)
    pub event_timestamp: String,
}

impl From<InsertAck> for CreateAuditEventResponse {
    fn from(ack: InsertAck) -> Self {
        Self {
            status_code: 201,
            message: "Audit event created successfully".to_string(),
            id: ack.id,
            event_timestamp: canonical_time::format_display(&ack.event_timestamp),
        }
    }
}

/// One enriched audit event
#[derive(Object, Debug, Clone)]
pub struct AuditEventResponse {
    pub id: i64,

    /// MM-DD-YYYY HH:MM:SS in canonical time
    pub event_timestamp: String,
    pub functionality: String,
    pub event_type: String,
    pub store_location_id: Option<i64>,
    pub store_name: Option<String>,
    pub company_id: i64,
    pub company_name: Option<String>,
    pub user_name: String,
    pub message: String,
    pub status: String,
    pub additional_data: Option<serde_json::Value>,
}

impl From<AuditEventView> for AuditEventResponse {
    fn from(view: AuditEventView) -> Self {
        Self {
            id: view.id,
            event_timestamp: view.event_timestamp,
            functionality: view.functionality,
            event_type: view.event_type,
            store_location_id: view.store_location_id,
            store_name: view.store_name,
            company_id: view.company_id,
            company_name: view.company_name,
            user_name: view.user_name,
            message: view.message,
            status: view.status.to_string(),
            additional_data: view.additional_data,
        }
    }
}

/// Paginated search result
#[derive(Object, Debug)]
pub struct SearchResponse {
    pub status_code: u16,
    pub message: String,

    /// Events in this page
    pub count: u64,

    /// Matches before pagination
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub page_size: u64,
    pub events: Vec<AuditEventResponse>,
}

/// Most recent events
#[derive(Object, Debug)]
pub struct RecentResponse {
    pub status_code: u16,
    pub message: String,
    pub count: u64,
    pub events: Vec<AuditEventResponse>,
}

impl From<RecentPage> for RecentResponse {
    fn from(page: RecentPage) -> Self {
        let message = page.message().to_string();
        let events: Vec<AuditEventResponse> = page.events.into_iter().map(Into::into).collect();

        Self {
            status_code: 200,
            message,
            count: events.len() as u64,
            events,
        }
    }
}

#[derive(ApiResponse)]
pub enum CreateAuditEventApiResponse {
    /// Event stored
    #[oai(status = 201)]
    Created(Json<CreateAuditEventResponse>),
}

#[derive(ApiResponse)]
pub enum SearchApiResponse {
    /// Search completed
    #[oai(status = 200)]
    Ok(Json<SearchResponse>),

    /// Too many matches; the first page is still included
    #[oai(status = 400)]
    TooManyResults(Json<SearchResponse>),
}

impl From<SearchPage> for SearchApiResponse {
    fn from(page: SearchPage) -> Self {
        let status = page.status;
        let events: Vec<AuditEventResponse> = page.events.into_iter().map(Into::into).collect();
        let response = SearchResponse {
            status_code: status.status_code(),
            message: status.message().to_string(),
            count: events.len() as u64,
            total_count: page.total_count,
            current_page: page.current_page,
            total_pages: page.total_pages,
            page_size: page.page_size,
            events,
        };

        match status {
            PageStatus::Found | PageStatus::Empty => SearchApiResponse::Ok(Json(response)),
            PageStatus::TooManyResults => SearchApiResponse::TooManyResults(Json(response)),
        }
    }
}

#[derive(ApiResponse)]
pub enum RecentApiResponse {
    /// Recent events fetched
    #[oai(status = 200)]
    Ok(Json<RecentResponse>),
}

#[derive(ApiResponse)]
pub enum ExportApiResponse {
    /// Workbook download
    #[oai(
        status = 200,
        content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    )]
    Ok(Binary<Vec<u8>>, #[oai(header = "Content-Disposition")] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(status: PageStatus, total_count: u64) -> SearchPage {
        SearchPage {
            status,
            total_count,
            current_page: 1,
            total_pages: total_count.div_ceil(500),
            page_size: 500,
            events: Vec::new(),
        }
    }

    #[test]
    fn test_search_response_variant_follows_status() {
        let SearchApiResponse::Ok(found) = SearchApiResponse::from(page(PageStatus::Found, 3)) else {
            panic!("found page should answer 200");
        };
        assert_eq!(found.status_code, 200);

        let SearchApiResponse::Ok(empty) = SearchApiResponse::from(page(PageStatus::Empty, 0)) else {
            panic!("empty page should answer 200");
        };
        assert_eq!(empty.message, "No audit events found");

        let SearchApiResponse::TooManyResults(warning) = SearchApiResponse::from(page(PageStatus::TooManyResults, 5001)) else {
            panic!("ceiling page should answer 400");
        };
        assert_eq!(warning.status_code, 400);
        assert_eq!(warning.total_count, 5001);
    }
}
