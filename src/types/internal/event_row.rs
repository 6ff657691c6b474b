use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;

use super::EventStatus;

/// One audit event joined with its catalog names
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct EventRow {
    pub id: i64,
    pub event_timestamp: NaiveDateTime,
    pub functionality: String,
    pub event_type: String,
    pub store_location_id: Option<i64>,
    pub company_id: i64,
    pub username: String,
    pub message: String,
    pub status: EventStatus,
    pub additional_data: Option<serde_json::Value>,
}
