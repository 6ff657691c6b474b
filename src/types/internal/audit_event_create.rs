/// A caller-submitted audit event before normalization
///
/// Names are resolved against the catalog and the timestamp converted to
/// canonical time by `AuditStore::insert`.
#[derive(Debug, Clone)]
pub struct AuditEventCreate {
    /// ISO 8601 / RFC 3339; offset-less values are taken as UTC
    pub event_timestamp: String,
    pub functionality: String,
    pub event_type: String,
    pub store_location_id: Option<i64>,
    pub company_id: i64,
    pub user_name: String,
    pub message: String,
    /// `None` means `Success`
    pub status: Option<String>,
    pub additional_data: Option<serde_json::Value>,
}
