use poem_openapi::auth::ApiKey;
use poem_openapi::param::Query;
use poem_openapi::payload::{Binary, Json};
use poem_openapi::{OpenApi, SecurityScheme, Tags};
use std::sync::Arc;

use crate::coordinators::AuditCoordinator;
use crate::errors::AuditApiError;
use crate::types::dto::audit::{
    CreateAuditEventApiResponse, CreateAuditEventRequest, ExportApiResponse, RecentApiResponse,
    SearchApiResponse,
};
use crate::types::internal::RawSearchParams;

/// Audit event ingestion, search and export endpoints
pub struct AuditEventsApi {
    audit_coordinator: Arc<AuditCoordinator>,
    api_key: String,
}

impl AuditEventsApi {
    /// Create a new AuditEventsApi
    ///
    /// `api_key` is the value producers must send in `X-API-Key` to create events.
    pub fn new(audit_coordinator: Arc<AuditCoordinator>, api_key: String) -> Self {
        Self {
            audit_coordinator,
            api_key,
        }
    }

    fn authorize(&self, auth: &ApiKeyAuth) -> Result<(), AuditApiError> {
        if constant_time_eq(auth.0.key.as_bytes(), self.api_key.as_bytes()) {
            Ok(())
        } else {
            tracing::warn!("Rejected audit event submission with invalid API key");
            Err(AuditApiError::unauthorized())
        }
    }
}

/// Compare without short-circuiting on the first differing byte
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// API key issued to event producers
#[derive(SecurityScheme)]
#[oai(ty = "api_key", key_name = "X-API-Key", key_in = "header")]
pub struct ApiKeyAuth(pub ApiKey);

/// API tags for audit endpoints
#[derive(Tags)]
enum AuditTags {
    /// Audit event ingestion and retrieval
    AuditEvents,
}

#[allow(clippy::too_many_arguments)]
fn search_params(
    from_date: Query<Option<String>>,
    to_date: Query<Option<String>>,
    functionality: Query<Option<String>>,
    event_type: Query<Option<String>>,
    store_id: Query<Option<i64>>,
    company_id: Query<Option<i64>>,
    user: Query<Option<String>>,
    message_pattern: Query<Option<String>>,
    page_number: Query<Option<u64>>,
    page_size: Query<Option<u64>>,
) -> RawSearchParams {
    RawSearchParams {
        from_date: from_date.0,
        to_date: to_date.0,
        functionality: functionality.0,
        event_type: event_type.0,
        store_id: store_id.0,
        company_id: company_id.0,
        user: user.0,
        message_pattern: message_pattern.0,
        page_number: page_number.0,
        page_size: page_size.0,
    }
}

#[OpenApi(prefix_path = "/audit-events")]
impl AuditEventsApi {
    /// Record a new audit event
    ///
    /// Unknown functionality or event type names are rejected with 400 and
    /// nothing is stored.
    #[oai(path = "/create", method = "post", tag = "AuditTags::AuditEvents")]
    async fn create(
        &self,
        auth: ApiKeyAuth,
        body: Json<CreateAuditEventRequest>,
    ) -> Result<CreateAuditEventApiResponse, AuditApiError> {
        self.authorize(&auth)?;

        let ack = self
            .audit_coordinator
            .create_event(body.0.into())
            .await
            .map_err(AuditApiError::from_internal_error)?;

        Ok(CreateAuditEventApiResponse::Created(Json(ack.into())))
    }

    /// Search audit events
    ///
    /// All filters are optional and combined with AND. More than 5000 matches
    /// answers 400 with the first page still included.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/search", method = "get", tag = "AuditTags::AuditEvents")]
    async fn search(
        &self,
        from_date: Query<Option<String>>,
        to_date: Query<Option<String>>,
        functionality: Query<Option<String>>,
        event_type: Query<Option<String>>,
        store_id: Query<Option<i64>>,
        company_id: Query<Option<i64>>,
        user: Query<Option<String>>,
        #[oai(name = "message")] message_pattern: Query<Option<String>>,
        page_number: Query<Option<u64>>,
        page_size: Query<Option<u64>>,
    ) -> Result<SearchApiResponse, AuditApiError> {
        let params = search_params(
            from_date, to_date, functionality, event_type, store_id, company_id, user,
            message_pattern, page_number, page_size,
        );

        let page = self
            .audit_coordinator
            .search(params)
            .await
            .map_err(AuditApiError::from_internal_error)?;

        Ok(page.into())
    }

    /// The 500 most recent audit events
    #[oai(path = "/recent", method = "get", tag = "AuditTags::AuditEvents")]
    async fn recent(&self) -> Result<RecentApiResponse, AuditApiError> {
        let page = self
            .audit_coordinator
            .recent()
            .await
            .map_err(AuditApiError::from_internal_error)?;

        Ok(RecentApiResponse::Ok(Json(page.into())))
    }

    /// Download recent events or a search page as an Excel workbook
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/export", method = "get", tag = "AuditTags::AuditEvents")]
    async fn export(
        &self,
        recent: Query<Option<bool>>,
        from_date: Query<Option<String>>,
        to_date: Query<Option<String>>,
        functionality: Query<Option<String>>,
        event_type: Query<Option<String>>,
        store_id: Query<Option<i64>>,
        company_id: Query<Option<i64>>,
        user: Query<Option<String>>,
        #[oai(name = "message")] message_pattern: Query<Option<String>>,
        page_number: Query<Option<u64>>,
        page_size: Query<Option<u64>>,
    ) -> Result<ExportApiResponse, AuditApiError> {
        let params = search_params(
            from_date, to_date, functionality, event_type, store_id, company_id, user,
            message_pattern, page_number, page_size,
        );

        let document = self
            .audit_coordinator
            .export(params, recent.0.unwrap_or(false))
            .await
            .map_err(AuditApiError::from_internal_error)?;

        let disposition = format!("attachment; filename=\"{}\"", document.file_name);
        Ok(ExportApiResponse::Ok(Binary(document.bytes), disposition))
    }
}
