use chrono::NaiveDateTime;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::errors::InternalError;
use crate::errors::internal::ValidationError;
use crate::services::canonical_time;
use crate::stores::CatalogStore;
use crate::types::db::{audit_event, audit_event_archival, event_type, functionality};
use crate::types::internal::{
    AuditEventCreate, EventRow, EventStatus, IngestOutcome, InsertAck, SearchCriteria,
};

/// Longest accepted user name, in characters
pub const MAX_USERNAME_LEN: usize = 20;

const ARCHIVE_BATCH_SIZE: usize = 500;

/// Repository for the audit event log
///
/// Owns ingestion (validate, resolve, append in one transaction) and the
/// filtered scans the query engine pages over. Scan order is always
/// `event_timestamp DESC, id DESC`.
pub struct AuditStore {
    db: DatabaseConnection,
    catalog_store: Arc<CatalogStore>,
}

impl AuditStore {
    pub fn new(db: DatabaseConnection, catalog_store: Arc<CatalogStore>) -> Self {
        Self { db, catalog_store }
    }

    /// Append one audit event
    ///
    /// Normalizes the timestamp to canonical civil time, resolves the catalog
    /// names and inserts the row, all inside one transaction. A rejection rolls
    /// the transaction back and leaves no row behind.
    ///
    /// # Returns
    /// * `Ok(IngestOutcome::Created)` - Row committed
    /// * `Ok(IngestOutcome::Rejected)` - Input invalid, nothing written
    /// * `Err(InternalError)` - Persistence fault, transaction rolled back
    pub async fn insert(&self, event: AuditEventCreate) -> Result<IngestOutcome, InternalError> {
        let prepared = match PreparedEvent::from_create(event) {
            Ok(prepared) => prepared,
            Err(rejection) => {
                tracing::warn!("Audit event rejected: {}", rejection);
                return Ok(IngestOutcome::Rejected(rejection));
            }
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(InternalError::transaction_begin)?;

        match self.insert_in_txn(&txn, &prepared).await {
            Ok(IngestOutcome::Created(ack)) => {
                txn.commit().await.map_err(InternalError::transaction_commit)?;
                tracing::debug!(id = ack.id, "Audit event stored");
                Ok(IngestOutcome::Created(ack))
            }
            Ok(IngestOutcome::Rejected(rejection)) => {
                rollback(txn, "insert_audit_event").await;
                tracing::warn!(
                    functionality = %prepared.functionality,
                    event_type = %prepared.event_type,
                    user = %prepared.username,
                    "Audit event rejected: {}",
                    rejection
                );
                Ok(IngestOutcome::Rejected(rejection))
            }
            Err(e) => {
                rollback(txn, "insert_audit_event").await;
                tracing::error!(
                    functionality = %prepared.functionality,
                    event_type = %prepared.event_type,
                    user = %prepared.username,
                    company_id = prepared.company_id,
                    "Failed to store audit event: {}",
                    e
                );
                Err(e)
            }
        }
    }

    async fn insert_in_txn(
        &self,
        txn: &DatabaseTransaction,
        prepared: &PreparedEvent,
    ) -> Result<IngestOutcome, InternalError> {
        let Some(functionality_id) = self
            .catalog_store
            .resolve_functionality(txn, &prepared.functionality)
            .await?
        else {
            return Ok(IngestOutcome::Rejected(ValidationError::UnknownFunctionality(
                prepared.functionality.clone(),
            )));
        };

        let Some(event_type_id) = self
            .catalog_store
            .resolve_event_type(txn, functionality_id, &prepared.event_type)
            .await?
        else {
            return Ok(IngestOutcome::Rejected(ValidationError::UnknownEventType {
                functionality: prepared.functionality.clone(),
                event_type: prepared.event_type.clone(),
            }));
        };

        let row = audit_event::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            event_timestamp: Set(prepared.event_timestamp),
            functionality_id: Set(functionality_id),
            event_type_id: Set(event_type_id),
            store_location_id: Set(prepared.store_location_id),
            company_id: Set(prepared.company_id),
            username: Set(prepared.username.clone()),
            message: Set(prepared.message.clone()),
            status: Set(prepared.status),
            additional_data: Set(prepared.additional_data.clone()),
        };

        let result = audit_event::Entity::insert(row)
            .exec(txn)
            .await
            .map_err(|e| InternalError::database("insert_audit_event", e))?;

        Ok(IngestOutcome::Created(InsertAck {
            id: result.last_insert_id,
            event_timestamp: prepared.event_timestamp,
        }))
    }

    /// Count the events matching `criteria`, ignoring pagination
    pub async fn count_events(&self, criteria: &SearchCriteria) -> Result<u64, InternalError> {
        filtered_query(criteria)
            .into_model::<EventRow>()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_audit_events", e))
    }

    /// Fetch one window of the events matching `criteria`
    pub async fn fetch_events(
        &self,
        criteria: &SearchCriteria,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<EventRow>, InternalError> {
        filtered_query(criteria)
            .offset(offset)
            .limit(limit)
            .into_model::<EventRow>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("search_audit_events", e))
    }

    /// The `limit` most recent events
    pub async fn recent_events(&self, limit: u64) -> Result<Vec<EventRow>, InternalError> {
        joined_query()
            .limit(limit)
            .into_model::<EventRow>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("recent_audit_events", e))
    }

    /// Move events older than `cutoff` into the archival table
    ///
    /// Copies then deletes by id in batches inside a single transaction, so a
    /// failure leaves the live table untouched.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of events moved
    pub async fn archive_before(&self, cutoff: NaiveDateTime) -> Result<u64, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(InternalError::transaction_begin)?;

        match archive_in_txn(&txn, cutoff).await {
            Ok(moved) => {
                txn.commit().await.map_err(InternalError::transaction_commit)?;
                tracing::info!(%cutoff, moved, "Archived audit events");
                Ok(moved)
            }
            Err(e) => {
                rollback(txn, "archive_audit_events").await;
                tracing::error!(%cutoff, "Failed to archive audit events: {}", e);
                Err(e)
            }
        }
    }
}

async fn archive_in_txn(txn: &DatabaseTransaction, cutoff: NaiveDateTime) -> Result<u64, InternalError> {
    let expired = audit_event::Entity::find()
        .filter(audit_event::Column::EventTimestamp.lt(cutoff))
        .order_by_asc(audit_event::Column::Id)
        .all(txn)
        .await
        .map_err(|e| InternalError::database("select_expired_audit_events", e))?;

    let archived_at = canonical_time::canonical_now();
    let mut moved = 0;

    for batch in expired.chunks(ARCHIVE_BATCH_SIZE) {
        let ids: Vec<i64> = batch.iter().map(|event| event.id).collect();
        let copies = batch
            .iter()
            .cloned()
            .map(|event| audit_event_archival::ActiveModel::from_event(event, archived_at));

        audit_event_archival::Entity::insert_many(copies)
            .exec(txn)
            .await
            .map_err(|e| InternalError::database("insert_archived_audit_events", e))?;

        let deleted = audit_event::Entity::delete_many()
            .filter(audit_event::Column::Id.is_in(ids))
            .exec(txn)
            .await
            .map_err(|e| InternalError::database("delete_archived_audit_events", e))?;

        moved += deleted.rows_affected;
    }

    Ok(moved)
}

async fn rollback(txn: DatabaseTransaction, operation: &str) {
    if let Err(e) = txn.rollback().await {
        tracing::error!("Rollback of {} failed: {}", operation, e);
    }
}

/// Events joined with their catalog names, newest first
fn joined_query() -> Select<audit_event::Entity> {
    audit_event::Entity::find()
        .select_only()
        .column(audit_event::Column::Id)
        .column(audit_event::Column::EventTimestamp)
        .column_as(functionality::Column::Name, "functionality")
        .column_as(event_type::Column::Name, "event_type")
        .column(audit_event::Column::StoreLocationId)
        .column(audit_event::Column::CompanyId)
        .column(audit_event::Column::Username)
        .column(audit_event::Column::Message)
        .column(audit_event::Column::Status)
        .column(audit_event::Column::AdditionalData)
        .join(JoinType::InnerJoin, audit_event::Relation::Functionality.def())
        .join(JoinType::InnerJoin, audit_event::Relation::EventType.def())
        .order_by_desc(audit_event::Column::EventTimestamp)
        .order_by_desc(audit_event::Column::Id)
}

/// Apply every supplied criterion; absent ones add no predicate
fn filtered_query(criteria: &SearchCriteria) -> Select<audit_event::Entity> {
    let mut query = joined_query();

    if let Some(from) = criteria.from_date {
        query = query.filter(audit_event::Column::EventTimestamp.gte(from));
    }
    if let Some(to) = criteria.to_date {
        query = query.filter(audit_event::Column::EventTimestamp.lte(to));
    }
    if let Some(name) = &criteria.functionality {
        query = query.filter(functionality::Column::Name.eq(name.as_str()));
    }
    if let Some(name) = &criteria.event_type {
        query = query.filter(event_type::Column::Name.eq(name.as_str()));
    }
    if let Some(store_id) = criteria.store_id {
        query = query.filter(audit_event::Column::StoreLocationId.eq(store_id));
    }
    if let Some(company_id) = criteria.company_id {
        query = query.filter(audit_event::Column::CompanyId.eq(company_id));
    }
    if let Some(user) = &criteria.user {
        query = query.filter(
            Expr::expr(Func::lower(Expr::col((audit_event::Entity, audit_event::Column::Username))))
                .eq(user.to_lowercase()),
        );
    }
    if let Some(pattern) = &criteria.message_pattern {
        query = query.filter(
            Expr::expr(Func::lower(Expr::col((audit_event::Entity, audit_event::Column::Message))))
                .like(format!("%{}%", pattern.to_lowercase())),
        );
    }

    query
}

/// Caller input after the checks that need no database
#[derive(Debug)]
struct PreparedEvent {
    event_timestamp: NaiveDateTime,
    functionality: String,
    event_type: String,
    store_location_id: Option<i64>,
    company_id: i64,
    username: String,
    message: String,
    status: EventStatus,
    additional_data: Option<serde_json::Value>,
}

impl PreparedEvent {
    fn from_create(event: AuditEventCreate) -> Result<Self, ValidationError> {
        let event_timestamp = canonical_time::normalize_event_timestamp(&event.event_timestamp)
            .ok_or_else(|| ValidationError::invalid_timestamp("event_timestamp", &event.event_timestamp))?;

        let username = event.user_name.trim().to_string();
        if username.is_empty() {
            return Err(ValidationError::invalid_field("user_name", "must not be empty"));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(ValidationError::invalid_field(
                "user_name",
                format!("must be at most {} characters", MAX_USERNAME_LEN),
            ));
        }

        let status = match event.status.as_deref() {
            None => EventStatus::default(),
            Some(raw) => EventStatus::parse(raw).ok_or_else(|| {
                ValidationError::invalid_field("status", format!("'{}' is not one of Success, Failed", raw))
            })?,
        };

        Ok(Self {
            event_timestamp,
            functionality: event.functionality,
            event_type: event.event_type,
            store_location_id: event.store_location_id,
            company_id: event.company_id,
            username,
            message: event.message,
            status,
            additional_data: event.additional_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_audit_store;
    use sea_orm::ConnectionTrait;

    fn login_event(user: &str, timestamp: &str) -> AuditEventCreate {
        AuditEventCreate {
            event_timestamp: timestamp.to_string(),
            functionality: "Login".to_string(),
            event_type: "Login/Login".to_string(),
            store_location_id: Some(10),
            company_id: 1,
            user_name: user.to_string(),
            message: "signed in".to_string(),
            status: None,
            additional_data: None,
        }
    }

    async fn row_count(db: &DatabaseConnection) -> u64 {
        audit_event::Entity::find().count(db).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_normalizes_and_defaults() {
        let (db, _catalog, store) = setup_audit_store().await;

        let outcome = store
            .insert(login_event("alice", "2025-07-04T15:30:45.123Z"))
            .await
            .unwrap();

        let IngestOutcome::Created(ack) = outcome else {
            panic!("expected Created, got {:?}", outcome);
        };
        assert_eq!(canonical_time::format_display(&ack.event_timestamp), "07-04-2025 10:30:45");

        let stored = audit_event::Entity::find_by_id(ack.id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.status, EventStatus::Success);
        assert_eq!(stored.username, "alice");
        assert_eq!(stored.event_timestamp, ack.event_timestamp);
    }

    #[tokio::test]
    async fn test_unknown_functionality_writes_nothing() {
        let (db, _catalog, store) = setup_audit_store().await;
        let mut event = login_event("alice", "2025-07-04T15:30:45Z");
        event.functionality = "Payroll".to_string();

        let outcome = store.insert(event).await.unwrap();

        assert_eq!(
            outcome,
            IngestOutcome::Rejected(ValidationError::UnknownFunctionality("Payroll".to_string()))
        );
        assert_eq!(row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_event_type_from_other_functionality_is_rejected() {
        let (db, _catalog, store) = setup_audit_store().await;
        let mut event = login_event("alice", "2025-07-04T15:30:45Z");
        event.event_type = "Adjust".to_string();

        let outcome = store.insert(event).await.unwrap();

        assert!(matches!(outcome, IngestOutcome::Rejected(ValidationError::UnknownEventType { .. })));
        assert_eq!(row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_field_validation() {
        let (db, _catalog, store) = setup_audit_store().await;

        let mut bad_status = login_event("alice", "2025-07-04T15:30:45Z");
        bad_status.status = Some("Pending".to_string());
        let long_user = login_event("a-very-long-user-name-indeed", "2025-07-04T15:30:45Z");
        let bad_time = login_event("alice", "04/07/2025");

        for event in [bad_status, long_user, bad_time] {
            let outcome = store.insert(event).await.unwrap();
            assert!(matches!(outcome, IngestOutcome::Rejected(_)));
        }
        assert_eq!(row_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_persistence_fault_is_an_error() {
        let (db, _catalog, store) = setup_audit_store().await;
        db.execute_unprepared("DROP TABLE audit_events").await.unwrap();

        let result = store.insert(login_event("alice", "2025-07-04T15:30:45Z")).await;

        assert!(matches!(result, Err(InternalError::Database(_))));
    }

    #[tokio::test]
    async fn test_scan_order_is_newest_first_then_id() {
        let (_db, _catalog, store) = setup_audit_store().await;
        store.insert(login_event("first", "2025-01-01T10:00:00Z")).await.unwrap();
        store.insert(login_event("second", "2025-01-02T10:00:00Z")).await.unwrap();
        store.insert(login_event("third", "2025-01-02T10:00:00Z")).await.unwrap();

        let rows = store.recent_events(500).await.unwrap();
        let users: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();

        assert_eq!(users, vec!["third", "second", "first"]);
        assert_eq!(rows[0].functionality, "Login");
        assert_eq!(rows[0].event_type, "Login/Login");
    }

    #[tokio::test]
    async fn test_user_and_message_filters_ignore_case() {
        let (_db, _catalog, store) = setup_audit_store().await;
        store.insert(login_event("Alice", "2025-01-01T10:00:00Z")).await.unwrap();
        store.insert(login_event("alicia", "2025-01-01T11:00:00Z")).await.unwrap();

        let criteria = SearchCriteria {
            user: Some("ALICE".to_string()),
            message_pattern: Some("SIGNED".to_string()),
            ..Default::default()
        };

        assert_eq!(store.count_events(&criteria).await.unwrap(), 1);
        let rows = store.fetch_events(&criteria, 0, 10).await.unwrap();
        assert_eq!(rows[0].username, "Alice");
    }

    #[tokio::test]
    async fn test_archive_moves_only_older_events() {
        let (db, _catalog, store) = setup_audit_store().await;
        store.insert(login_event("old", "2024-12-01T12:00:00Z")).await.unwrap();
        store.insert(login_event("new", "2025-02-01T12:00:00Z")).await.unwrap();

        let cutoff = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let moved = store.archive_before(cutoff).await.unwrap();

        assert_eq!(moved, 1);
        assert_eq!(row_count(&db).await, 1);
        let archived = audit_event_archival::Entity::find().all(&db).await.unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].username, "old");
    }
}
