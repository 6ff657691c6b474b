use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::types::internal::EventStatus;

/// SeaORM entity for audit_events_archival table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_events_archival")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub event_timestamp: DateTime,
    pub functionality_id: i32,
    pub event_type_id: i32,
    pub store_location_id: Option<i64>,
    pub company_id: i64,
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: EventStatus,
    pub additional_data: Option<Json>,
    pub archived_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Build the archival copy of a live event
    pub fn from_event(event: super::audit_event::Model, archived_at: DateTime) -> Self {
        Self {
            id: Set(event.id),
            event_timestamp: Set(event.event_timestamp),
            functionality_id: Set(event.functionality_id),
            event_type_id: Set(event.event_type_id),
            store_location_id: Set(event.store_location_id),
            company_id: Set(event.company_id),
            username: Set(event.username),
            message: Set(event.message),
            status: Set(event.status),
            additional_data: Set(event.additional_data),
            archived_at: Set(archived_at),
        }
    }
}
