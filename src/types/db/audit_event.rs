use sea_orm::entity::prelude::*;

use crate::types::internal::EventStatus;

/// SeaORM entity for audit_events table
///
/// On PostgreSQL the physical key is `(id, event_timestamp)` so the table can
/// be range-partitioned by timestamp; `id` alone is still unique because it
/// comes from a single sequence.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Canonical civil time, naive, second precision
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
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::functionality::Entity",
        from = "Column::FunctionalityId",
        to = "super::functionality::Column::FunctionalityId"
    )]
    Functionality,
    #[sea_orm(
        belongs_to = "super::event_type::Entity",
        from = "Column::EventTypeId",
        to = "super::event_type::Column::EventTypeId"
    )]
    EventType,
}

impl Related<super::functionality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Functionality.def()
    }
}

impl Related<super::event_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
