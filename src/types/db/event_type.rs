use sea_orm::entity::prelude::*;

/// SeaORM entity for audit_event_types table
///
/// Unique on `(functionality_id, name)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_event_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub event_type_id: i32,
    pub functionality_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::functionality::Entity",
        from = "Column::FunctionalityId",
        to = "super::functionality::Column::FunctionalityId"
    )]
    Functionality,
    #[sea_orm(has_many = "super::audit_event::Entity")]
    AuditEvent,
}

impl Related<super::functionality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Functionality.def()
    }
}

impl Related<super::audit_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuditEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
