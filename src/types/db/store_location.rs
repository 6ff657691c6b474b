use sea_orm::entity::prelude::*;

/// Read-only view of the directory's store_locations table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "store_locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_location_id: i64,
    pub company_id: i64,
    pub store_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
