use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Companies::CompanyId).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Companies::CompanyName).string_len(40).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StoreLocations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StoreLocations::StoreLocationId).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(StoreLocations::CompanyId).big_integer().not_null())
                    .col(ColumnDef::new(StoreLocations::StoreName).string_len(100).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_store_locations_company_id")
                    .table(StoreLocations::Table)
                    .col(StoreLocations::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoreLocations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    CompanyId,
    CompanyName,
}

#[derive(DeriveIden)]
enum StoreLocations {
    Table,
    StoreLocationId,
    CompanyId,
    StoreName,
}
