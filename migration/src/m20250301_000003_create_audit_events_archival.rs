use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys: archived rows outlive catalog changes
        manager
            .create_table(
                Table::create()
                    .table(AuditEventsArchival::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuditEventsArchival::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(AuditEventsArchival::EventTimestamp).date_time().not_null())
                    .col(ColumnDef::new(AuditEventsArchival::FunctionalityId).integer().not_null())
                    .col(ColumnDef::new(AuditEventsArchival::EventTypeId).integer().not_null())
                    .col(ColumnDef::new(AuditEventsArchival::StoreLocationId).big_integer().null())
                    .col(ColumnDef::new(AuditEventsArchival::CompanyId).big_integer().not_null())
                    .col(ColumnDef::new(AuditEventsArchival::Username).string_len(20).not_null())
                    .col(ColumnDef::new(AuditEventsArchival::Message).text().not_null())
                    .col(ColumnDef::new(AuditEventsArchival::Status).string_len(20).not_null())
                    .col(ColumnDef::new(AuditEventsArchival::AdditionalData).json().null())
                    .col(ColumnDef::new(AuditEventsArchival::ArchivedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_audit_events_archival_timestamp")
                    .table(AuditEventsArchival::Table)
                    .col(AuditEventsArchival::EventTimestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditEventsArchival::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditEventsArchival {
    Table,
    Id,
    EventTimestamp,
    FunctionalityId,
    EventTypeId,
    StoreLocationId,
    CompanyId,
    Username,
    Message,
    Status,
    AdditionalData,
    ArchivedAt,
}
