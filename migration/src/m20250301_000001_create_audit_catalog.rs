use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditFunctionalities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuditFunctionalities::FunctionalityId).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AuditFunctionalities::Name).string_len(250).not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuditEventTypes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuditEventTypes::EventTypeId).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AuditEventTypes::FunctionalityId).integer().not_null())
                    .col(ColumnDef::new(AuditEventTypes::Name).string_len(250).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_event_types_functionality")
                            .from(AuditEventTypes::Table, AuditEventTypes::FunctionalityId)
                            .to(AuditFunctionalities::Table, AuditFunctionalities::FunctionalityId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Same type name may live under different functionalities
        manager
            .create_index(
                Index::create()
                    .name("uq_functionality_event_type")
                    .table(AuditEventTypes::Table)
                    .col(AuditEventTypes::FunctionalityId)
                    .col(AuditEventTypes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditEventTypes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuditFunctionalities::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuditFunctionalities {
    Table,
    FunctionalityId,
    Name,
}

#[derive(DeriveIden)]
pub enum AuditEventTypes {
    Table,
    EventTypeId,
    FunctionalityId,
    Name,
}
