use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

use crate::m20250301_000001_create_audit_catalog::{AuditEventTypes, AuditFunctionalities};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// PostgreSQL gets a range-partitioned table keyed on the event timestamp.
/// The default partition catches everything until an operator attaches
/// dated partitions.
const POSTGRES_PARTITIONED_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS audit_events (
    id BIGSERIAL NOT NULL,
    event_timestamp TIMESTAMP NOT NULL,
    functionality_id INTEGER NOT NULL REFERENCES audit_functionalities (functionality_id),
    event_type_id INTEGER NOT NULL REFERENCES audit_event_types (event_type_id),
    store_location_id BIGINT NULL,
    company_id BIGINT NOT NULL,
    username VARCHAR(20) NOT NULL,
    message TEXT NOT NULL,
    status VARCHAR(20) NOT NULL,
    additional_data JSON NULL,
    PRIMARY KEY (id, event_timestamp),
    CONSTRAINT chk_audit_events_status CHECK (status IN ('Success', 'Failed'))
) PARTITION BY RANGE (event_timestamp);
CREATE TABLE IF NOT EXISTS audit_events_default PARTITION OF audit_events DEFAULT;
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(POSTGRES_PARTITIONED_TABLE)
                .await?;
        } else {
            manager
                .create_table(
                    Table::create()
                        .table(AuditEvents::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(AuditEvents::Id).big_integer().not_null().auto_increment().primary_key())
                        .col(ColumnDef::new(AuditEvents::EventTimestamp).date_time().not_null())
                        .col(ColumnDef::new(AuditEvents::FunctionalityId).integer().not_null())
                        .col(ColumnDef::new(AuditEvents::EventTypeId).integer().not_null())
                        .col(ColumnDef::new(AuditEvents::StoreLocationId).big_integer().null())
                        .col(ColumnDef::new(AuditEvents::CompanyId).big_integer().not_null())
                        .col(ColumnDef::new(AuditEvents::Username).string_len(20).not_null())
                        .col(ColumnDef::new(AuditEvents::Message).text().not_null())
                        .col(
                            ColumnDef::new(AuditEvents::Status)
                                .string_len(20)
                                .not_null()
                                .check(Expr::col(AuditEvents::Status).is_in(["Success", "Failed"])),
                        )
                        .col(ColumnDef::new(AuditEvents::AdditionalData).json().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_audit_events_functionality")
                                .from(AuditEvents::Table, AuditEvents::FunctionalityId)
                                .to(AuditFunctionalities::Table, AuditFunctionalities::FunctionalityId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_audit_events_event_type")
                                .from(AuditEvents::Table, AuditEvents::EventTypeId)
                                .to(AuditEventTypes::Table, AuditEventTypes::EventTypeId),
                        )
                        .to_owned(),
                )
                .await?;
        }

        // Recent/search scans read newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_audit_events_timestamp_id")
                    .table(AuditEvents::Table)
                    .col(AuditEvents::EventTimestamp)
                    .col(AuditEvents::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_audit_events_company_id")
                    .table(AuditEvents::Table)
                    .col(AuditEvents::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_audit_events_username")
                    .table(AuditEvents::Table)
                    .col(AuditEvents::Username)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditEvents::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditEvents {
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
}
