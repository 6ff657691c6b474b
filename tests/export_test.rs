mod common;

use common::{login_event, setup_test_context};
use storeaudit_backend::services::{ExportRequest, XlsxExporter};
use storeaudit_backend::types::internal::SearchCriteria;

#[tokio::test]
async fn test_export_of_empty_store_is_valid_workbook() {
    let ctx = setup_test_context().await;

    let document = ctx
        .query_engine
        .export(&ExportRequest::Recent, &XlsxExporter)
        .await
        .unwrap();

    assert!(document.bytes.starts_with(b"PK"));
    assert!(document.file_name.starts_with("audit_events_recent_"));
    assert!(document.file_name.ends_with(".xlsx"));
}

#[tokio::test]
async fn test_search_export_names_file_after_search() {
    let ctx = setup_test_context().await;
    ctx.audit_store
        .insert(login_event("2025-01-15T12:00:00Z", "alice"))
        .await
        .unwrap();

    let document = ctx
        .query_engine
        .export(&ExportRequest::Search(SearchCriteria::default()), &XlsxExporter)
        .await
        .unwrap();

    assert!(document.file_name.starts_with("audit_events_search_"));
    assert!(!document.bytes.is_empty());
}
