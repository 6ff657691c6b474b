mod common;

use common::{login_event, setup_test_context};
use sea_orm::{EntityTrait, PaginatorTrait};
use storeaudit_backend::errors::internal::ValidationError;
use storeaudit_backend::types::db::audit_event;
use storeaudit_backend::types::internal::{EventStatus, IngestOutcome, PageStatus, RawSearchParams, SearchCriteria};

#[tokio::test]
async fn test_ingested_event_is_searchable_and_enriched() {
    let ctx = setup_test_context().await;

    let outcome = ctx
        .audit_store
        .insert(login_event("2025-01-15T12:00:00Z", "alice"))
        .await
        .unwrap();
    let IngestOutcome::Created(ack) = outcome else {
        panic!("expected event to be created");
    };

    let page = ctx.query_engine.search(&SearchCriteria::default()).await.unwrap();

    assert_eq!(page.status, PageStatus::Found);
    assert_eq!(page.total_count, 1);
    assert_eq!(page.total_pages, 1);

    let event = &page.events[0];
    assert_eq!(event.id, ack.id);
    assert_eq!(event.event_timestamp, "01-15-2025 06:00:00");
    assert_eq!(event.functionality, "Login");
    assert_eq!(event.event_type, "Login/Login");
    assert_eq!(event.store_name.as_deref(), Some("Downtown"));
    assert_eq!(event.company_name.as_deref(), Some("Acme Foods"));
    assert_eq!(event.status, EventStatus::Success);
}

#[tokio::test]
async fn test_unknown_functionality_stores_nothing() {
    let ctx = setup_test_context().await;

    let mut event = login_event("2025-01-15T12:00:00Z", "alice");
    event.functionality = "Payroll".to_string();

    let outcome = ctx.audit_store.insert(event).await.unwrap();

    assert!(matches!(
        outcome,
        IngestOutcome::Rejected(ValidationError::UnknownFunctionality(ref name)) if name == "Payroll"
    ));
    let stored = audit_event::Entity::find().count(&ctx.audit_db).await.unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_search_by_day_and_pagination() {
    let ctx = setup_test_context().await;

    for (hour, user) in [(9, "alice"), (10, "bob"), (11, "carol")] {
        let timestamp = format!("2025-03-03T{:02}:00:00-06:00", hour);
        ctx.audit_store.insert(login_event(&timestamp, user)).await.unwrap();
    }
    ctx.audit_store
        .insert(login_event("2025-03-04T09:00:00-06:00", "dave"))
        .await
        .unwrap();

    let criteria = SearchCriteria::from_raw(RawSearchParams {
        from_date: Some("2025-03-03".to_string()),
        to_date: Some("2025-03-03".to_string()),
        page_number: Some(2),
        page_size: Some(2),
        ..Default::default()
    })
    .unwrap();

    let page = ctx.query_engine.search(&criteria).await.unwrap();

    assert_eq!(page.total_count, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.events.len(), 1);
    assert_eq!(page.events[0].user_name, "alice");
}

#[tokio::test]
async fn test_search_by_user_is_case_insensitive() {
    let ctx = setup_test_context().await;

    ctx.audit_store.insert(login_event("2025-01-15T12:00:00Z", "Alice")).await.unwrap();
    ctx.audit_store.insert(login_event("2025-01-15T12:05:00Z", "bob")).await.unwrap();

    let criteria = SearchCriteria {
        user: Some("alice".to_string()),
        ..Default::default()
    };
    let page = ctx.query_engine.search(&criteria).await.unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.events[0].user_name, "Alice");
}

#[tokio::test]
async fn test_recent_is_newest_first() {
    let ctx = setup_test_context().await;

    ctx.audit_store.insert(login_event("2025-01-15T12:00:00Z", "first")).await.unwrap();
    ctx.audit_store.insert(login_event("2025-01-16T12:00:00Z", "second")).await.unwrap();

    let recent = ctx.query_engine.recent().await.unwrap();

    assert_eq!(recent.events.len(), 2);
    assert_eq!(recent.events[0].user_name, "second");
    assert_eq!(recent.message(), "Data fetched successfully");
}

#[tokio::test]
async fn test_search_on_empty_store() {
    let ctx = setup_test_context().await;

    let page = ctx.query_engine.search(&SearchCriteria::default()).await.unwrap();

    assert_eq!(page.status, PageStatus::Empty);
    assert_eq!(page.total_count, 0);
    assert!(page.events.is_empty());

    let functionalities = ctx.catalog_store.list_functionalities(&ctx.audit_db).await.unwrap();
    assert_eq!(functionalities.len(), 1);
}
