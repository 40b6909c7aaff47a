//! Repository tests against a real PostgreSQL instance.
//!
//! These tests need a running Docker daemon; run them with
//! `cargo test -- --ignored`.

use super::common::{sample_item, setup_repository};

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_upsert_and_get_roundtrip() {
    let (repo, _container) = setup_repository().await;

    let item = sample_item(8863, "dhouston", 104);
    let saved = repo.upsert_batch(std::slice::from_ref(&item)).await.unwrap();
    assert_eq!(saved, 1);

    let fetched = repo.get(8863).await.unwrap().expect("item should exist");
    assert_eq!(fetched, item);
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_upsert_batch_reports_rows_written() {
    let (repo, _container) = setup_repository().await;

    let items = vec![
        sample_item(1, "abc", 10),
        sample_item(2, "abc", 20),
        sample_item(3, "cba", 30),
    ];
    let saved = repo.upsert_batch(&items).await.unwrap();

    assert_eq!(saved, 3);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_upsert_overwrites_existing_row() {
    let (repo, _container) = setup_repository().await;

    repo.upsert_batch(&[sample_item(1, "abc", 10)]).await.unwrap();

    let mut updated = sample_item(1, "abc", 500);
    updated.title = "fresh title".to_string();
    let saved = repo.upsert_batch(std::slice::from_ref(&updated)).await.unwrap();

    assert_eq!(saved, 1);
    assert_eq!(repo.count().await.unwrap(), 1, "no duplicate row");
    let fetched = repo.get(1).await.unwrap().unwrap();
    assert_eq!(fetched.score, 500);
    assert_eq!(fetched.title, "fresh title");
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_empty_batch_is_noop() {
    let (repo, _container) = setup_repository().await;

    let saved = repo.upsert_batch(&[]).await.unwrap();

    assert_eq!(saved, 0);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_get_missing_returns_none() {
    let (repo, _container) = setup_repository().await;

    assert!(repo.get(42).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_list_page_orders_by_id() {
    let (repo, _container) = setup_repository().await;

    // Insertion order must not leak into listing order.
    let items = vec![
        sample_item(5, "a", 1),
        sample_item(1, "b", 2),
        sample_item(3, "c", 3),
    ];
    repo.upsert_batch(&items).await.unwrap();

    let page = repo.list_page(0, 10).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);

    let window = repo.list_page(1, 1).await.unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].id, 3);
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_user_aggregates_group_by_author() {
    let (repo, _container) = setup_repository().await;

    let items = vec![
        sample_item(1, "abc", 200),
        sample_item(2, "abc", 150),
        sample_item(3, "cba", 300),
        sample_item(4, "abc", 100),
    ];
    repo.upsert_batch(&items).await.unwrap();

    let users = repo.user_aggregates(0, 10).await.unwrap();
    assert_eq!(users.len(), 2);

    // Ordered by each author's earliest item id: abc owns id 1.
    assert_eq!(users[0].name, "abc");
    assert_eq!(users[0].item_count, 3);
    assert_eq!(users[0].score, 450);
    assert_eq!(users[1].name, "cba");
    assert_eq!(users[1].item_count, 1);
    assert_eq!(users[1].score, 300);

    assert_eq!(repo.user_count().await.unwrap(), 2);

    let window = repo.user_aggregates(1, 1).await.unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].name, "cba");
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_init_schema_is_idempotent() {
    let (repo, _container) = setup_repository().await;

    // setup_repository already applied the schema once.
    repo.init_schema().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires a running Docker daemon"]
async fn test_health_check() {
    let (repo, _container) = setup_repository().await;

    assert!(repo.health_check().await.is_ok());
}
