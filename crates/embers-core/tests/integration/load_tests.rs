//! End-to-end tests for the ingestion pipeline against scripted backends.

use std::collections::HashMap;
use std::time::Duration;

use embers_core::{AppError, Category, LoadConfig, LoadService};

use super::common::{
    sample_detail, standard_items, standard_listings, MockItemDetail, MockItemStore, MockUpstream,
    FIXTURE_TIME,
};

/// Loading `top` persists every listed item with fields mapped from the
/// upstream payload.
#[tokio::test]
async fn test_load_top_saves_listed_items() {
    // Arrange
    let store = MockItemStore::new();
    let upstream = MockUpstream::hn_fixture();
    let service = LoadService::new(store.clone(), upstream);

    // Act
    let summary = service.load(Category::Top, None).await.unwrap();

    // Assert
    assert_eq!(summary.saved, 3, "every listed item should be saved");
    assert_eq!(summary.stats.fetched, 3);
    assert_eq!(summary.stats.skipped, 0);
    assert_eq!(store.ids(), vec![1, 2, 3]);

    let item = store.get_item(1).unwrap();
    assert_eq!(item.author, "user1");
    assert_eq!(item.score, 10);
    assert_eq!(item.title, "title 1");
    assert_eq!(item.url, "https://cool_story.com/1");
    assert_eq!(item.kind, "story");
    assert_eq!(item.time.timestamp(), FIXTURE_TIME);
}

/// A limit caps the run to the front of the listing; ids beyond it are
/// never fetched.
#[tokio::test]
async fn test_load_respects_limit() {
    // Arrange
    let store = MockItemStore::new();
    let upstream = MockUpstream::hn_fixture();
    let service = LoadService::new(store.clone(), upstream.clone());

    // Act
    let summary = service.load(Category::Top, Some(2)).await.unwrap();

    // Assert
    assert_eq!(summary.saved, 2);
    assert_eq!(store.ids(), vec![1, 2], "limit takes ids from the front");
    assert_eq!(upstream.fetch_count(), 2, "ids beyond the limit must not be fetched");
}

/// A zero limit means no cap, matching the absent-limit behavior.
#[tokio::test]
async fn test_load_zero_limit_means_no_cap() {
    let store = MockItemStore::new();
    let service = LoadService::new(store.clone(), MockUpstream::hn_fixture());

    let summary = service.load(Category::Top, Some(0)).await.unwrap();

    assert_eq!(summary.saved, 3);
    assert_eq!(store.len(), 3);
}

/// A limit larger than the listing saves the whole listing.
#[tokio::test]
async fn test_load_limit_beyond_listing_is_harmless() {
    let store = MockItemStore::new();
    let service = LoadService::new(store.clone(), MockUpstream::hn_fixture());

    let summary = service.load(Category::Top, Some(50)).await.unwrap();

    assert_eq!(summary.saved, 3);
}

#[tokio::test]
async fn test_load_best_category() {
    let store = MockItemStore::new();
    let service = LoadService::new(store.clone(), MockUpstream::hn_fixture());

    let summary = service.load(Category::Best, None).await.unwrap();

    assert_eq!(summary.saved, 4);
    assert_eq!(store.ids(), vec![3, 4, 5, 6]);
}

/// Ids that do not resolve upstream are skipped; the rest of the listing
/// still lands.
#[tokio::test]
async fn test_load_skips_unresolvable_ids() {
    // Arrange: the `new` listing leads with id 0, which has no payload.
    let store = MockItemStore::new();
    let service = LoadService::new(store.clone(), MockUpstream::hn_fixture());

    // Act
    let summary = service.load(Category::New, None).await.unwrap();

    // Assert
    assert_eq!(summary.saved, 3);
    assert_eq!(summary.stats.skipped, 1);
    assert_eq!(summary.stats.fetched, 3);
    assert_eq!(store.ids(), vec![7, 8, 9]);
}

/// A failed detail fetch only costs that one item.
#[tokio::test]
async fn test_load_skips_failed_fetches() {
    // Arrange
    let store = MockItemStore::new();
    let upstream = MockUpstream::hn_fixture().with_failing_ids(vec![2]);
    let service = LoadService::new(store.clone(), upstream);

    // Act
    let summary = service.load(Category::Top, None).await.unwrap();

    // Assert
    assert_eq!(summary.saved, 2);
    assert_eq!(summary.stats.skipped, 1);
    assert_eq!(store.ids(), vec![1, 3]);
}

/// Payloads missing a required field are dropped without failing the run.
#[tokio::test]
async fn test_load_skips_malformed_payloads() {
    // Arrange: item 5 has no `type` field.
    let mut items = standard_items();
    items.insert(
        5,
        MockItemDetail {
            kind: None,
            ..sample_detail(5)
        },
    );
    let store = MockItemStore::new();
    let upstream = MockUpstream::new(standard_listings(), items);
    let service = LoadService::new(store.clone(), upstream);

    // Act
    let summary = service.load(Category::Best, None).await.unwrap();

    // Assert
    assert_eq!(summary.saved, 3);
    assert_eq!(summary.stats.skipped, 1);
    assert_eq!(store.ids(), vec![3, 4, 6]);
}

/// Sequential loads of overlapping listings upsert rather than duplicate.
#[tokio::test]
async fn test_sequential_loads_upsert_overlap() {
    // Arrange: top is [1, 2, 3] and best is [3, 4, 5, 6].
    let store = MockItemStore::new();
    let service = LoadService::new(store.clone(), MockUpstream::hn_fixture());

    // Act
    let first = service.load(Category::Top, None).await.unwrap();
    let second = service.load(Category::Best, None).await.unwrap();

    // Assert
    assert_eq!(first.saved, 3);
    assert_eq!(second.saved, 4);
    assert_eq!(store.len(), 6, "id 3 must not be duplicated");
    assert_eq!(store.ids(), vec![1, 2, 3, 4, 5, 6]);
}

/// Re-ingesting an id overwrites the stored row with fresh upstream values.
#[tokio::test]
async fn test_load_updates_existing_items() {
    // Arrange
    let store = MockItemStore::new();
    let service = LoadService::new(store.clone(), MockUpstream::hn_fixture());
    service.load(Category::Top, None).await.unwrap();

    let mut refreshed = standard_items();
    refreshed.insert(
        1,
        MockItemDetail {
            score: Some(999),
            title: Some("updated title".to_string()),
            ..sample_detail(1)
        },
    );
    let service = LoadService::new(
        store.clone(),
        MockUpstream::new(standard_listings(), refreshed),
    );

    // Act
    service.load(Category::Top, None).await.unwrap();

    // Assert
    assert_eq!(store.len(), 3);
    let item = store.get_item(1).unwrap();
    assert_eq!(item.score, 999);
    assert_eq!(item.title, "updated title");
}

/// A listing failure aborts the run before any per-item work.
#[tokio::test]
async fn test_listing_failure_aborts_run() {
    // Arrange
    let store = MockItemStore::new();
    let upstream = MockUpstream::failing_listing();
    let service = LoadService::new(store.clone(), upstream.clone());

    // Act
    let result = service.load(Category::Top, None).await;

    // Assert
    assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    assert!(store.is_empty(), "nothing may be persisted on listing failure");
    assert_eq!(upstream.fetch_count(), 0, "no detail fetch may be attempted");
}

/// A persistence failure surfaces as a database error.
#[tokio::test]
async fn test_persistence_failure_surfaces() {
    let store = MockItemStore::failing();
    let service = LoadService::new(store, MockUpstream::hn_fixture());

    let result = service.load(Category::Top, None).await;

    assert!(matches!(result, Err(AppError::DatabaseError(_))));
}

/// A run that exceeds the configured deadline fails as upstream
/// unavailability.
#[tokio::test]
async fn test_load_deadline_exceeded() {
    // Arrange
    let store = MockItemStore::new();
    let upstream = MockUpstream::hn_fixture().with_listing_delay(Duration::from_millis(200));
    let config = LoadConfig::new().with_deadline(Duration::from_millis(50));
    let service = LoadService::with_config(store.clone(), upstream, config);

    // Act
    let result = service.load(Category::Top, None).await;

    // Assert
    assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    assert!(store.is_empty());
}

/// An empty listing is a successful run that saves nothing.
#[tokio::test]
async fn test_load_empty_listing() {
    // Arrange
    let listings = HashMap::from([(Category::Top, Vec::new())]);
    let store = MockItemStore::new();
    let service = LoadService::new(store.clone(), MockUpstream::new(listings, standard_items()));

    // Act
    let summary = service.load(Category::Top, None).await.unwrap();

    // Assert
    assert_eq!(summary.saved, 0);
    assert_eq!(summary.stats.total(), 0);
    assert!(store.is_empty());
}
