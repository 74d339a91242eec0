use chrono::{Local, Utc};

use vakit::data::key;
use vakit::data::location::LocationRepository;
use vakit::data::timings_cache::TimingsCache;
use vakit::model::LocationSpec;
use vakit::session::{ConnectivityStatus, SessionState};
use vakit_test_utils::provider::data;
use vakit_test_utils::provider::mockito::{
    mock_timings_endpoint, mock_timings_endpoint_with_status,
};

use crate::setup::{fixture_record, test_setup, test_setup_with_connectivity};

fn istanbul() -> LocationSpec {
    LocationSpec::Manual {
        region: "İstanbul".to_string(),
        subregion: None,
        country: "Türkiye".to_string(),
    }
}

/// A successful online load lands in Ready with both cache tiers and the
/// collaborator snapshot written
#[tokio::test]
async fn online_success_reaches_ready() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 1);

    setup.session.set_location(istanbul()).await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::Ready);
    assert!(!view.offline);
    assert_eq!(view.message, None);

    let record = view.record.expect("Ready view must carry a record");
    assert_eq!(record.date, today);
    assert!(view.next_event.is_some());
    assert!(view.countdown.is_some());

    // Both tiers were written under the spec's identity
    let location_key = istanbul().location_key();
    assert!(setup
        .store
        .get(&key::timings(&location_key, today))
        .await
        .unwrap()
        .is_some());
    assert!(setup
        .store
        .get(key::CURRENT_TIMINGS)
        .await
        .unwrap()
        .is_some());

    // Notification/widget collaborators can read the resolved surface
    let snapshot = setup.session.stored_snapshot().await.unwrap().unwrap();
    assert_eq!(snapshot.city, "İstanbul");
    assert_eq!(snapshot.timings, record.timings);
    assert!(snapshot.next_event.is_some());
}

/// Offline with today's timings cached substitutes cache and surfaces a
/// non-blocking informational banner
#[tokio::test]
async fn offline_with_cached_today_is_offline_ready() {
    let mut setup = test_setup_with_connectivity(ConnectivityStatus::disconnected()).await;
    let today = Local::now().date_naive();

    // No network traffic is allowed in this scenario
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 0);

    TimingsCache::new(&setup.store)
        .put_current_day(&fixture_record(today), Utc::now())
        .await
        .unwrap();

    setup.session.set_location(istanbul()).await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::OfflineReady);
    assert!(view.offline);
    assert!(view.record.is_some());
    assert!(view.message.is_some());
    assert!(view.next_event.is_some());
}

/// Offline with no cache entry for today is a blocking Error, never
/// OfflineReady
#[tokio::test]
async fn offline_without_cache_is_error() {
    let mut setup = test_setup_with_connectivity(ConnectivityStatus::disconnected()).await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 0);

    setup.session.set_location(istanbul()).await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::Error);
    assert_eq!(view.record, None);
    assert!(view.message.is_some());
}

/// Reachability explicitly refuted counts as offline even while connected
#[tokio::test]
async fn refuted_reachability_counts_as_offline() {
    let mut setup = test_setup_with_connectivity(ConnectivityStatus {
        connected: true,
        reachable: Some(false),
    })
    .await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 0);

    setup.session.set_location(istanbul()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(setup.session.view().state, SessionState::Error);
}

/// When the client exhausts its retry budget, cached timings substitute and
/// the failure becomes an informational message
#[tokio::test]
async fn fetch_failure_with_cache_falls_back() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint_with_status(&mut setup.server, 500, 4);

    TimingsCache::new(&setup.store)
        .put_current_day(&fixture_record(today), Utc::now())
        .await
        .unwrap();

    setup.session.set_location(istanbul()).await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::OfflineReady);
    assert!(view.record.is_some());
    assert!(view.message.is_some());
}

/// With neither network nor cache, the failure is blocking
#[tokio::test]
async fn fetch_failure_without_cache_is_error() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint_with_status(&mut setup.server, 500, 4);

    setup.session.set_location(istanbul()).await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::Error);
    assert_eq!(view.record, None);
    assert!(view.message.is_some());
}

/// Non-retryable provider errors take the same cache-fallback path as
/// exhausted retries
#[tokio::test]
async fn non_retryable_failure_uses_same_fallback() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint_with_status(&mut setup.server, 400, 1);

    TimingsCache::new(&setup.store)
        .put_current_day(&fixture_record(today), Utc::now())
        .await
        .unwrap();

    setup.session.set_location(istanbul()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(setup.session.view().state, SessionState::OfflineReady);
}

/// Startup restores the persisted location and loads for it
#[tokio::test]
async fn initialize_restores_persisted_location() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 1);

    LocationRepository::new(&setup.store)
        .put(&istanbul())
        .await
        .unwrap();

    setup.session.initialize().await.unwrap();

    mock.assert_async().await;
    assert_eq!(setup.session.view().state, SessionState::Ready);
    assert_eq!(setup.session.location().await, Some(istanbul()));
}

/// Startup without a persisted location but with today's fast-tier cache
/// still shows timings, with a pick-a-location message
#[tokio::test]
async fn initialize_without_location_serves_fast_tier() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 0);

    TimingsCache::new(&setup.store)
        .put_current_day(&fixture_record(today), Utc::now())
        .await
        .unwrap();

    setup.session.initialize().await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::OfflineReady);
    assert!(view.record.is_some());
    assert!(view.message.is_some());
}

/// Startup with nothing at all blocks on a pick-a-location message
#[tokio::test]
async fn initialize_without_location_or_cache_is_error() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 0);

    setup.session.initialize().await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::Error);
    assert_eq!(view.record, None);
    assert!(view.message.is_some());
}

/// An explicit retry from Error spends a fresh full retry budget
#[tokio::test]
async fn explicit_retry_spends_fresh_budget() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint_with_status(&mut setup.server, 500, 8);

    setup.session.set_location(istanbul()).await.unwrap();
    assert_eq!(setup.session.view().state, SessionState::Error);

    setup.session.retry().await.unwrap();

    mock.assert_async().await;
    assert_eq!(setup.session.view().state, SessionState::Error);
}

/// Going offline after a successful load falls back to the just-written
/// cache on the next refresh
#[tokio::test]
async fn connectivity_loss_degrades_to_offline_ready() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 1);

    setup.session.set_location(istanbul()).await.unwrap();
    assert_eq!(setup.session.view().state, SessionState::Ready);

    setup.feed.publish(ConnectivityStatus::disconnected());
    setup.session.refresh().await.unwrap();

    mock.assert_async().await;
    let view = setup.session.view();

    assert_eq!(view.state, SessionState::OfflineReady);
    assert!(view.offline);
    assert!(view.record.is_some());
    assert!(view.message.is_some());
}

/// An explicit refresh performs a fresh fetch
#[tokio::test]
async fn explicit_refresh_fetches_again() {
    let mut setup = test_setup().await;
    let today = Local::now().date_naive();
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(today), 2);

    setup.session.set_location(istanbul()).await.unwrap();
    setup.session.refresh().await.unwrap();

    mock.assert_async().await;
    assert_eq!(setup.session.view().state, SessionState::Ready);
}
