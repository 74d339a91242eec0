use chrono::{NaiveDate, Utc};

use vakit::data::timings_cache::TimingsCache;
use vakit::model::LocationSpec;
use vakit::service::timings::TimingsService;
use vakit_test_utils::provider::data;
use vakit_test_utils::provider::mockito::mock_dated_timings_endpoint;

use crate::setup::{build_client, fixture_record, test_setup};

fn ankara() -> LocationSpec {
    LocationSpec::Manual {
        region: "Ankara".to_string(),
        subregion: None,
        country: "Türkiye".to_string(),
    }
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// A day lookup fetches once and serves the cache afterwards
#[tokio::test]
async fn day_is_cache_first() {
    let mut setup = test_setup().await;
    let mock = mock_dated_timings_endpoint(
        &mut setup.server,
        "2024-03-15",
        &data::success_body(test_date()),
        1,
    );

    let service = TimingsService::new(build_client(&setup.config), setup.store.clone());
    let now = Utc::now();

    let first = service.day(&ankara(), test_date(), now).await.unwrap();
    let second = service.day(&ankara(), test_date(), now).await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

/// Range warming only fetches the days the cache is missing
#[tokio::test]
async fn prefetch_range_skips_cached_days() {
    let mut setup = test_setup().await;
    let now = Utc::now();

    let cached_day = test_date();
    let missing_day = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();

    TimingsCache::new(&setup.store)
        .put(
            &ankara().location_key(),
            &fixture_record(cached_day),
            now,
        )
        .await
        .unwrap();

    let cached_mock = mock_dated_timings_endpoint(
        &mut setup.server,
        "2024-03-15",
        &data::success_body(cached_day),
        0,
    );
    let missing_mock = mock_dated_timings_endpoint(
        &mut setup.server,
        "2024-03-16",
        &data::success_body(missing_day),
        1,
    );

    let service = TimingsService::new(build_client(&setup.config), setup.store.clone());
    let fetched = service
        .prefetch_range(&ankara(), &[cached_day, missing_day], now)
        .await
        .unwrap();

    cached_mock.assert_async().await;
    missing_mock.assert_async().await;
    assert_eq!(fetched, 1);

    // The newly fetched day is now cached as well
    assert!(TimingsCache::new(&setup.store)
        .get(&ankara().location_key(), missing_day, now)
        .await
        .unwrap()
        .is_some());
}
