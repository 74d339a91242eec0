use chrono::NaiveDate;
use mockito::Matcher;

use vakit::error::{Error, ProviderError};
use vakit::service::provider::LocationSelector;
use vakit_test_utils::provider::data;
use vakit_test_utils::provider::mockito::{
    mock_dated_timings_endpoint, mock_timings_endpoint, mock_timings_endpoint_matching,
    mock_timings_endpoint_with_status,
};

use crate::setup::test_setup;

fn coordinates() -> LocationSelector {
    LocationSelector::Coordinates {
        latitude: 41.0082,
        longitude: 28.9784,
    }
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// A well-formed response is validated and assembled into a record
#[tokio::test]
async fn fetch_parses_valid_payload() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint(&mut setup.server, &data::success_body(test_date()), 1);

    let record = setup
        .client()
        .fetch_timings(&coordinates(), None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(record.timings.fajr, "05:00");
    assert_eq!(record.timings.maghrib, "18:45");
    assert_eq!(record.date, test_date());
    assert_eq!(record.meta.timezone, "Europe/Istanbul");
    assert_eq!(record.meta.method_id, 2);

    let hijri = record.hijri.unwrap();
    assert_eq!(hijri.month_en, "Ramaḍān");
    assert_eq!(hijri.year, "1445");
}

/// An explicit date is embedded in the request path and trusted over the
/// payload's own date
#[tokio::test]
async fn fetch_with_date_uses_dated_path() {
    let mut setup = test_setup().await;
    let mock = mock_dated_timings_endpoint(
        &mut setup.server,
        "2024-03-15",
        &data::success_body(test_date()),
        1,
    );

    let record = setup
        .client()
        .fetch_timings(&coordinates(), Some(test_date()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(record.date, test_date());
}

/// City and country names are transliterated to the provider's expected
/// ASCII spellings
#[tokio::test]
async fn fetch_maps_place_names_for_provider() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint_matching(
        &mut setup.server,
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("city".into(), "Istanbul".into()),
            Matcher::UrlEncoded("country".into(), "Turkey".into()),
            Matcher::UrlEncoded("method".into(), "2".into()),
        ]),
        &data::success_body(test_date()),
        1,
    );

    let selector = LocationSelector::Place {
        city: "İstanbul".to_string(),
        country: "Türkiye".to_string(),
    };
    let result = setup.client().fetch_timings(&selector, None).await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

/// HTTP 5xx responses are retried up to the full budget, then surface the
/// provider status
#[tokio::test]
async fn server_error_exhausts_retry_budget() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint_with_status(&mut setup.server, 500, 4);

    let result = setup.client().fetch_timings(&coordinates(), None).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::Provider(ProviderError::Status(500)))
    ));
}

/// HTTP 4xx responses other than 429 fail on the first attempt
#[tokio::test]
async fn client_error_is_not_retried() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint_with_status(&mut setup.server, 400, 1);

    let result = setup.client().fetch_timings(&coordinates(), None).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::Provider(ProviderError::Status(400)))
    ));
}

/// A logical failure code inside an HTTP 200 envelope is classified exactly
/// like the equivalent transport status
#[tokio::test]
async fn envelope_failure_code_is_retried_like_transport_status() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint(
        &mut setup.server,
        &data::logical_failure_body(500, "INTERNAL SERVER ERROR"),
        4,
    );

    let result = setup.client().fetch_timings(&coordinates(), None).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::Provider(ProviderError::Status(500)))
    ));
}

/// A logical 400 inside an HTTP 200 envelope fails fast
#[tokio::test]
async fn envelope_client_failure_is_not_retried() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint(
        &mut setup.server,
        &data::logical_failure_body(400, "Please specify a valid city and country."),
        1,
    );

    let result = setup.client().fetch_timings(&coordinates(), None).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::Provider(ProviderError::Status(400)))
    ));
}

/// A payload missing one of the six canonical events is rejected without
/// retrying
#[tokio::test]
async fn missing_timing_field_is_malformed() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint(
        &mut setup.server,
        &data::body_missing_maghrib(test_date()),
        1,
    );

    let result = setup.client().fetch_timings(&coordinates(), None).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::Provider(ProviderError::MalformedResponse(_)))
    ));
}

/// A timing value that is not an HH:mm clock string is rejected without
/// retrying
#[tokio::test]
async fn invalid_clock_value_is_malformed() {
    let mut setup = test_setup().await;
    let mock = mock_timings_endpoint(
        &mut setup.server,
        &data::body_with_invalid_clock(test_date()),
        1,
    );

    let result = setup.client().fetch_timings(&coordinates(), None).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::Provider(ProviderError::MalformedResponse(_)))
    ));
}

/// Range fetches keep failures per-day instead of failing the whole batch
#[tokio::test]
async fn fetch_range_isolates_per_day_failures() {
    let mut setup = test_setup().await;

    let good_day = test_date();
    let bad_day = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();

    let good_mock = mock_dated_timings_endpoint(
        &mut setup.server,
        "2024-03-15",
        &data::success_body(good_day),
        1,
    );
    let bad_mock = setup
        .server
        .mock("GET", "/timings/2024-03-16")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("{}")
        .expect(1)
        .create();

    let results = setup
        .client()
        .fetch_range(&coordinates(), &[good_day, bad_day])
        .await;

    good_mock.assert_async().await;
    bad_mock.assert_async().await;

    assert_eq!(results.len(), 2);
    assert!(results[0].1.is_ok());
    assert!(matches!(
        results[1].1,
        Err(Error::Provider(ProviderError::Status(404)))
    ));
}
