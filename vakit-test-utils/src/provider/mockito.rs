use mockito::{Matcher, Mock, ServerGuard};

/// Create a mock timings endpoint answering `/timings` for any query
pub fn mock_timings_endpoint(
    server: &mut ServerGuard,
    body: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/timings")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(expected_requests)
        .create()
}

/// Create a mock timings endpoint that only matches the given query
pub fn mock_timings_endpoint_matching(
    server: &mut ServerGuard,
    query: Matcher,
    body: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/timings")
        .match_query(query)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(expected_requests)
        .create()
}

/// Create a mock timings endpoint answering with a transport-level HTTP
/// error status
pub fn mock_timings_endpoint_with_status(
    server: &mut ServerGuard,
    http_status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/timings")
        .match_query(Matcher::Any)
        .with_status(http_status)
        .with_body("{}")
        .expect(expected_requests)
        .create()
}

/// Create a mock dated timings endpoint (`/timings/YYYY-MM-DD`)
pub fn mock_dated_timings_endpoint(
    server: &mut ServerGuard,
    date_path: &str,
    body: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", format!("/timings/{date_path}").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(expected_requests)
        .create()
}
