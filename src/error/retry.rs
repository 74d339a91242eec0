use super::{Error, ProviderError};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, malformed data)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Error::Network(reqwest_error) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        // Provider is temporarily unavailable, backoff and
                        // retry later.
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,

                        // Rate limited; the provider recovers on its own.
                        s if s.as_u16() == 429 => ErrorRetryStrategy::Retry,

                        // We're making invalid requests to the provider,
                        // retrying the same request cannot succeed.
                        s if s.is_client_error() => ErrorRetryStrategy::Fail,

                        // Unexpected response
                        _ => ErrorRetryStrategy::Fail,
                    }
                } else {
                    // Network error or connection issue - should retry
                    ErrorRetryStrategy::Retry
                }
            }

            Error::Provider(provider_error) => match provider_error {
                // Logical status codes follow the same rule as transport
                // statuses: rate limiting and server errors are transient.
                ProviderError::Status(code) => match code {
                    429 => ErrorRetryStrategy::Retry,
                    code if *code >= 500 => ErrorRetryStrategy::Retry,
                    _ => ErrorRetryStrategy::Fail,
                },

                // A payload that decoded but failed validation will not
                // change on retry.
                ProviderError::MalformedResponse(_) => ErrorRetryStrategy::Fail,
            },

            Error::Cache(cache_error) => match cache_error {
                // A concurrently held write lock clears itself; everything
                // else (corrupt file, schema issues) is permanent.
                rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
                    rusqlite::ErrorCode::DatabaseBusy => ErrorRetryStrategy::Retry,
                    rusqlite::ErrorCode::DatabaseLocked => ErrorRetryStrategy::Retry,
                    _ => ErrorRetryStrategy::Fail,
                },
                _ => ErrorRetryStrategy::Fail,
            },

            // Configuration errors - permanent failures, won't resolve with retry
            Error::Config(_) => ErrorRetryStrategy::Fail,

            // Location errors - permanent failures, the user must re-trigger
            Error::Location(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Error::ParseError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
