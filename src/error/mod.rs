//! Error types for the vakit engine.
//!
//! Specialized error types for each domain (configuration, location
//! resolution, timings provider) are aggregated into a single [`Error`]
//! used across the crate. All errors use `thiserror` for ergonomic
//! definitions with automatic `Display` and `Error` implementations.
//! Retry classification lives in [`retry`]; user-facing strings in
//! [`message`].

pub mod config;
pub mod location;
pub mod message;
pub mod provider;
pub mod retry;

use thiserror::Error;

pub use config::ConfigError;
pub use location::LocationError;
pub use provider::ProviderError;
pub use retry::ErrorRetryStrategy;

/// Main error type for the vakit engine.
///
/// Aggregates all domain-specific error types and external library errors
/// into a single unified error type, using `thiserror`'s `#[from]` attribute
/// to enable automatic conversion via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (unparseable environment values)
/// - Location errors (no configured location, denied permission)
/// - Provider errors (logical failure or malformed payload from the
///   timings provider)
/// - Network errors (transport failure with no HTTP response)
/// - Cache errors (SQLite store failures)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Location error (nothing configured, or permission denied).
    #[error(transparent)]
    Location(#[from] LocationError),
    /// Timings-provider error (logical failure code or malformed payload).
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// Transport-level failure: the request produced no usable HTTP
    /// response (DNS, connect, timeout, interrupted body).
    #[error("network error reaching the timings provider: {0}")]
    Network(#[from] reqwest::Error),
    /// Cache store error (SQLite open, read, or write failure).
    #[error(transparent)]
    Cache(#[from] rusqlite::Error),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
}
