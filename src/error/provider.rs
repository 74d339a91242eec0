use thiserror::Error;

/// Errors from the timings provider after a transport-level successful
/// exchange.
///
/// The provider embeds a logical status code in its JSON envelope, so a
/// `Status` value can originate from either the HTTP status line or the
/// payload's `code` field; both are classified identically for retry
/// purposes.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider reported a non-success status code.
    #[error("Timings provider responded with status {0}")]
    Status(u16),
    /// The payload decoded, but is missing timing fields or carries values
    /// that are not `HH:mm` clock strings.
    #[error("Timings provider payload was malformed: {0}")]
    MalformedResponse(String),
}
