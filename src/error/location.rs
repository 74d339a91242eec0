use thiserror::Error;

/// Location-resolution errors.
///
/// These are never retried within a single fetch attempt; the user must
/// re-trigger by selecting a location or granting permission.
#[derive(Error, Debug)]
pub enum LocationError {
    /// No location has been configured or restored from storage.
    #[error("No location has been configured for this session")]
    NotConfigured,
    /// The platform denied the location permission request.
    #[error("Location permission was denied")]
    PermissionDenied,
}
