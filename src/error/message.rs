//! User-facing message mapping.
//!
//! Every [`Error`] maps to a localized, human-readable string; raw provider
//! and transport codes are logged for diagnostics but never shown to the
//! user.

use crate::config::Language;

use super::{Error, LocationError, ProviderError};

impl Error {
    /// The localized message rendered to the user for this error.
    pub fn user_message(&self, language: Language) -> &'static str {
        use Language::{English, Turkish};

        match self {
            Error::Network(_) => match language {
                Turkish => "İnternet bağlantınızı kontrol edin.",
                English => "Check your internet connection.",
            },
            Error::Provider(ProviderError::Status(code)) => match (*code, language) {
                (404, Turkish) => "Konum bulunamadı. Lütfen konum seçiminizi kontrol edin.",
                (404, English) => "Location not found. Please check your location selection.",
                (429, Turkish) => "Çok fazla istek yapıldı, lütfen biraz bekleyin.",
                (429, English) => "Too many requests, please wait a moment.",
                (code, Turkish) if code >= 500 => {
                    "Sunucu hatası, lütfen daha sonra tekrar deneyin."
                }
                (code, English) if code >= 500 => "Server error, please try again later.",
                (_, Turkish) => "Geçersiz istek. Lütfen konum bilginizi kontrol edin.",
                (_, English) => "Invalid request. Please check your location details.",
            },
            Error::Provider(ProviderError::MalformedResponse(_)) => match language {
                Turkish => "Sunucudan beklenmeyen bir yanıt alındı.",
                English => "The server returned an unexpected response.",
            },
            Error::Location(LocationError::NotConfigured) => match language {
                Turkish => "Konum ayarlanmamış. Lütfen ayarlardan konum seçin.",
                English => "No location set. Please choose a location in settings.",
            },
            Error::Location(LocationError::PermissionDenied) => match language {
                Turkish => "Konum izni verilmedi.",
                English => "Location permission was denied.",
            },
            Error::Config(_) | Error::Cache(_) | Error::ParseError(_) => match language {
                Turkish => "Beklenmeyen bir hata oluştu.",
                English => "An unexpected error occurred.",
            },
        }
    }
}

/// Informational banner shown when cached timings substitute for a fetch.
pub fn offline_banner(language: Language) -> &'static str {
    match language {
        Language::Turkish => "Çevrimdışı moddasınız, kaydedilmiş vakitler gösteriliyor.",
        Language::English => "You are offline, showing saved times.",
    }
}

/// Blocking message shown when offline with no cached timings for today.
pub fn offline_unavailable(language: Language) -> &'static str {
    match language {
        Language::Turkish => "Çevrimdışısınız ve kaydedilmiş vakit bulunamadı.",
        Language::English => "You are offline and no saved times are available.",
    }
}
