//! Engine configuration, read from the environment with usable defaults.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ConfigError, Error};

/// Default timings provider endpoint (AlAdhan-compatible API).
pub const DEFAULT_PROVIDER_URL: &str = "http://api.aladhan.com/v1";

/// Default calculation method: 2 = Diyanet İşleri Başkanlığı.
pub const DEFAULT_METHOD: u32 = 2;

const DEFAULT_CACHE_PATH: &str = "vakit.db";

/// Display language for user-facing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Turkish (default, matching the product's primary audience).
    #[default]
    Turkish,
    /// English.
    English,
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tr" | "tr-TR" => Ok(Self::Turkish),
            "en" | "en-US" | "en-GB" => Ok(Self::English),
            other => Err(ConfigError::InvalidValue {
                key: "VAKIT_LANG",
                value: other.to_string(),
            }),
        }
    }
}

/// Runtime configuration for the engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the timings provider.
    pub provider_url: String,
    /// Calculation-method identifier passed to the provider.
    pub method: u32,
    /// Path of the SQLite file backing the key-value cache store.
    pub cache_path: PathBuf,
    /// Language used for user-facing messages and event names.
    pub language: Language,
}

impl Config {
    /// Reads configuration from the environment. Every key has a default, so
    /// this only fails on values that are present but unparseable.
    pub fn from_env() -> Result<Self, Error> {
        let provider_url = std::env::var("VAKIT_PROVIDER_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());

        let method = match std::env::var("VAKIT_METHOD") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "VAKIT_METHOD",
                value: raw,
            })?,
            Err(_) => DEFAULT_METHOD,
        };

        let cache_path = std::env::var("VAKIT_CACHE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_PATH));

        let language = match std::env::var("VAKIT_LANG") {
            Ok(raw) => raw.parse::<Language>()?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            provider_url,
            method,
            cache_path,
            language,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            method: DEFAULT_METHOD,
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            language: Language::default(),
        }
    }
}
