//! HTTP client for the external timings provider.
//!
//! Owns request construction, input name normalization, retry/backoff, and
//! structural validation of the response payload. The provider wraps every
//! response in a `{ code, status, data }` envelope and reports logical
//! failures with `code != 200` even on HTTP 200, so both the transport
//! status and the envelope code are checked.

use std::time::Duration;

use chrono::NaiveDate;
use futures::future::join_all;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, ProviderError};
use crate::model::{DailyTimingsRecord, HijriDate, Timings, TimingsMeta};

use super::clock::parse_clock;
use super::name_map::{provider_city_name, provider_country_name};
use super::retry::RetryContext;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// How a fetch identifies its location to the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSelector {
    /// Query by latitude/longitude (preferred; immune to name matching).
    Coordinates {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
    /// Query by place names; normalized before being sent.
    Place {
        /// City name as the user knows it.
        city: String,
        /// Country name as the user knows it.
        country: String,
    },
}

impl LocationSelector {
    fn describe(&self) -> String {
        match self {
            Self::Coordinates {
                latitude,
                longitude,
            } => format!("{latitude:.4},{longitude:.4}"),
            Self::Place { city, country } => format!("{city}, {country}"),
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct TimingsPayload {
    timings: Timings,
    date: WireDate,
    meta: WireMeta,
}

#[derive(Deserialize)]
struct WireDate {
    gregorian: WireGregorian,
    #[serde(default)]
    hijri: Option<WireHijri>,
}

#[derive(Deserialize)]
struct WireGregorian {
    // DD-MM-YYYY
    date: String,
}

#[derive(Deserialize)]
struct WireHijri {
    day: String,
    month: WireHijriMonth,
    year: String,
}

#[derive(Deserialize)]
struct WireHijriMonth {
    en: String,
    ar: String,
}

#[derive(Deserialize)]
struct WireMeta {
    latitude: f64,
    longitude: f64,
    timezone: String,
    method: WireMethod,
}

#[derive(Deserialize)]
struct WireMethod {
    id: u32,
}

/// Client for the timings-by-date endpoint.
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
    method: u32,
    retry: RetryContext,
}

impl ProviderClient {
    /// Creates a new instance of [`ProviderClient`] from configuration.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.provider_url.trim_end_matches('/').to_string(),
            method: config.method,
            retry: RetryContext::new(),
        })
    }

    /// Replaces the retry policy; tests use a zero backoff.
    pub fn with_retry_policy(mut self, retry: RetryContext) -> Self {
        self.retry = retry;
        self
    }

    /// Fetches one day of timings, retrying transient failures.
    ///
    /// # Arguments
    /// - `selector`: coordinates or (city, country) names
    /// - `date`: the day to fetch; `None` means the provider's "today"
    ///
    /// # Returns
    /// - `Ok(DailyTimingsRecord)` - validated timings for the day
    /// - `Err(Error::Network)` - no HTTP response after exhausting retries
    /// - `Err(Error::Provider)` - logical failure status (retried for
    ///   429/5xx) or malformed payload (not retried)
    pub async fn fetch_timings(
        &self,
        selector: &LocationSelector,
        date: Option<NaiveDate>,
    ) -> Result<DailyTimingsRecord, Error> {
        self.retry
            .execute_with_retry(
                &format!("timings fetch for {}", selector.describe()),
                || self.fetch_timings_once(selector, date),
            )
            .await
    }

    /// Fetches a span of days for the multi-day cache, in batches of up to
    /// 10 concurrent requests.
    ///
    /// Failures stay per-day: one bad day does not poison the batch, so the
    /// result pairs every requested date with its own outcome.
    pub async fn fetch_range(
        &self,
        selector: &LocationSelector,
        dates: &[NaiveDate],
    ) -> Vec<(NaiveDate, Result<DailyTimingsRecord, Error>)> {
        const BATCH_SIZE: usize = 10;
        let mut all_days = Vec::with_capacity(dates.len());

        for chunk in dates.chunks(BATCH_SIZE) {
            let futures: Vec<_> = chunk
                .iter()
                .map(|&date| async move {
                    let result = self.fetch_timings(selector, Some(date)).await;
                    (date, result)
                })
                .collect();

            all_days.extend(join_all(futures).await);
        }

        all_days
    }

    async fn fetch_timings_once(
        &self,
        selector: &LocationSelector,
        date: Option<NaiveDate>,
    ) -> Result<DailyTimingsRecord, Error> {
        let url = match date {
            Some(date) => format!("{}/timings/{}", self.base_url, date.format("%Y-%m-%d")),
            None => format!("{}/timings", self.base_url),
        };

        let mut params: Vec<(&str, String)> = Vec::new();
        match selector {
            LocationSelector::Coordinates {
                latitude,
                longitude,
            } => {
                params.push(("latitude", latitude.to_string()));
                params.push(("longitude", longitude.to_string()));
            }
            LocationSelector::Place { city, country } => {
                params.push(("city", provider_city_name(city).to_string()));
                params.push(("country", provider_country_name(country).to_string()));
            }
        }
        params.push(("method", self.method.to_string()));

        let response = self.http.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()).into());
        }

        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body).map_err(|err| {
            ProviderError::MalformedResponse(format!("Undecodable envelope: {err}"))
        })?;

        if envelope.code != 200 {
            return Err(ProviderError::Status(envelope.code).into());
        }

        let payload: TimingsPayload = serde_json::from_value(envelope.data).map_err(|err| {
            ProviderError::MalformedResponse(format!("Undecodable timings payload: {err}"))
        })?;

        into_record(payload, date)
    }
}

/// Validates the decoded payload and assembles the immutable record.
fn into_record(
    payload: TimingsPayload,
    requested_date: Option<NaiveDate>,
) -> Result<DailyTimingsRecord, Error> {
    validate_timings(&payload.timings)?;

    let date = match requested_date {
        Some(date) => date,
        None => NaiveDate::parse_from_str(&payload.date.gregorian.date, "%d-%m-%Y").map_err(
            |_| {
                ProviderError::MalformedResponse(format!(
                    "Unparseable gregorian date: {:?}",
                    payload.date.gregorian.date
                ))
            },
        )?,
    };

    let hijri = payload.date.hijri.map(|hijri| HijriDate {
        day: hijri.day,
        month_en: hijri.month.en,
        month_ar: hijri.month.ar,
        year: hijri.year,
    });

    Ok(DailyTimingsRecord {
        timings: payload.timings,
        date,
        hijri,
        meta: TimingsMeta {
            latitude: payload.meta.latitude,
            longitude: payload.meta.longitude,
            timezone: payload.meta.timezone,
            method_id: payload.meta.method.id,
        },
    })
}

/// Every canonical event must be present as a well-formed `HH:mm` string.
fn validate_timings(timings: &Timings) -> Result<(), Error> {
    let fields = [
        ("Fajr", &timings.fajr),
        ("Sunrise", &timings.sunrise),
        ("Dhuhr", &timings.dhuhr),
        ("Asr", &timings.asr),
        ("Maghrib", &timings.maghrib),
        ("Isha", &timings.isha),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() || parse_clock(value).is_err() {
            return Err(ProviderError::MalformedResponse(format!(
                "Timing field {name} holds invalid clock value {value:?}"
            ))
            .into());
        }
    }

    Ok(())
}
