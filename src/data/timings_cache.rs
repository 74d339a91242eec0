//! Two-tier cache for fetched timing tables.
//!
//! The multi-day tier is keyed by `(location key, date)` and retains
//! entries for a fixed window after they were fetched. The current-day
//! fast tier is a single slot keyed by calendar day only: location
//! resolution itself can be slow or fail (permission prompts, GPS
//! acquisition), but a user who opened the app earlier today should see
//! timings immediately, so the fast slot is consulted before and
//! independently of the location-aware path.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::DailyTimingsRecord;

use super::{key, Store};

/// Days a multi-day entry stays servable, measured from its fetch instant
/// (not from the entry's own date).
const RETENTION_DAYS: i64 = 7;

/// A cached record together with the instant it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The fetched record.
    pub record: DailyTimingsRecord,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

/// Repository over both cache tiers.
pub struct TimingsCache<'a> {
    store: &'a Store,
}

impl<'a> TimingsCache<'a> {
    /// Creates a new instance of [`TimingsCache`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Looks up the multi-day tier for `(location_key, date)`.
    ///
    /// Misses when the entry is absent or was fetched more than the
    /// retention window before `now`; expired entries are deleted lazily on
    /// detection, never swept eagerly.
    pub async fn get(
        &self,
        location_key: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Option<DailyTimingsRecord>, Error> {
        let storage_key = key::timings(location_key, date);

        let Some(raw) = self.store.get(&storage_key).await? else {
            return Ok(None);
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Discarding undecodable cache entry {storage_key}: {err}");
                self.store.delete(&storage_key).await?;
                return Ok(None);
            }
        };

        if now - entry.fetched_at > Duration::days(RETENTION_DAYS) {
            self.store.delete(&storage_key).await?;
            return Ok(None);
        }

        Ok(Some(entry.record))
    }

    /// Writes `record` into the multi-day tier, overwriting unconditionally.
    pub async fn put(
        &self,
        location_key: &str,
        record: &DailyTimingsRecord,
        now: DateTime<Utc>,
    ) -> Result<(), Error> {
        let storage_key = key::timings(location_key, record.date);
        let entry = CacheEntry {
            record: record.clone(),
            fetched_at: now,
        };

        self.store
            .put(&storage_key, &encode_entry(&entry)?)
            .await
    }

    /// Reads the current-day fast slot.
    ///
    /// Misses when empty or when the stored record's date is not `today`
    /// (the slot ignores location entirely).
    pub async fn current_day(
        &self,
        today: NaiveDate,
    ) -> Result<Option<DailyTimingsRecord>, Error> {
        let Some(raw) = self.store.get(key::CURRENT_TIMINGS).await? else {
            return Ok(None);
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Discarding undecodable current-day cache entry: {err}");
                self.store.delete(key::CURRENT_TIMINGS).await?;
                return Ok(None);
            }
        };

        if entry.record.date != today {
            return Ok(None);
        }

        Ok(Some(entry.record))
    }

    /// Writes `record` into the fast slot, overwriting unconditionally.
    pub async fn put_current_day(
        &self,
        record: &DailyTimingsRecord,
        now: DateTime<Utc>,
    ) -> Result<(), Error> {
        let entry = CacheEntry {
            record: record.clone(),
            fetched_at: now,
        };

        self.store
            .put(key::CURRENT_TIMINGS, &encode_entry(&entry)?)
            .await
    }
}

fn encode_entry(entry: &CacheEntry) -> Result<String, Error> {
    serde_json::to_string(entry)
        .map_err(|err| Error::ParseError(format!("Failed to encode cache entry: {err}")))
}
