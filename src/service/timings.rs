//! Fetch-and-cache composition above the provider client.
//!
//! Applies the location fallback ordering (coordinates where the static
//! table knows them, place names otherwise), writes every successful fetch
//! into both cache tiers, and serves the cache-first multi-day path used by
//! the upcoming-days listing.

use chrono::{DateTime, NaiveDate, Utc};

use crate::data::{timings_cache::TimingsCache, Store};
use crate::error::Error;
use crate::model::{DailyTimingsRecord, LocationSpec};

use super::geo;
use super::provider::{LocationSelector, ProviderClient};

/// Fetch/cache service driven by the session orchestrator.
pub struct TimingsService {
    client: ProviderClient,
    store: Store,
}

impl TimingsService {
    /// Creates a new instance of [`TimingsService`]
    pub fn new(client: ProviderClient, store: Store) -> Self {
        Self { client, store }
    }

    /// The provider selector for a location spec.
    ///
    /// `Automatic` specs always use their device coordinates. `Manual`
    /// specs try the static coordinate table first (more reliable than the
    /// provider's name matching); on a miss they fall back to name-based
    /// resolution, with any district information discarded since the
    /// provider has no district concept.
    pub fn selector_for(spec: &LocationSpec) -> LocationSelector {
        match spec {
            LocationSpec::Automatic {
                latitude,
                longitude,
                ..
            } => LocationSelector::Coordinates {
                latitude: *latitude,
                longitude: *longitude,
            },
            LocationSpec::Manual {
                region,
                subregion,
                country,
            } => {
                // Legacy pickers stored the district inside the region
                // field as "Region - Subregion".
                let (region, parsed_subregion) = geo::split_region(region);
                let subregion = subregion.as_deref().or(parsed_subregion);

                match geo::resolve(region, subregion) {
                    Some(coords) => LocationSelector::Coordinates {
                        latitude: coords.latitude,
                        longitude: coords.longitude,
                    },
                    None => LocationSelector::Place {
                        city: region.to_string(),
                        country: country.clone(),
                    },
                }
            }
        }
    }

    /// Fetches the current day for `spec` and stores the record in both
    /// cache tiers.
    pub async fn refresh_current(
        &self,
        spec: &LocationSpec,
        now: DateTime<Utc>,
    ) -> Result<DailyTimingsRecord, Error> {
        let selector = Self::selector_for(spec);
        let record = self.client.fetch_timings(&selector, None).await?;

        let cache = TimingsCache::new(&self.store);
        cache.put(&spec.location_key(), &record, now).await?;
        cache.put_current_day(&record, now).await?;

        Ok(record)
    }

    /// The current-day fast-tier record, if one is cached for `today`.
    pub async fn cached_current_day(
        &self,
        today: NaiveDate,
    ) -> Result<Option<DailyTimingsRecord>, Error> {
        TimingsCache::new(&self.store).current_day(today).await
    }

    /// One specific day for `spec`, cache-first.
    pub async fn day(
        &self,
        spec: &LocationSpec,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<DailyTimingsRecord, Error> {
        let location_key = spec.location_key();
        let cache = TimingsCache::new(&self.store);

        if let Some(record) = cache.get(&location_key, date, now).await? {
            return Ok(record);
        }

        let selector = Self::selector_for(spec);
        let record = self.client.fetch_timings(&selector, Some(date)).await?;
        cache.put(&location_key, &record, now).await?;

        Ok(record)
    }

    /// Warms the multi-day cache for the given dates, skipping days already
    /// cached. Per-day fetch failures are logged and skipped; the return
    /// value counts newly fetched days.
    pub async fn prefetch_range(
        &self,
        spec: &LocationSpec,
        dates: &[NaiveDate],
        now: DateTime<Utc>,
    ) -> Result<usize, Error> {
        let location_key = spec.location_key();
        let cache = TimingsCache::new(&self.store);

        let mut missing = Vec::new();
        for &date in dates {
            if cache.get(&location_key, date, now).await?.is_none() {
                missing.push(date);
            }
        }

        if missing.is_empty() {
            return Ok(0);
        }

        let selector = Self::selector_for(spec);
        let mut fetched = 0;
        for (date, result) in self.client.fetch_range(&selector, &missing).await {
            match result {
                Ok(record) => {
                    cache.put(&location_key, &record, now).await?;
                    fetched += 1;
                }
                Err(err) => {
                    tracing::warn!("Skipping day {date} while warming timings cache: {err:?}");
                }
            }
        }

        Ok(fetched)
    }

    /// The backing store, shared with the orchestrator's repositories.
    pub fn store(&self) -> &Store {
        &self.store
    }
}
