//! Session orchestration for the prayer-time engine.
//!
//! [`PrayerSession`] composes the coordinate resolver, provider client,
//! and cache into a state machine over
//! `{Idle, Loading, Ready, Error, OfflineReady}` and publishes a
//! [`SessionView`] through a watch channel. It decides per load whether to
//! call the network or substitute cache based on connectivity and cache
//! freshness, guards overlapping refreshes with request-generation tokens,
//! and re-fetches automatically when the countdown rolls over an event.
//!
//! All collaborators are injected at construction; the orchestrator holds
//! no ambient globals.

pub mod connectivity;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, Utc};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::config::Language;
use crate::data::{key, location::LocationRepository};
use crate::error::message::{offline_banner, offline_unavailable};
use crate::error::{Error, LocationError};
use crate::model::{CollaboratorSnapshot, DailyTimingsRecord, LocationSpec};
use crate::service::clock;
use crate::service::timings::TimingsService;

pub use connectivity::{ConnectivityFeed, ConnectivityStatus};
pub use view::{SessionState, SessionView};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

struct MutableState {
    location: Option<LocationSpec>,
    /// Request-generation token: bumped at the start of every load; a
    /// completing fetch whose token is stale discards its result.
    generation: u64,
}

struct Inner {
    service: TimingsService,
    language: Language,
    connectivity: watch::Receiver<ConnectivityStatus>,
    view_tx: watch::Sender<SessionView>,
    state: Mutex<MutableState>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

/// The session orchestrator. Cheap to clone; clones share state.
///
/// Callers that start the countdown ticker must stop it on teardown; the
/// ticker task keeps the session alive while it runs.
#[derive(Clone)]
pub struct PrayerSession {
    inner: Arc<Inner>,
}

impl PrayerSession {
    /// Creates a new instance of [`PrayerSession`].
    ///
    /// # Arguments
    /// - `service`: the fetch/cache service
    /// - `language`: language for user-facing strings
    /// - `connectivity`: receiver side of the platform connectivity signal
    pub fn new(
        service: TimingsService,
        language: Language,
        connectivity: watch::Receiver<ConnectivityStatus>,
    ) -> Self {
        let (view_tx, _) = watch::channel(SessionView::idle());

        Self {
            inner: Arc::new(Inner {
                service,
                language,
                connectivity,
                view_tx,
                state: Mutex::new(MutableState {
                    location: None,
                    generation: 0,
                }),
                ticker: Mutex::new(None),
            }),
        }
    }

    /// Subscribes to view updates.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.inner.view_tx.subscribe()
    }

    /// The current view snapshot.
    pub fn view(&self) -> SessionView {
        self.inner.view_tx.borrow().clone()
    }

    /// The active location, if one is set or was restored.
    pub async fn location(&self) -> Option<LocationSpec> {
        self.inner.state.lock().await.location.clone()
    }

    /// Startup sequence: serve the current-day fast cache immediately if it
    /// has today's data, restore the persisted location, then load.
    ///
    /// With no persisted location the session stays out of `Loading` and
    /// surfaces a pick-a-location message, blocking only when not even
    /// cached timings exist.
    pub async fn initialize(&self) -> Result<(), Error> {
        let now = Local::now().naive_local();
        let preview = self.inner.service.cached_current_day(now.date()).await?;

        if let Some(record) = &preview {
            let offline = self.inner.connectivity.borrow().is_offline();
            let view = self.assemble(
                SessionState::Loading,
                Some(record.clone()),
                None,
                offline,
                false,
                None,
                now,
            );
            self.inner.view_tx.send_replace(view);
        }

        let saved = LocationRepository::new(self.inner.service.store())
            .get()
            .await?;

        match saved {
            Some(spec) => {
                self.inner.state.lock().await.location = Some(spec);
                self.load(false).await
            }
            None => {
                let message = Error::from(LocationError::NotConfigured)
                    .user_message(self.inner.language)
                    .to_string();
                let offline = self.inner.connectivity.borrow().is_offline();
                let (state, record) = match preview {
                    Some(record) => (SessionState::OfflineReady, Some(record)),
                    None => (SessionState::Error, None),
                };

                let view =
                    self.assemble(state, record, None, offline, false, Some(message), now);
                self.inner.view_tx.send_replace(view);

                Ok(())
            }
        }
    }

    /// Replaces the location wholesale, persists it, and loads timings for
    /// it.
    pub async fn set_location(&self, spec: LocationSpec) -> Result<(), Error> {
        LocationRepository::new(self.inner.service.store())
            .put(&spec)
            .await?;

        self.inner.state.lock().await.location = Some(spec);
        self.load(false).await
    }

    /// Explicit refresh request.
    pub async fn refresh(&self) -> Result<(), Error> {
        self.load(false).await
    }

    /// Explicit retry from the `Error` state.
    pub async fn retry(&self) -> Result<(), Error> {
        self.load(true).await
    }

    /// Warms the multi-day cache for the next `days` days of the active
    /// location. Returns the count of newly fetched days.
    pub async fn prefetch_upcoming(&self, days: usize) -> Result<usize, Error> {
        let Some(spec) = self.location().await else {
            return Err(LocationError::NotConfigured.into());
        };

        let today = Local::now().date_naive();
        let dates: Vec<_> = (0..days as u64)
            .filter_map(|offset| today.checked_add_days(chrono::Days::new(offset)))
            .collect();

        self.inner
            .service
            .prefetch_range(&spec, &dates, Utc::now())
            .await
    }

    /// The last collaborator snapshot written for notification/widget
    /// surfaces.
    pub async fn stored_snapshot(&self) -> Result<Option<CollaboratorSnapshot>, Error> {
        let Some(raw) = self
            .inner
            .service
            .store()
            .get(key::COLLABORATOR_SNAPSHOT)
            .await?
        else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                tracing::warn!("Discarding undecodable collaborator snapshot: {err}");
                Ok(None)
            }
        }
    }

    /// One load pass: offline check, fetch with cache fallback, view
    /// publication.
    ///
    /// Fetch failures are absorbed into the published view (that is the
    /// orchestrator's job); the returned error covers cache-store failures
    /// only.
    async fn load(&self, retrying: bool) -> Result<(), Error> {
        let (spec, generation) = {
            let mut state = self.inner.state.lock().await;
            state.generation += 1;
            (state.location.clone(), state.generation)
        };

        let now = Local::now().naive_local();
        let offline = self.inner.connectivity.borrow().is_offline();

        let Some(spec) = spec else {
            let message = Error::from(LocationError::NotConfigured)
                .user_message(self.inner.language)
                .to_string();
            let view =
                self.assemble(SessionState::Error, None, None, offline, false, Some(message), now);
            self.inner.view_tx.send_replace(view);
            return Ok(());
        };

        // Stale-while-revalidate: keep the previous table visible while
        // the load is in flight.
        let previous = self.view().record;
        let loading = self.assemble(
            SessionState::Loading,
            previous,
            Some(spec.clone()),
            offline,
            retrying,
            None,
            now,
        );
        self.inner.view_tx.send_replace(loading);

        if offline {
            let cached = self.inner.service.cached_current_day(now.date()).await?;
            let view = match cached {
                Some(record) => self.assemble(
                    SessionState::OfflineReady,
                    Some(record),
                    Some(spec),
                    true,
                    false,
                    Some(offline_banner(self.inner.language).to_string()),
                    now,
                ),
                None => self.assemble(
                    SessionState::Error,
                    None,
                    Some(spec),
                    true,
                    false,
                    Some(offline_unavailable(self.inner.language).to_string()),
                    now,
                ),
            };
            self.inner.view_tx.send_replace(view);
            return Ok(());
        }

        match self.inner.service.refresh_current(&spec, Utc::now()).await {
            Ok(record) => {
                if self.superseded(generation).await {
                    tracing::debug!("Discarding superseded fetch result");
                    return Ok(());
                }

                if let Err(err) = self.write_collaborator_snapshot(&record, &spec, now).await {
                    tracing::warn!("Failed to write collaborator snapshot: {err:?}");
                }

                let view = self.assemble(
                    SessionState::Ready,
                    Some(record),
                    Some(spec),
                    false,
                    false,
                    None,
                    now,
                );
                self.inner.view_tx.send_replace(view);
            }
            Err(err) => {
                tracing::error!("Timings load failed for {}: {err:?}", spec.display_city());

                if self.superseded(generation).await {
                    tracing::debug!("Discarding superseded fetch failure");
                    return Ok(());
                }

                // Retryable or not, the client has already exhausted its
                // budget; the only remaining fallback is the cache.
                let message = err.user_message(self.inner.language).to_string();
                let cached = self.inner.service.cached_current_day(now.date()).await?;
                let view = match cached {
                    Some(record) => self.assemble(
                        SessionState::OfflineReady,
                        Some(record),
                        Some(spec),
                        offline,
                        false,
                        Some(message),
                        now,
                    ),
                    None => self.assemble(
                        SessionState::Error,
                        None,
                        Some(spec),
                        offline,
                        false,
                        Some(message),
                        now,
                    ),
                };
                self.inner.view_tx.send_replace(view);
            }
        }

        Ok(())
    }

    async fn superseded(&self, generation: u64) -> bool {
        self.inner.state.lock().await.generation != generation
    }

    /// Builds a view with the derived next-event/countdown fields filled
    /// from `record`.
    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        state: SessionState,
        record: Option<DailyTimingsRecord>,
        location: Option<LocationSpec>,
        offline: bool,
        retrying: bool,
        message: Option<String>,
        now: NaiveDateTime,
    ) -> SessionView {
        let next_event = record
            .as_ref()
            .and_then(|record| clock::next_event(&record.timings, now).ok().flatten());
        let countdown = next_event.map(|event| clock::countdown(event.at, now));
        let location = location.or_else(|| self.view().location);

        SessionView {
            state,
            record,
            location,
            next_event,
            countdown,
            offline,
            retrying,
            message,
        }
    }

    async fn write_collaborator_snapshot(
        &self,
        record: &DailyTimingsRecord,
        spec: &LocationSpec,
        now: NaiveDateTime,
    ) -> Result<(), Error> {
        let next_event = clock::next_event(&record.timings, now)?;
        let snapshot = CollaboratorSnapshot {
            timings: record.timings.clone(),
            city: spec.display_city().to_string(),
            country: spec.display_country().to_string(),
            next_event,
            next_event_name: next_event
                .map(|event| event.kind.display_name(self.inner.language).to_string()),
            countdown: next_event.map(|event| clock::countdown(event.at, now)),
            hijri: record.hijri.clone(),
            updated_at: now,
        };

        let raw = serde_json::to_string(&snapshot).map_err(|err| {
            Error::ParseError(format!("Failed to encode collaborator snapshot: {err}"))
        })?;

        self.inner
            .service
            .store()
            .put(key::COLLABORATOR_SNAPSHOT, &raw)
            .await
    }

    /// Starts the 1 s countdown ticker. Idempotent: an already-running
    /// ticker is replaced.
    pub async fn start_ticker(&self) {
        let mut guard = self.inner.ticker.lock().await;
        if let Some(handle) = guard.take() {
            handle.abort();
        }

        let session = self.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                session.tick();
            }
        });

        *guard = Some(handle);
    }

    /// Stops the countdown ticker.
    pub async fn stop_ticker(&self) {
        if let Some(handle) = self.inner.ticker.lock().await.take() {
            handle.abort();
        }
    }

    /// One ticker pass: recompute the countdown, and when the tracked event
    /// has just passed, roll the pointer forward and trigger a refresh.
    /// Side-effect-light and idempotent; it fires every second for the
    /// session's lifetime.
    fn tick(&self) {
        let view = self.view();
        if !matches!(
            view.state,
            SessionState::Ready | SessionState::OfflineReady
        ) {
            return;
        }
        let Some(record) = view.record.as_ref() else {
            return;
        };

        let now = Local::now().naive_local();

        match view.next_event {
            Some(event) if event.at > now => {
                let mut updated = view.clone();
                updated.countdown = Some(clock::countdown(event.at, now));
                self.inner.view_tx.send_replace(updated);
            }
            tracked => {
                // The event just occurred (or none was derived yet): move
                // the pointer forward and, on a true rollover, re-fetch so
                // the table follows the calendar day.
                let rolled_over = tracked.is_some();
                let next_event = clock::next_event(&record.timings, now).ok().flatten();

                let mut updated = view.clone();
                updated.next_event = next_event;
                updated.countdown = next_event.map(|event| clock::countdown(event.at, now));
                self.inner.view_tx.send_replace(updated);

                if rolled_over {
                    let session = self.clone();
                    tokio::spawn(async move {
                        if let Err(err) = session.refresh().await {
                            tracing::error!("Rollover refresh failed: {err:?}");
                        }
                    });
                }
            }
        }
    }
}
