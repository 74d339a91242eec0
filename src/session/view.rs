use crate::model::{Countdown, DailyTimingsRecord, LocationSpec, NextEvent};

/// Orchestrator lifecycle state.
///
/// `Error` blocks rendering of time-dependent content; `OfflineReady`
/// carries valid timings alongside a non-blocking informational message.
/// That distinction governs whether the primary countdown surface remains
/// usable and must be preserved by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded yet and no load in flight.
    Idle,
    /// A fetch (or cache substitution) is in flight.
    Loading,
    /// Fresh timings from the provider.
    Ready,
    /// Cached timings substituting for a fetch, with an informational
    /// banner.
    OfflineReady,
    /// No timings available at all; blocking message with a manual retry
    /// affordance.
    Error,
}

/// The stable view the orchestrator exposes to consumers.
///
/// Published through a watch channel; every field is a snapshot, so
/// consumers never reach back into the orchestrator for state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    /// Lifecycle state.
    pub state: SessionState,
    /// The current day's timings, when any are available. Retained while a
    /// refresh is in flight so consumers keep rendering the previous table.
    pub record: Option<DailyTimingsRecord>,
    /// The active location selection.
    pub location: Option<LocationSpec>,
    /// Next fasting-relevant event, recomputed every tick.
    pub next_event: Option<NextEvent>,
    /// Countdown to `next_event`, recomputed every tick.
    pub countdown: Option<Countdown>,
    /// Whether the connectivity signal currently reports offline.
    pub offline: bool,
    /// Whether the in-flight load was triggered by an explicit retry.
    pub retrying: bool,
    /// Localized user-facing message: blocking when `state` is `Error`,
    /// informational when `state` is `OfflineReady`.
    pub message: Option<String>,
}

impl SessionView {
    /// The view before anything has happened.
    pub fn idle() -> Self {
        Self {
            state: SessionState::Idle,
            record: None,
            location: None,
            next_event: None,
            countdown: None,
            offline: false,
            retrying: false,
            message: None,
        }
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::idle()
    }
}
