use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::Language;

use super::timings::{HijriDate, Timings};

/// The two canonical events the countdown tracks.
///
/// The intermediate events (Sunrise, Dhuhr, Asr, Isha) appear in timing
/// tables but never drive the countdown; the product surface only cares
/// about the fasting boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Dawn: the pre-dawn meal (Sahur) cutoff.
    Fajr,
    /// Sunset: the fast-breaking moment (İftar).
    Maghrib,
}

impl EventKind {
    /// Localized display name for this event.
    pub fn display_name(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Fajr, _) => "Sahur",
            (Self::Maghrib, Language::Turkish) => "İftar",
            (Self::Maghrib, Language::English) => "Iftar",
        }
    }
}

/// The next upcoming event relative to some reference instant.
///
/// Ephemeral and derived: recomputed on every tick, never persisted as an
/// owned entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NextEvent {
    /// Which event comes next.
    pub kind: EventKind,
    /// The wall-clock instant it occurs.
    pub at: NaiveDateTime,
}

/// Time remaining until a target instant, decomposed for display.
///
/// Never negative; a clamped zero signals that the event has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Whole hours remaining.
    pub hours: i64,
    /// Whole minutes remaining after `hours`.
    pub minutes: i64,
    /// Seconds remaining after `minutes`.
    pub seconds: i64,
    /// Total remaining seconds.
    pub total_seconds: i64,
}

/// The resolved surface handed to notification and widget collaborators.
///
/// Both collaborators previously computed their own next event; they now
/// consume this snapshot, produced with the shared calculator in
/// [`crate::service::clock`], so the in-app countdown and the widget's can
/// never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorSnapshot {
    /// The full six-event table for the snapshot's day.
    pub timings: Timings,
    /// City display name of the active location.
    pub city: String,
    /// Country display name of the active location.
    pub country: String,
    /// The next fasting-relevant event, if computable.
    pub next_event: Option<NextEvent>,
    /// Localized display name of `next_event`.
    pub next_event_name: Option<String>,
    /// Countdown to `next_event` at `updated_at`.
    pub countdown: Option<Countdown>,
    /// Hijri date for display, when available.
    pub hijri: Option<HijriDate>,
    /// Wall-clock instant this snapshot was produced.
    pub updated_at: NaiveDateTime,
}
