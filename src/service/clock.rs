//! Next-event and countdown calculation.
//!
//! Pure wall-clock arithmetic over a day's timing table. This is the single
//! shared calculator: the session view, the collaborator snapshot, and any
//! notification scheduler all derive their "next event" from here, so the
//! in-app countdown and independently rendered surfaces cannot drift.

use chrono::{NaiveDateTime, NaiveTime};

use crate::error::Error;
use crate::model::{Countdown, EventKind, NextEvent, Timings};

/// Parses a provider `HH:mm` clock string.
pub fn parse_clock(value: &str) -> Result<NaiveTime, Error> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| Error::ParseError(format!("Invalid clock value: {value:?}")))
}

/// Normalizes a clock string for display, passing unparseable input through
/// unchanged.
pub fn format_clock(value: &str) -> String {
    match parse_clock(value) {
        Ok(time) => time.format("%H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Computes the next fasting-relevant event after `now`.
///
/// Candidates are Fajr and Maghrib on `now`'s calendar day plus Fajr on
/// the following day; the earliest candidate strictly after `now` wins.
/// Between Maghrib and midnight this naturally selects tomorrow's Fajr
/// without special-casing the rollover.
///
/// # Returns
/// - `Ok(Some(event))` - the next event and its wall-clock instant
/// - `Ok(None)` - unreachable by construction (tomorrow's Fajr is always in
///   the future); callers may treat it as defensive
/// - `Err(Error::ParseError)` - a timing field is not `HH:mm`; cannot occur
///   for records validated by the provider client
pub fn next_event(timings: &Timings, now: NaiveDateTime) -> Result<Option<NextEvent>, Error> {
    let today = now.date();
    let tomorrow = today
        .succ_opt()
        .ok_or_else(|| Error::ParseError("Date overflow computing tomorrow".to_string()))?;

    let fajr = parse_clock(&timings.fajr)?;
    let maghrib = parse_clock(&timings.maghrib)?;

    let candidates = [
        NextEvent {
            kind: EventKind::Fajr,
            at: today.and_time(fajr),
        },
        NextEvent {
            kind: EventKind::Maghrib,
            at: today.and_time(maghrib),
        },
        NextEvent {
            kind: EventKind::Fajr,
            at: tomorrow.and_time(fajr),
        },
    ];

    Ok(candidates
        .into_iter()
        .filter(|event| event.at > now)
        .min_by_key(|event| event.at))
}

/// Computes the time remaining from `now` until `target`.
///
/// Pure and clamped: a target at or before `now` yields all zeros, which is
/// the caller's signal that the event has passed and a refresh is due.
pub fn countdown(target: NaiveDateTime, now: NaiveDateTime) -> Countdown {
    let total_seconds = (target - now).num_seconds().max(0);

    Countdown {
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
        total_seconds,
    }
}
