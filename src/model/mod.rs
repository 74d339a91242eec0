//! Domain types shared across the engine: timing tables, location
//! specifications, and the derived next-event/countdown values.

pub mod location;
pub mod snapshot;
pub mod timings;

pub use location::{Coordinates, LocationSpec};
pub use snapshot::{CollaboratorSnapshot, Countdown, EventKind, NextEvent};
pub use timings::{DailyTimingsRecord, HijriDate, Timings, TimingsMeta};
