//! Prayer time resolution and countdown engine.
//!
//! This crate resolves a location to daily prayer timings, keeps those
//! timings cached with an offline-tolerant freshness policy, and derives the
//! next fasting-relevant event (Sahur or İftar) together with a live
//! countdown. The engine is headless: notification schedulers, widgets, and
//! UI shells consume the [`session::PrayerSession`] view and the shared
//! calculator in [`service::clock`] rather than computing times themselves.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod session;
