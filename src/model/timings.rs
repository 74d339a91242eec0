use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The six canonical wall-clock times of one calendar day, as `HH:mm`
/// strings in the location's local time zone.
///
/// Field names serialize capitalized to match the provider payload. The
/// values are strictly increasing within a day; this is a provider
/// invariant and is not re-validated here. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Timings {
    /// Dawn (İmsak/Sahur cutoff).
    pub fajr: String,
    /// Sunrise.
    pub sunrise: String,
    /// Noon.
    pub dhuhr: String,
    /// Afternoon.
    pub asr: String,
    /// Sunset (İftar).
    pub maghrib: String,
    /// Night.
    pub isha: String,
}

/// Provider metadata describing how a timings table was calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingsMeta {
    /// Latitude the provider calculated for.
    pub latitude: f64,
    /// Longitude the provider calculated for.
    pub longitude: f64,
    /// IANA time zone name reported by the provider.
    pub timezone: String,
    /// Calculation-method identifier.
    pub method_id: u32,
}

/// Hijri calendar date strings forwarded from the provider for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    /// Day of month.
    pub day: String,
    /// Month name, English transliteration.
    pub month_en: String,
    /// Month name, Arabic script.
    pub month_ar: String,
    /// Hijri year.
    pub year: String,
}

/// One successfully fetched day of timings.
///
/// Identity is `(location key, date)`. Records are read-only after creation
/// and superseded, never mutated, by a newer fetch for the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTimingsRecord {
    /// The six canonical times.
    pub timings: Timings,
    /// Gregorian calendar day the table belongs to.
    pub date: NaiveDate,
    /// Hijri date for display, when the provider supplied one.
    pub hijri: Option<HijriDate>,
    /// Calculation metadata.
    pub meta: TimingsMeta,
}
