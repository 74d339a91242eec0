//! Clock values shared by fixtures and assertions.

pub const TEST_FAJR: &str = "05:00";
pub const TEST_SUNRISE: &str = "06:30";
pub const TEST_DHUHR: &str = "12:30";
pub const TEST_ASR: &str = "16:00";
pub const TEST_MAGHRIB: &str = "18:45";
pub const TEST_ISHA: &str = "20:00";

pub const TEST_LATITUDE: f64 = 41.0082;
pub const TEST_LONGITUDE: f64 = 28.9784;
pub const TEST_TIMEZONE: &str = "Europe/Istanbul";
pub const TEST_METHOD_ID: u32 = 2;
