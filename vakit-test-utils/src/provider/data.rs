//! Canned provider payloads modeled on the real timings API envelope.

use chrono::NaiveDate;
use serde_json::json;

use crate::constant::{
    TEST_ASR, TEST_DHUHR, TEST_FAJR, TEST_ISHA, TEST_LATITUDE, TEST_LONGITUDE, TEST_MAGHRIB,
    TEST_METHOD_ID, TEST_SUNRISE, TEST_TIMEZONE,
};

/// The `data` object of a successful response for `date`.
pub fn timings_data(date: NaiveDate) -> serde_json::Value {
    json!({
        "timings": {
            "Fajr": TEST_FAJR,
            "Sunrise": TEST_SUNRISE,
            "Dhuhr": TEST_DHUHR,
            "Asr": TEST_ASR,
            "Sunset": TEST_MAGHRIB,
            "Maghrib": TEST_MAGHRIB,
            "Isha": TEST_ISHA,
            "Imsak": "04:50",
            "Midnight": "00:37"
        },
        "date": {
            "readable": date.format("%d %b %Y").to_string(),
            "timestamp": "1710489600",
            "gregorian": {
                "date": date.format("%d-%m-%Y").to_string(),
                "day": date.format("%d").to_string(),
                "month": { "number": 3, "en": "March" },
                "year": date.format("%Y").to_string()
            },
            "hijri": {
                "date": "05-09-1445",
                "day": "5",
                "month": { "number": 9, "en": "Ramaḍān", "ar": "رمضان" },
                "year": "1445"
            }
        },
        "meta": {
            "latitude": TEST_LATITUDE,
            "longitude": TEST_LONGITUDE,
            "timezone": TEST_TIMEZONE,
            "method": {
                "id": TEST_METHOD_ID,
                "name": "Islamic Society of North America (ISNA)",
                "params": { "Fajr": 15, "Isha": 15 }
            }
        }
    })
}

/// A complete successful response body for `date`.
pub fn success_body(date: NaiveDate) -> String {
    json!({
        "code": 200,
        "status": "OK",
        "data": timings_data(date)
    })
    .to_string()
}

/// An HTTP-200 body whose envelope reports a logical failure.
pub fn logical_failure_body(code: u16, status: &str) -> String {
    json!({
        "code": code,
        "status": status,
        "data": format!("{status}")
    })
    .to_string()
}

/// A structurally broken success body: the Maghrib field is missing.
pub fn body_missing_maghrib(date: NaiveDate) -> String {
    let mut data = timings_data(date);
    data["timings"]
        .as_object_mut()
        .unwrap()
        .remove("Maghrib");

    json!({ "code": 200, "status": "OK", "data": data }).to_string()
}

/// A success body whose Fajr value is not a clock string.
pub fn body_with_invalid_clock(date: NaiveDate) -> String {
    let mut data = timings_data(date);
    data["timings"]["Fajr"] = json!("dawn");

    json!({ "code": 200, "status": "OK", "data": data }).to_string()
}
