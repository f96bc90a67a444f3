//! Lenient date parsing for request bodies
//!
//! Clients send dates either as a calendar date (`1990-01-15`) or as a full
//! RFC 3339 timestamp (`1990-01-15T00:00:00.000Z`, what `Date.toJSON()`
//! produces). Both forms are accepted wherever a date is read.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of a date-only or timestamp value. Timestamps keep their
/// UTC date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}

/// Instant of a timestamp or date-only value. A bare date is midnight UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| Utc.from_utc_datetime(&midnight))
        })
}

/// `deserialize_with` for `Option<NaiveDate>` fields
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_date(&raw).ok_or_else(|| de::Error::custom(format!("fecha inválida: {}", raw)))
        })
        .transpose()
}

/// `deserialize_with` for `Option<DateTime<Utc>>` fields
pub fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_datetime(&raw)
                .ok_or_else(|| de::Error::custom(format!("fecha inválida: {}", raw)))
        })
        .transpose()
}
