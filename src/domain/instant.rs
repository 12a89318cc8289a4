//! Textual instant format shared by the parser and the report:
//! `YYYY-MM-DDTHH:MM:SS.mmmZ`.
//!
//! Usable as `#[serde(with = "crate::domain::instant")]`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn format(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse millisecond-precision UTC text. Returns `None` for anything that is
/// not a real calendar instant, e.g. `2024-02-30T00:00:00.000Z`.
///
/// Second `60` is rejected: chrono would accept it as a leap second in any
/// minute.
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, INSTANT_FORMAT)
        .ok()
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(instant))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid instant '{text}'")))
}
