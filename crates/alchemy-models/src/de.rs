//! Serde helpers for the service's wire-format quirks.
//!
//! The API quotes most numbers (`"score": "0.89"`), stamps publication dates
//! as compact `yyyymmddThhmmss` strings, and collapses some objects to bare
//! strings. These helpers normalize those shapes during deserialization.

use chrono::NaiveDateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format of publication dates, e.g. `20160128T124214`.
pub(crate) const COMPACT_DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Deserialize an `f64` that may arrive as a JSON number or a quoted number.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            s.trim().parse().map(Some).map_err(|_| D::Error::custom(format!("invalid number: {s:?}")))
        }
    }
}

/// Deserialize an `i64` that may arrive as a JSON number or a quoted number.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            s.trim().parse().map(Some).map_err(|_| D::Error::custom(format!("invalid integer: {s:?}")))
        }
    }
}

fn parse_compact_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(trimmed, COMPACT_DATE_FORMAT).ok()
}

/// Deserialize a compact timestamp, yielding `None` on anything unparseable.
///
/// A malformed date must not abort the enclosing document; the field is
/// dropped and the loss is logged.
pub(crate) fn lenient_compact_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|value| {
        let parsed = parse_compact_date(value);
        if parsed.is_none() {
            tracing::debug!(value, "dropping unparseable publication date");
        }
        parsed
    }))
}

/// Serialize a date back into the service's compact timestamp form.
pub(crate) fn compact_date<S>(
    date: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => {
            serializer.serialize_str(&date.format(COMPACT_DATE_FORMAT).to_string())
        }
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_compact_date() {
        let parsed = parse_compact_date("20160128T124214").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2016, 1, 28).unwrap());
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (12, 42, 14));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_compact_date("").is_none());
        assert!(parse_compact_date("   ").is_none());
        assert!(parse_compact_date("not-a-date").is_none());
        assert!(parse_compact_date("2016-01-28").is_none());
        assert!(parse_compact_date("20161301T000000").is_none());
    }

    #[test]
    fn compact_date_roundtrips_through_format() {
        let parsed = parse_compact_date("20150624T235959").unwrap();
        assert_eq!(parsed.format(COMPACT_DATE_FORMAT).to_string(), "20150624T235959");
    }
}
