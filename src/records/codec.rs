//! Text codecs for the columns the store keeps as plain text.
//!
//! `images_c` holds one URL per line and `features_c` a comma separated
//! list. Blank segments are dropped on decode, so an empty list encodes to
//! `""` and decodes back to an empty list.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

const IMAGE_SEPARATOR: &str = "\n";
const FEATURE_SEPARATOR: &str = ",";

pub fn encode_images(images: &[String]) -> String {
    images.join(IMAGE_SEPARATOR)
}

pub fn decode_images(text: &str) -> Vec<String> {
    text.split(IMAGE_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn encode_features(features: &[String]) -> String {
    features.join(FEATURE_SEPARATOR)
}

pub fn decode_features(text: &str) -> Vec<String> {
    text.split(FEATURE_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn encode_listing_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a stored listing date, accepting full RFC 3339 as well as naive
/// date-times and bare dates (both read as UTC).
pub fn parse_listing_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Stored listing date, or now when it is missing or unreadable
pub fn decode_listing_date(text: Option<&str>) -> DateTime<Utc> {
    match text.filter(|t| !t.trim().is_empty()) {
        Some(text) => parse_listing_date(text).unwrap_or_else(|| {
            warn!("Unreadable listing date {:?}, using current time", text);
            Utc::now()
        }),
        None => Utc::now(),
    }
}

// The column deserializers below never fail: a value of the wrong shape is
// logged and read as absent, so one odd column zeroes that field only.

/// Integer column that may arrive as a float (`3.0`) or numeric text.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(lenient_number(value, "integer").map(|n| match n {
        Number::Int(i) => i,
        Number::Float(f) => f.trunc() as i64,
    }))
}

/// Decimal column that may arrive as numeric text (`"450000"`).
pub fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(lenient_number(value, "number").map(|n| match n {
        Number::Int(i) => i as f64,
        Number::Float(f) => f,
    }))
}

/// Text column that may arrive as a JSON number (zip codes, mostly).
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            warn!("Ignoring non-text column value {}", other);
            None
        }
    })
}

enum Number {
    Int(i64),
    Float(f64),
}

fn lenient_number(value: Option<Value>, expected: &str) -> Option<Number> {
    let number = match &value {
        None | Some(Value::Null) => return None,
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Number::Int)
            .or_else(|| n.as_f64().map(Number::Float)),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>()
                .map(Number::Int)
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Float))
        }
        Some(_) => None,
    };

    if number.is_none() {
        if let Some(value) = value {
            warn!("Ignoring column value {}, expected {}", value, expected);
        }
    }
    number
}
