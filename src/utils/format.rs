use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{self, de::Error, Deserialize, Deserializer, Serializer};

const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp as ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T10:20:30.123Z`.
pub fn format_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Date part only, used in export file names
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Human readable timestamp for terminal output
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(LEGACY_FORMAT).to_string()
}

pub fn parse_iso(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(err) => NaiveDateTime::parse_from_str(s, LEGACY_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| err),
    }
}

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_iso(&s).map_err(Error::custom)
}

/// Join tags for display, e.g. `rust, cli`
pub fn format_tags_comma(tags: &[String]) -> String {
    tags.join(", ")
}

/// Join tags as hashtags, e.g. `#rust #cli`
pub fn format_tags_hash(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate on a char boundary and append an ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let single_line = s.replace('\n', " ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let truncated: String = single_line.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
