use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use hours_core::{MINUTES_PER_HOUR, TimeOfDay};
use regex::Regex;

static HOURS_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)h").expect("valid hours pattern"));
static MINUTES_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)min").expect("valid minutes pattern"));

/// Parses `H:MM` / `HH:MM` (24h). Anything else is treated as not logged.
pub fn parse_time_of_day(raw: &str) -> Option<TimeOfDay> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M").ok()?;
    TimeOfDay::new(parsed.hour() as u8, parsed.minute() as u8)
}

/// Renders minutes as `"{h}h {m}min"`; negative values get one leading `-`.
pub fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let magnitude = minutes.unsigned_abs();
    let per_hour = u64::from(MINUTES_PER_HOUR);
    format!(
        "{}{}h {}min",
        sign,
        magnitude / per_hour,
        magnitude % per_hour
    )
}

fn segment_value(pattern: &Regex, raw: &str) -> i64 {
    pattern
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .and_then(|value| value.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Inverse of [`format_minutes`]. Missing or unparseable segments count as zero.
pub fn parse_duration_text(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let hours = segment_value(&HOURS_SEGMENT, trimmed);
    let minutes = segment_value(&MINUTES_SEGMENT, trimmed);
    let total = hours
        .saturating_mul(i64::from(MINUTES_PER_HOUR))
        .saturating_add(minutes);
    if trimmed.starts_with('-') {
        -total
    } else {
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unpadded_and_padded_hours() {
        assert_eq!(parse_time_of_day("9:25"), TimeOfDay::new(9, 25));
        assert_eq!(parse_time_of_day("09:25"), TimeOfDay::new(9, 25));
        assert_eq!(parse_time_of_day(" 14:10 "), TimeOfDay::new(14, 10));
        assert_eq!(parse_time_of_day("0:00"), TimeOfDay::new(0, 0));
    }

    #[test]
    fn malformed_times_are_absent() {
        assert_eq!(parse_time_of_day(""), None);
        assert_eq!(parse_time_of_day("25:00"), None);
        assert_eq!(parse_time_of_day("9:75"), None);
        assert_eq!(parse_time_of_day("nine"), None);
        assert_eq!(parse_time_of_day("9:25:00"), None);
    }

    #[test]
    fn formats_positive_and_negative_minutes() {
        assert_eq!(format_minutes(0), "0h 0min");
        assert_eq!(format_minutes(285), "4h 45min");
        assert_eq!(format_minutes(180), "3h 0min");
        assert_eq!(format_minutes(-135), "-2h 15min");
        assert_eq!(format_minutes(-45), "-0h 45min");
    }

    #[test]
    fn parses_partial_and_signed_text() {
        assert_eq!(parse_duration_text("4h 30min"), 270);
        assert_eq!(parse_duration_text("2h"), 120);
        assert_eq!(parse_duration_text("45min"), 45);
        assert_eq!(parse_duration_text("-2h 15min"), -135);
        assert_eq!(parse_duration_text(" -0h 45min"), -45);
    }

    #[test]
    fn unparseable_text_counts_as_zero() {
        assert_eq!(parse_duration_text(""), 0);
        assert_eq!(parse_duration_text("a while"), 0);
        assert_eq!(parse_duration_text("xh 20min"), 20);
    }
}
