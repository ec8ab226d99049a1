//! Conversions between log text tokens and typed values.
//!
//! Lap logs use a Brazilian layout: comma as decimal separator and
//! durations written as `M:SS.mmm`.

use crate::utils::config::{TIME_FORMAT, TIME_PARSE_FORMAT};
use crate::utils::error::ParseError;
use chrono::{Duration, NaiveTime};

/// Parse a time of day in `HH:MM:SS.mmm` form
pub fn parse_time(value: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(value, TIME_PARSE_FORMAT)
        .map_err(|_| ParseError::InvalidTime(value.to_string()))
}

/// Render a time of day as `HH:MM:SS.mmm`
pub fn serialize_time(value: &NaiveTime) -> String {
    value.format(TIME_FORMAT).to_string()
}

/// Parse a lap duration written as `[[H:]M:]SS.mmm`.
///
/// Minutes are a raw count and may exceed 59. A fraction shorter than three
/// digits is read as a decimal fraction (`.55` is 550ms); digits past the
/// third are dropped.
pub fn parse_duration(value: &str) -> Result<Duration, ParseError> {
    let invalid = || ParseError::InvalidDuration(value.to_string());

    let mut parts: Vec<&str> = value.split(':').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }

    let tail = parts.pop().ok_or_else(invalid)?;
    let (seconds, fraction) = tail.split_once('.').unwrap_or((tail, ""));
    let seconds = parse_digits(seconds).ok_or_else(invalid)?;
    let millis = parse_fraction(fraction).ok_or_else(invalid)?;

    // Implicit hours in front: "M:SS.mmm" reads as "00:M:SS.mmm"
    let mut total_minutes = 0i64;
    for part in parts {
        let unit = parse_digits(part).ok_or_else(invalid)?;
        total_minutes = total_minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(unit))
            .ok_or_else(invalid)?;
    }

    total_minutes
        .checked_mul(60_000)
        .and_then(|ms| ms.checked_add(seconds.checked_mul(1_000)?))
        .and_then(|ms| ms.checked_add(millis))
        .and_then(Duration::try_milliseconds)
        .ok_or_else(invalid)
}

/// Render a duration as `M:SS.mmm` with unpadded total minutes
pub fn serialize_duration(value: &Duration) -> String {
    let total = value.num_milliseconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    format!(
        "{}{}:{:02}.{:03}",
        sign,
        total / 60_000,
        (total / 1_000) % 60,
        total % 1_000
    )
}

/// Parse a decimal written with a comma separator (`44,275`)
pub fn parse_number(value: &str) -> Result<f64, ParseError> {
    value
        .replacen(',', ".", 1)
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}

/// Render a decimal with a comma separator, shortest form
pub fn serialize_number(value: f64) -> String {
    value.to_string().replace('.', ",")
}

/// Render a decimal with a comma separator and a fixed number of decimals
pub fn serialize_number_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value).replace('.', ",")
}

/// Signed difference between two times of day
pub fn elapsed(start: &NaiveTime, end: &NaiveTime) -> Duration {
    end.signed_duration_since(*start)
}

fn parse_digits(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn parse_fraction(value: &str) -> Option<i64> {
    if value.is_empty() {
        return Some(0);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut millis: String = value.chars().take(3).collect();
    while millis.len() < 3 {
        millis.push('0');
    }
    millis.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        let time = parse_time("23:49:08.277").unwrap();
        assert_eq!(time, NaiveTime::from_hms_milli_opt(23, 49, 8, 277).unwrap());
        assert_eq!(serialize_time(&time), "23:49:08.277");
    }

    #[test]
    fn test_parse_time_rejects_out_of_range() {
        assert_eq!(
            parse_time("25:00:00.000"),
            Err(ParseError::InvalidTime("25:00:00.000".to_string()))
        );
    }

    #[test]
    fn test_parse_duration_minutes_and_seconds() {
        let duration = parse_duration("1:02.999").unwrap();
        assert_eq!(duration.num_minutes(), 1);
        assert_eq!(duration.num_seconds() % 60, 2);
        assert_eq!(duration.num_milliseconds() % 1000, 999);
    }

    #[test]
    fn test_parse_duration_without_minutes() {
        assert_eq!(parse_duration("58.100").unwrap().num_milliseconds(), 58_100);
    }

    #[test]
    fn test_parse_duration_short_fraction() {
        assert_eq!(parse_duration("1:50.55").unwrap().num_milliseconds(), 110_550);
    }

    #[test]
    fn test_parse_duration_minutes_past_the_hour() {
        let duration = parse_duration("75:00.000").unwrap();
        assert_eq!(duration.num_minutes(), 75);
        assert_eq!(serialize_duration(&duration), "75:00.000");
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("1:xx.000").is_err());
        assert!(parse_duration("1:2:3:4.000").is_err());
    }

    #[test]
    fn test_serialize_duration() {
        assert_eq!(serialize_duration(&Duration::milliseconds(62_852)), "1:02.852");
        assert_eq!(serialize_duration(&Duration::milliseconds(5_117)), "0:05.117");
        assert_eq!(serialize_duration(&Duration::milliseconds(-5_117)), "-0:05.117");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_number("44,275").unwrap(), 44.275);
        assert_eq!(parse_number("35").unwrap(), 35.0);
        assert!(parse_number("1,2,3").is_err());
        assert_eq!(serialize_number(44.275), "44,275");
        assert_eq!(serialize_number_fixed(43.5, 3), "43,500");
    }

    #[test]
    fn test_elapsed() {
        let start = parse_time("23:52:17.003").unwrap();
        let end = parse_time("23:52:22.120").unwrap();

        let gap = elapsed(&start, &end);

        assert_eq!(gap.num_minutes(), 0);
        assert_eq!(gap.num_seconds(), 5);
        assert_eq!(gap.num_milliseconds() % 1000, 117);
    }
}
