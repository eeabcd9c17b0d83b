//! Field-level parsers shared by command parsers.
//!
//! All inputs are trimmed before validation.

use crate::index::Index;
use crate::model::FieldError;
use crate::parser::{ParseError, ParseResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// chrono accepts unpadded and signed fields; the user-facing format does not.
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static TIME_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

/// Parses a one-based index. Only plain digits are accepted, so `+1`,
/// `-1` and `0` are rejected.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parses one value object from raw text.
pub fn parse_value<T>(raw: &str) -> ParseResult<T>
where
    T: TryFrom<String, Error = FieldError>,
{
    T::try_from(raw.trim().to_string()).map_err(ParseError::from)
}

/// Parses every raw value into a set of value objects.
pub fn parse_values<T>(raw: &[String]) -> ParseResult<BTreeSet<T>>
where
    T: TryFrom<String, Error = FieldError> + Ord,
{
    raw.iter().map(|value| parse_value(value)).collect()
}

/// Combines `yyyy-MM-dd` and `HH:mm` into one calendar instant.
///
/// Every field must be zero-padded to its full width.
pub fn parse_date_time(date: &str, time: &str) -> ParseResult<NaiveDateTime> {
    let (date, time) = (date.trim(), time.trim());
    let invalid = || ParseError::InvalidDateTime {
        date: date.to_string(),
        time: time.to_string(),
    };
    if !DATE_SHAPE_RE.is_match(date) || !TIME_SHAPE_RE.is_match(time) {
        return Err(invalid());
    }
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid())?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| invalid())?;
    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::{parse_date_time, parse_index, parse_value, parse_values};
    use crate::index::Index;
    use crate::model::{Category, Name};
    use crate::parser::ParseError;
    use chrono::NaiveDate;

    #[test]
    fn parse_index_accepts_padded_positive_integers() {
        assert_eq!(parse_index("  1 "), Ok(Index::from_zero_based(0)));
        assert_eq!(parse_index("12"), Ok(Index::from_zero_based(11)));
    }

    #[test]
    fn parse_index_rejects_non_positive_and_signed_values() {
        for raw in ["", "0", "-1", "+1", "1 2", "a", "99999999999999999999999"] {
            assert_eq!(parse_index(raw), Err(ParseError::InvalidIndex), "input: {raw:?}");
        }
    }

    #[test]
    fn parse_value_trims_before_validation() {
        let name: Name = parse_value("  Rachel Walker ").unwrap();
        assert_eq!(name.as_str(), "Rachel Walker");

        let err = parse_value::<Name>("R@chel").unwrap_err();
        assert!(matches!(err, ParseError::InvalidField(field) if field.field == "name"));
    }

    #[test]
    fn parse_values_deduplicates() {
        let raw = vec!["media".to_string(), "media".to_string(), "press".to_string()];
        let categories = parse_values::<Category>(&raw).unwrap();
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn parse_date_time_combines_fields() {
        let expected = NaiveDate::from_ymd_opt(2024, 10, 10)
            .and_then(|date| date.and_hms_opt(14, 0, 0))
            .unwrap();
        assert_eq!(parse_date_time(" 2024-10-10 ", "14:00"), Ok(expected));
    }

    #[test]
    fn parse_date_time_rejects_impossible_instants() {
        assert!(parse_date_time("2024-02-30", "10:00").is_err());
        assert!(parse_date_time("2023-02-29", "10:00").is_err());
        assert!(parse_date_time("2024-10-10", "24:00").is_err());
        assert!(parse_date_time("10/10/2024", "10:00").is_err());
        assert!(parse_date_time("2024-10-10", "2pm").is_err());
    }

    #[test]
    fn parse_date_time_requires_padded_fields() {
        for (date, time) in [
            ("2024-1-5", "09:00"),
            ("2024-10-5", "09:00"),
            ("+2024-10-10", "09:00"),
            ("20240-10-10", "09:00"),
            ("2024-10-10", "9:00"),
            ("2024-10-10", "9:5"),
            ("2024-10-10", "09:00:00"),
        ] {
            assert_eq!(
                parse_date_time(date, time),
                Err(ParseError::InvalidDateTime {
                    date: date.to_string(),
                    time: time.to_string(),
                }),
                "input: {date} {time}"
            );
        }
    }
}
