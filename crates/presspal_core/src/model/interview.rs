//! Interview domain model.
//!
//! # Invariants
//! - `Header` and `Location` are never blank.
//! - Two interviews with equal header and date-time are the "same
//!   interview"; a contact book never holds both.

use crate::model::field::{is_non_blank, string_value};
use crate::model::unique_list::Identity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Display format for interview date-times.
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

string_value! {
    /// Short title of an interview.
    Header {
        field: "header",
        constraint: "Headers can take any values, and it should not be blank",
        check: is_non_blank,
    }
}

string_value! {
    /// Where an interview takes place.
    Location {
        field: "location",
        constraint: "Locations can take any values, and it should not be blank",
        check: is_non_blank,
    }
}

/// A scheduled interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub header: Header,
    pub location: Location,
    pub date_time: NaiveDateTime,
}

impl Interview {
    pub fn new(header: Header, location: Location, date_time: NaiveDateTime) -> Self {
        Self {
            header,
            location,
            date_time,
        }
    }
}

impl Identity for Interview {
    fn is_same(&self, other: &Self) -> bool {
        self.header == other.header && self.date_time == other.date_time
    }
}

impl Display for Interview {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Location: {}; Date/Time: {}",
            self.header,
            self.location,
            self.date_time.format(DATE_TIME_DISPLAY_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Header, Interview, Location};
    use crate::model::unique_list::Identity;
    use chrono::NaiveDate;

    fn demo() -> Interview {
        let date_time = NaiveDate::from_ymd_opt(2024, 10, 10)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .unwrap();
        Interview::new(
            Header::new("Demo").unwrap(),
            Location::new("Room 1").unwrap(),
            date_time,
        )
    }

    #[test]
    fn blank_header_and_location_are_rejected() {
        assert!(Header::new("").is_err());
        assert!(Header::new("  Demo").is_err());
        assert!(Location::new("").is_err());
        assert!(Location::new("123, Business St, #02-25").is_ok());
    }

    #[test]
    fn same_interview_ignores_location() {
        let mut moved = demo();
        moved.location = Location::new("Room 2").unwrap();
        assert!(demo().is_same(&moved));
        assert_ne!(demo(), moved);
    }

    #[test]
    fn display_uses_minute_precision() {
        assert_eq!(
            demo().to_string(),
            "Demo; Location: Room 1; Date/Time: 2024-10-10 09:00"
        );
    }

    #[test]
    fn serializes_date_time_as_iso_string() {
        let json = serde_json::to_value(demo()).unwrap();
        assert_eq!(json["header"], "Demo");
        assert_eq!(json["location"], "Room 1");
        assert_eq!(json["date_time"], "2024-10-10T09:00:00");

        let decoded: Interview = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, demo());
    }
}
