pub mod cli;
mod config;
mod consts;
mod input;
pub mod logging;
mod prelude;
mod resolver;
mod types;

pub use config::{Config, ConfigError, DEFAULTS, load_config};
pub use consts::*;
pub use input::{RawDateInput, Separator};
pub use resolver::{DateOrder, DateResolver, Resolution};
pub use types::{CalendarError, Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A validated proleptic Gregorian date with a year in `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Why a date string could not be resolved. Each variant is one reason code.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "date string is empty")]
    EmptyInput,
    #[display(fmt = "Unsupported date format: '{_0}'")]
    UnsupportedFormat(String),
    #[display(fmt = "Non-integer date component '{token}' in '{input}'")]
    NonIntegerComponent { token: String, input: String },
    #[display(fmt = "Year out of range: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(i64),
    #[display(fmt = "Invalid date: '{input}' ({reason})")]
    InvalidCalendarDate {
        input:  String,
        reason: CalendarError,
    },
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCalendarDate { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl ParseError {
    /// Stable reason code, suitable for matching in scripts and logs.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::UnsupportedFormat(_) => "UnsupportedFormat",
            Self::NonIntegerComponent { .. } => "NonIntegerComponent",
            Self::YearOutOfRange(_) => "YearOutOfRange",
            Self::InvalidCalendarDate { .. } => "InvalidCalendarDate",
        }
    }
}

impl CalendarDate {
    /// Builds a date from raw components, checking year, then month, then day.
    ///
    /// # Errors
    /// Returns the first `CalendarError` hit.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to plain columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

/// Parses `input` with the default (month-first when ambiguous) resolver.
/// `None` is treated like a blank string.
///
/// # Errors
/// See [`ParseError`].
pub fn parse_date<'a>(input: impl Into<Option<&'a str>>) -> Result<CalendarDate, ParseError> {
    DateResolver::default().parse(input)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i64, m: i64, d: i64) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_us_date() {
        let d = parse_date("01/31/2026").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2026, 1, 31));
    }

    #[test]
    fn test_parse_eu_date() {
        assert_eq!(parse_date("31/01/2026").unwrap(), date(2026, 1, 31));
        assert_eq!(parse_date("25/12/2025").unwrap(), date(2025, 12, 25));
        assert_eq!(parse_date("13/01/2026").unwrap(), date(2026, 1, 13));
    }

    #[test]
    fn test_parse_second_token_over_twelve() {
        assert_eq!(parse_date("12/25/2025").unwrap(), date(2025, 12, 25));
    }

    #[test]
    fn test_parse_ambiguous_defaults_to_us() {
        assert_eq!(parse_date("01/02/2026").unwrap(), date(2026, 1, 2));
    }

    #[test]
    fn test_ambiguous_round_trip() {
        for y in [1900, 1999, 2000, 2024, 2100] {
            for m in 1..=12u8 {
                let month = Month::try_from(m).unwrap();
                for d in 1..=12u8.min(days_in_month(y, month)) {
                    let input = format!("{m:02}/{d:02}/{y}");
                    let parsed = parse_date(input.as_str()).unwrap();
                    assert_eq!(parsed.to_columns(), (y, m, d), "{input}");
                }
            }
        }
    }

    #[test]
    fn test_dash_matches_slash() {
        for (dash, slash) in [
            ("15-06-2024", "15/06/2024"),
            ("06-15-2024", "06/15/2024"),
            ("03-04-2024", "03/04/2024"),
        ] {
            assert_eq!(parse_date(dash), parse_date(slash));
        }
        assert_eq!(parse_date("31-01-2026").unwrap(), date(2026, 1, 31));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_date("  06 / 15 / 2024 ").unwrap(), date(2024, 6, 15));
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(parse_date(input), Err(ParseError::EmptyInput));
        }
        assert_eq!(parse_date(None::<&str>), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_unsupported_format() {
        for input in ["20260131", "01.31.2026", "01/31", "01-31", "1/2/3/4", "2026-01-31-00"] {
            let err = parse_date(input).unwrap_err();
            assert_eq!(err.code(), "UnsupportedFormat", "{input}");
        }
    }

    #[test]
    fn test_non_integer_component() {
        let err = parse_date("Jan/31/2026").unwrap_err();
        assert_eq!(err.code(), "NonIntegerComponent");
        assert_eq!(
            err.to_string(),
            "Non-integer date component 'Jan' in 'Jan/31/2026'"
        );
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(parse_date("01/31/1899"), Err(ParseError::YearOutOfRange(1899)));
        assert_eq!(parse_date("01/31/2101"), Err(ParseError::YearOutOfRange(2101)));
        assert_eq!(parse_date("01/31/26"), Err(ParseError::YearOutOfRange(26)));
        assert_eq!(
            parse_date("01/31/2101").unwrap_err().to_string(),
            "Year out of range: 2101 (must be 1900-2100)"
        );
    }

    #[test]
    fn test_invalid_calendar_date() {
        for input in ["02/30/2024", "02/29/2023", "02/29/1900", "04/31/2024", "00/10/2024", "13/14/2026"] {
            let err = parse_date(input).unwrap_err();
            assert_eq!(err.code(), "InvalidCalendarDate", "{input}");
        }
        assert!(parse_date("02/29/2000").is_ok());
    }

    #[test]
    fn test_invalid_calendar_date_message_and_source() {
        use std::error::Error;

        let err = parse_date("02/30/2024").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date: '02/30/2024' (day 30 does not exist in 2024-02)"
        );
        assert!(err.source().is_some());
        assert!(ParseError::EmptyInput.source().is_none());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ParseError::EmptyInput.code(), "EmptyInput");
        assert_eq!(ParseError::EmptyInput.to_string(), "date string is empty");
        assert_eq!(
            ParseError::UnsupportedFormat("x".to_owned()).to_string(),
            "Unsupported date format: 'x'"
        );
        assert_eq!(ParseError::YearOutOfRange(1).code(), "YearOutOfRange");
    }

    #[test]
    fn test_from_str() {
        let d: CalendarDate = "15-06-2024".parse().unwrap();
        assert_eq!(d, date(2024, 6, 15));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1991, 8, 5).to_string(), "1991-08-05");
        assert_eq!(date(2100, 12, 31).to_string(), "2100-12-31");
    }

    #[test]
    fn test_ordering() {
        assert!(date(2024, 12, 31) < date(2025, 1, 1));
        assert!(date(2025, 1, 31) < date(2025, 2, 1));
        assert!(date(2025, 2, 1) < date(2025, 2, 2));
    }

    #[test]
    fn test_typed_accessors() {
        let d = date(2024, 2, 29);
        assert_eq!(d.year_typed().get(), 2024);
        assert_eq!(d.month_typed().get(), 2);
        assert_eq!(d.day_typed().get(), 29);
    }

    #[test]
    fn test_new_reports_first_failure() {
        assert_eq!(CalendarDate::new(1800, 13, 40), Err(CalendarError::Year(1800)));
        assert_eq!(CalendarDate::new(2024, 13, 40), Err(CalendarError::Month(13)));
    }

    #[test]
    fn test_serde_string_format() {
        let json = serde_json::to_string(&date(1991, 8, 15)).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
    }
}
