use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Why a (year, month, day) triple is not a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("year {0} is outside {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    Year(i64),

    /// Month outside `1..=MAX_MONTH`.
    #[error("month {0} is not between 1 and {max}", max = MAX_MONTH)]
    Month(i64),

    /// Day does not exist in the given month.
    #[error("day {day} does not exist in {year}-{month:02}")]
    Day { year: u16, month: u8, day: i64 },
}

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1900..=2100)
/// Uses `NonZeroU16` internally, so 0 is never representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::Year` if the value is out of range.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&value) {
            return Err(CalendarError::Year(value));
        }
        u16::try_from(value)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(CalendarError::Year(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::Month` if the value is 0, negative or > `MAX_MONTH`.
    pub fn new(value: i64) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|m| *m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::Month(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to exist in the year and month it was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of `month` in `year`
    ///
    /// # Errors
    /// Returns `CalendarError::Day` if the value is below 1 or past the end of the month.
    pub fn new(value: i64, year: Year, month: Month) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year.get(), month);
        u8::try_from(value)
            .ok()
            .filter(|d| (MIN_DAY..=max_day).contains(d))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::Day {
                year: year.get(),
                month: month.get(),
                day: value,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`. Taking a validated [`Month`] keeps the table
/// lookup in bounds.
pub const fn days_in_month(year: u16, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
