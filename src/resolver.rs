use crate::{AMBIGUITY_THRESHOLD, CalendarDate, ParseError, RawDateInput, Year, prelude::*};

/// Order in which the two leading components of a date are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DateOrder {
    /// `MM/DD/YYYY` (US)
    #[default]
    #[display(fmt = "month-first")]
    MonthFirst,
    /// `DD/MM/YYYY` (EU)
    #[display(fmt = "day-first")]
    DayFirst,
}

impl DateOrder {
    /// Maps the leading tokens `(a, b)` to `(month, day)`.
    const fn month_day(self, a: i64, b: i64) -> (i64, i64) {
        match self {
            Self::MonthFirst => (a, b),
            Self::DayFirst => (b, a),
        }
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub date:      CalendarDate,
    /// The order that was applied.
    pub order:     DateOrder,
    /// Both leading tokens were <= 12, so the order came from the resolver's preference.
    pub ambiguous: bool,
}

/// Resolves `a/b/yyyy` or `a-b-yyyy` strings written in either US or EU order.
///
/// A leading token above 12 can only be a day, which pins the order. When
/// both are <= 12 the configured `ambiguous` order is used (month-first by
/// default). When both exceed 12 there is no valid reading; the resolver
/// reads month-first and reports `InvalidCalendarDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateResolver {
    ambiguous: DateOrder,
}

impl DateResolver {
    pub const fn new(ambiguous: DateOrder) -> Self {
        Self { ambiguous }
    }

    /// Order used when both leading tokens could be a month.
    pub const fn ambiguous_order(&self) -> DateOrder {
        self.ambiguous
    }

    /// Parses `input` into a calendar date.
    ///
    /// # Errors
    /// See [`ParseError`]; every failure is returned, never retried.
    pub fn parse<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<CalendarDate, ParseError> {
        self.resolve(input).map(|r| r.date)
    }

    /// Like [`Self::parse`], but also reports which order was applied.
    ///
    /// # Errors
    /// See [`ParseError`].
    pub fn resolve<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Resolution, ParseError> {
        let raw = RawDateInput::new(input.into().unwrap_or_default())?;
        let (a, b, y) = raw.components()?;
        Year::new(y).map_err(|_| ParseError::YearOutOfRange(y))?;

        let (order, ambiguous) = self.disambiguate(a, b);
        let (month, day) = order.month_day(a, b);
        tracing::trace!(input = raw.text(), %order, ambiguous, "resolved date order");

        let date = CalendarDate::new(y, month, day).map_err(|reason| {
            ParseError::InvalidCalendarDate {
                input: raw.text().to_owned(),
                reason,
            }
        })?;
        Ok(Resolution {
            date,
            order,
            ambiguous,
        })
    }

    fn disambiguate(&self, a: i64, b: i64) -> (DateOrder, bool) {
        match (a > AMBIGUITY_THRESHOLD, b > AMBIGUITY_THRESHOLD) {
            (true, false) => (DateOrder::DayFirst, false),
            (false, false) => (self.ambiguous, true),
            // b is a day; if a is too, no reading exists and month-first fails construction
            (_, true) => (DateOrder::MonthFirst, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarError;

    #[test]
    fn test_unambiguous_day_first() {
        let r = DateResolver::default().resolve("25/12/2025").unwrap();
        assert_eq!(r.date.to_columns(), (2025, 12, 25));
        assert_eq!(r.order, DateOrder::DayFirst);
        assert!(!r.ambiguous);
    }

    #[test]
    fn test_unambiguous_month_first() {
        let r = DateResolver::default().resolve("12/25/2025").unwrap();
        assert_eq!(r.date.to_columns(), (2025, 12, 25));
        assert_eq!(r.order, DateOrder::MonthFirst);
        assert!(!r.ambiguous);
    }

    #[test]
    fn test_ambiguous_defaults_to_month_first() {
        let r = DateResolver::default().resolve("01/02/2026").unwrap();
        assert_eq!(r.date.to_columns(), (2026, 1, 2));
        assert_eq!(r.order, DateOrder::MonthFirst);
        assert!(r.ambiguous);
    }

    #[test]
    fn test_ambiguous_preference_day_first() {
        let resolver = DateResolver::new(DateOrder::DayFirst);
        assert_eq!(resolver.ambiguous_order(), DateOrder::DayFirst);

        let r = resolver.resolve("01/02/2026").unwrap();
        assert_eq!(r.date.to_columns(), (2026, 2, 1));
        assert!(r.ambiguous);

        // the preference never overrides an unambiguous reading
        let r = resolver.resolve("12/25/2025").unwrap();
        assert_eq!(r.date.to_columns(), (2025, 12, 25));
        assert_eq!(r.order, DateOrder::MonthFirst);
    }

    #[test]
    fn test_both_over_twelve_is_invalid() {
        for resolver in [
            DateResolver::default(),
            DateResolver::new(DateOrder::DayFirst),
        ] {
            let err = resolver.parse("13/14/2026").unwrap_err();
            assert_eq!(
                err,
                ParseError::InvalidCalendarDate {
                    input: "13/14/2026".to_owned(),
                    reason: CalendarError::Month(13),
                }
            );
        }
    }

    #[test]
    fn test_year_checked_before_calendar() {
        let err = DateResolver::default().parse("31/31/1899").unwrap_err();
        assert_eq!(err, ParseError::YearOutOfRange(1899));
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(DateResolver::default().parse(None::<&str>), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_order_display() {
        assert_eq!(DateOrder::MonthFirst.to_string(), "month-first");
        assert_eq!(DateOrder::DayFirst.to_string(), "day-first");
    }
}
