//! Accessor layer between a decoded date and the token set.

use dreamdate_calendar::{date_width, month_width, DreamDate};
use dreamdate_schema::{CalendarSchema, Month, Weekday};

use crate::period::{NoPeriods, PeriodSource, PeriodYear};

static NO_PERIODS: NoPeriods = NoPeriods;

/// A decoded date together with everything needed to render it: the
/// schema that owns the month and weekday names, and a period source for
/// era-aware year tokens.
pub struct DateView<'a> {
    date: &'a DreamDate,
    schema: &'a CalendarSchema,
    periods: &'a dyn PeriodSource,
}

impl<'a> DateView<'a> {
    /// Creates a view with era overlays from `periods`.
    pub fn new(
        date: &'a DreamDate,
        schema: &'a CalendarSchema,
        periods: &'a dyn PeriodSource,
    ) -> Self {
        Self {
            date,
            schema,
            periods,
        }
    }

    /// Creates a view without era overlays.
    pub fn plain(date: &'a DreamDate, schema: &'a CalendarSchema) -> Self {
        Self::new(date, schema, &NO_PERIODS)
    }

    /// Returns the decoded date under view.
    pub fn date(&self) -> &DreamDate {
        self.date
    }

    /// Returns the year number.
    pub fn year(&self) -> i64 {
        self.date.year()
    }

    /// Returns every period numbering that applies to the year.
    pub fn period_years(&self) -> Vec<PeriodYear> {
        self.periods.periods_for_year(self.date.year())
    }

    // The date was decoded against this same schema, so the month and
    // weekday indices are in range.
    fn month_def(&self) -> &Month {
        &self.schema.months()[self.date.month_index() as usize]
    }

    fn weekday_def(&self) -> &Weekday {
        &self.schema.week()[self.date.day_index() as usize]
    }

    /// Returns the month number.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns the month number zero-padded to the schema's month width.
    pub fn month_padded(&self) -> String {
        format!("{:0w$}", self.date.month(), w = month_width(self.schema))
    }

    /// Returns the month's short name.
    pub fn month_abbreviation(&self) -> &str {
        self.month_def().abbreviation()
    }

    /// Returns the month's name.
    pub fn month_name(&self) -> &str {
        self.month_def().name()
    }

    /// Returns the month's long name.
    pub fn month_long_name(&self) -> &str {
        self.month_def().long_name()
    }

    /// Returns the date within the month.
    pub fn day_of_month(&self) -> u32 {
        self.date.date()
    }

    /// Returns the date zero-padded to the schema's date width.
    pub fn day_of_month_padded(&self) -> String {
        format!("{:0w$}", self.date.date(), w = date_width(self.schema))
    }

    /// Returns the weekday index into the schema's week.
    pub fn weekday_index(&self) -> u32 {
        self.date.day_index()
    }

    /// Returns the weekday's short name.
    pub fn weekday_abbreviation(&self) -> &str {
        self.weekday_def().abbreviation()
    }

    /// Returns the weekday's name.
    pub fn weekday_name(&self) -> &str {
        self.weekday_def().name()
    }

    /// Returns the weekday's long name.
    pub fn weekday_long_name(&self) -> &str {
        self.weekday_def().long_name()
    }

    /// Returns the hour of day.
    pub fn hour(&self) -> u32 {
        self.date.hour()
    }

    /// Returns the hour zero-padded to two digits.
    pub fn hour_padded(&self) -> String {
        format!("{:02}", self.date.hour())
    }

    /// Returns the hour on the 12-hour clock, with 0 rendered as 12.
    pub fn hour_in_meridiem(&self) -> u32 {
        match self.date.hour() % 12 {
            0 => 12,
            hour => hour,
        }
    }

    /// Returns `"am"` before noon, `"pm"` from noon on.
    pub fn meridiem(&self) -> &'static str {
        if self.date.hour() < 12 {
            "am"
        } else {
            "pm"
        }
    }

    /// Returns the minute of hour.
    pub fn minute(&self) -> u32 {
        self.date.minute()
    }

    /// Returns the minute zero-padded to two digits.
    pub fn minute_padded(&self) -> String {
        format!("{:02}", self.date.minute())
    }

    /// Returns the second of minute.
    pub fn second(&self) -> u32 {
        self.date.second()
    }

    /// Returns the second zero-padded to two digits.
    pub fn second_padded(&self) -> String {
        format!("{:02}", self.date.second())
    }
}
