//! Validated, immutable calendar schema.

use tracing::debug;

use crate::error::{SchemaError, SchemaErrors};
use crate::raw::RawCalendar;

/// A validated month definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    name: String,
    days: u32,
    days_in_leap_year: Option<u32>,
    abbreviation: Option<String>,
    long_name: Option<String>,
}

impl Month {
    /// Returns the month name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal day count (>= 1).
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Returns the leap-year day count, if this month declares one.
    pub fn days_in_leap_year(&self) -> Option<u32> {
        self.days_in_leap_year
    }

    /// Returns the short form of the name, falling back to the name itself.
    pub fn abbreviation(&self) -> &str {
        self.abbreviation.as_deref().unwrap_or(&self.name)
    }

    /// Returns the long form of the name, falling back to the name itself.
    pub fn long_name(&self) -> &str {
        self.long_name.as_deref().unwrap_or(&self.name)
    }
}

/// A validated weekday definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weekday {
    name: String,
    abbreviation: Option<String>,
    long_name: Option<String>,
}

impl Weekday {
    /// Returns the weekday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the short form of the name, falling back to the name itself.
    pub fn abbreviation(&self) -> &str {
        self.abbreviation.as_deref().unwrap_or(&self.name)
    }

    /// Returns the long form of the name, falling back to the name itself.
    pub fn long_name(&self) -> &str {
        self.long_name.as_deref().unwrap_or(&self.name)
    }
}

/// The leap-year cadence of a calendar.
///
/// Year numbers count from 1. The first leap year is `start`, and leap
/// years repeat every `frequency` years after it. Years before `start`
/// are never leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapRule {
    frequency: u32,
    start: u32,
}

impl LeapRule {
    /// Returns how many years apart leap years are (>= 1).
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Returns the first year number eligible to be a leap year (>= 1).
    pub fn start(&self) -> u32 {
        self.start
    }
}

/// A validated, immutable calendar schema.
///
/// Built once from a [`RawCalendar`] via [`CalendarSchema::from_raw`] and
/// shared by reference for the life of the process. Every conversion
/// routine takes `&CalendarSchema`, so nothing downstream can run against
/// an unvalidated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSchema {
    months: Vec<Month>,
    week: Vec<Weekday>,
    leap: Option<LeapRule>,
}

impl CalendarSchema {
    /// Validates a raw calendar configuration.
    ///
    /// The whole configuration is inspected before failing, so the error
    /// carries every structural defect at once rather than the first one
    /// found.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaErrors`] if the month list is empty, any day count
    /// is zero, the week is empty, or the leap rule has a zero frequency
    /// or start.
    pub fn from_raw(raw: RawCalendar) -> Result<Self, SchemaErrors> {
        let mut errors = Vec::new();

        if raw.year.months.is_empty() {
            errors.push(SchemaError::NoMonths);
        }
        for (index, month) in raw.year.months.iter().enumerate() {
            if month.days == 0 {
                errors.push(SchemaError::EmptyMonth {
                    name: month.name.clone(),
                    position: index + 1,
                });
            }
            if month.days_in_leap_year == Some(0) {
                errors.push(SchemaError::EmptyLeapMonth {
                    name: month.name.clone(),
                    position: index + 1,
                });
            }
        }
        if raw.week.days.is_empty() {
            errors.push(SchemaError::EmptyWeek);
        }
        if raw.year.leap_year_frequency == Some(0) {
            errors.push(SchemaError::ZeroLeapFrequency);
        }
        if raw.year.leap_year_start == Some(0) {
            errors.push(SchemaError::ZeroLeapStart);
        }

        if !errors.is_empty() {
            return Err(SchemaErrors::new(errors));
        }

        let months = raw
            .year
            .months
            .into_iter()
            .map(|m| Month {
                name: m.name,
                days: m.days,
                days_in_leap_year: m.days_in_leap_year,
                abbreviation: m.abbreviation,
                long_name: m.long_name,
            })
            .collect::<Vec<_>>();
        let week = raw
            .week
            .days
            .into_iter()
            .map(|d| Weekday {
                name: d.name,
                abbreviation: d.abbreviation,
                long_name: d.long_name,
            })
            .collect::<Vec<_>>();
        // A start without a frequency configures no cadence at all.
        let leap = raw.year.leap_year_frequency.map(|frequency| LeapRule {
            frequency,
            start: raw.year.leap_year_start.unwrap_or(1),
        });

        debug!(
            months = months.len(),
            week_length = week.len(),
            has_leap_rule = leap.is_some(),
            "validated calendar schema"
        );

        Ok(Self { months, week, leap })
    }

    /// Returns the ordered month list.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Returns the number of months in a year.
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// Returns the ordered weekday list.
    pub fn week(&self) -> &[Weekday] {
        &self.week
    }

    /// Returns the number of days in a week.
    pub fn week_length(&self) -> usize {
        self.week.len()
    }

    /// Returns the leap rule, if the calendar has leap years at all.
    pub fn leap(&self) -> Option<&LeapRule> {
        self.leap.as_ref()
    }
}
