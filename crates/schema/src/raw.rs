//! Raw calendar configuration, prior to validation.
//!
//! These types mirror the on-disk schema layout field for field. Loading
//! them from a file (or any other source) is the caller's concern; this
//! crate only defines the shape and hands the result to
//! [`CalendarSchema::from_raw`](crate::CalendarSchema::from_raw).

use serde::Deserialize;

/// Top-level schema document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSchema {
    /// The calendar definition.
    pub calendar: RawCalendar,
}

/// A calendar definition as configured, prior to validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCalendar {
    /// Year structure: leap rule and month list.
    pub year: RawYear,
    /// Week structure: the ordered day list.
    pub week: RawWeek,
}

/// Year structure of a raw calendar.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RawYear {
    /// Every how many years a leap year occurs. Absent means the calendar
    /// has no leap years at all.
    #[serde(default)]
    pub leap_year_frequency: Option<u32>,

    /// The first year number eligible to be a leap year. Absent defaults
    /// to year 1.
    #[serde(default)]
    pub leap_year_start: Option<u32>,

    /// The ordered month list.
    pub months: Vec<RawMonth>,
}

/// A month definition in a raw calendar.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RawMonth {
    /// Month name.
    pub name: String,

    /// Nominal day count.
    pub days: u32,

    /// Day count in leap years. Absent means the month keeps its nominal
    /// length in leap years.
    #[serde(default)]
    pub days_in_leap_year: Option<u32>,

    /// Short form of the name, e.g. for column headers.
    #[serde(default)]
    pub abbreviation: Option<String>,

    /// Long form of the name.
    #[serde(default)]
    pub long_name: Option<String>,
}

/// Week structure of a raw calendar.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawWeek {
    /// The ordered weekday list; its length is the week length.
    pub days: Vec<RawWeekday>,
}

/// A weekday definition in a raw calendar.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RawWeekday {
    /// Weekday name.
    pub name: String,

    /// Short form of the name.
    #[serde(default)]
    pub abbreviation: Option<String>,

    /// Long form of the name.
    #[serde(default)]
    pub long_name: Option<String>,
}
