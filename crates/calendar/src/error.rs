//! Error types for the dreamdate-calendar crate.

use std::fmt;

/// The time-of-day field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Hour of day (0..=23).
    Hour,
    /// Minute of hour (0..=59).
    Minute,
    /// Second of minute (0..=59).
    Second,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        };
        f.write_str(name)
    }
}

/// Error type for instant and date conversions.
///
/// Encode-side variants report a field outside the schema's bounds;
/// [`ConvertError::NegativeInstant`] is the decode-side domain violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Returned when a negative instant is passed to the decoder. The
    /// calendar starts at instant 0; pre-epoch instants are rejected,
    /// never clamped.
    #[error("instant {instant} is before the calendar epoch (instants must be >= 0)")]
    NegativeInstant {
        /// The offending instant.
        instant: i64,
    },

    /// Returned when a year number is below 1.
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear {
        /// The offending year number.
        year: i64,
    },

    /// Returned when a month number is outside the schema's month list.
    #[error("invalid month: {month} (must be 1..={month_count})")]
    InvalidMonth {
        /// The offending month number.
        month: u32,
        /// Number of months in the schema's year.
        month_count: u32,
    },

    /// Returned when a date exceeds the month's length for that year.
    #[error("invalid date: {date} for month {month} (max {max_date})")]
    InvalidDate {
        /// The offending date.
        date: u32,
        /// The month the date was checked against.
        month: u32,
        /// The month's length in the requested year.
        max_date: i64,
    },

    /// Returned when an hour, minute, or second is out of range.
    #[error("invalid {unit}: {value} (max {max})")]
    InvalidTimeComponent {
        /// Which field failed.
        unit: TimeUnit,
        /// The offending value.
        value: u32,
        /// The largest valid value for the field.
        max: u32,
    },
}
