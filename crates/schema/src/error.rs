//! Error types for the dreamdate-schema crate.

/// A single structural defect in a calendar configuration.
///
/// Validation inspects the whole configuration before failing, so one
/// [`SchemaErrors`] value can carry several of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The calendar declares no months at all.
    #[error("calendar has no months")]
    NoMonths,

    /// A month has a zero nominal day count.
    #[error("month {position} ({name}) must have at least 1 day")]
    EmptyMonth {
        /// Name of the offending month.
        name: String,
        /// 1-based position of the month in the configured order.
        position: usize,
    },

    /// A month has a zero leap-year day count.
    #[error("month {position} ({name}) must have at least 1 day in leap years")]
    EmptyLeapMonth {
        /// Name of the offending month.
        name: String,
        /// 1-based position of the month in the configured order.
        position: usize,
    },

    /// The week declares no days.
    #[error("week has no days")]
    EmptyWeek,

    /// The leap-year frequency is present but zero.
    #[error("leap year frequency must be at least 1")]
    ZeroLeapFrequency,

    /// The leap-year start is present but zero (year numbers count from 1).
    #[error("leap year start must be at least 1")]
    ZeroLeapStart,
}

/// All structural defects found in one calendar configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid calendar schema: {}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct SchemaErrors {
    errors: Vec<SchemaError>,
}

impl SchemaErrors {
    pub(crate) fn new(errors: Vec<SchemaError>) -> Self {
        Self { errors }
    }

    /// Returns every defect that was found, in configuration order.
    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }

    /// Consumes the value and returns the defect list.
    pub fn into_errors(self) -> Vec<SchemaError> {
        self.errors
    }
}
