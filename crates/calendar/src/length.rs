//! Month and year length lookup.

use dreamdate_schema::CalendarSchema;

use crate::leap::is_leap_year;

/// Returns the number of days in the month at `month_index` for a year
/// with the given leap status.
///
/// In a leap year, only a month that declares a leap-year override
/// changes length; every other month keeps its nominal length.
///
/// # Panics
///
/// Panics if `month_index` is out of range for the schema. The decode and
/// encode paths resolve month indices against the same schema, so they
/// never trip this.
pub fn month_length(schema: &CalendarSchema, month_index: usize, leap: bool) -> i64 {
    let month = &schema.months()[month_index];
    let days = if leap {
        month.days_in_leap_year().unwrap_or(month.days())
    } else {
        month.days()
    };
    i64::from(days)
}

/// Returns the total number of days in the year at `year_index`.
pub fn year_length(schema: &CalendarSchema, year_index: i64) -> i64 {
    let leap = is_leap_year(schema, year_index);
    (0..schema.month_count())
        .map(|month_index| month_length(schema, month_index, leap))
        .sum()
}
