//! Calendar date to instant conversion.

use dreamdate_schema::CalendarSchema;

use crate::date::DreamDate;
use crate::error::{ConvertError, TimeUnit};
use crate::leap::is_leap_year;
use crate::length::{month_length, year_length};
use crate::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Encodes calendar fields into an instant under `schema`.
///
/// Exact inverse of [`decode`](crate::decode) for every input it accepts:
/// the instant counts the days of all years before `year`, the months of
/// that year before `month`, the dates before `date`, and the time of day.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidYear`] for years below 1,
/// [`ConvertError::InvalidMonth`] for months outside the schema's month
/// list, [`ConvertError::InvalidDate`] for dates beyond the month's length
/// in that year (leap overrides included), and
/// [`ConvertError::InvalidTimeComponent`] for out-of-range time fields.
pub fn encode(
    schema: &CalendarSchema,
    year: i64,
    month: u32,
    date: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<i64, ConvertError> {
    if year < 1 {
        return Err(ConvertError::InvalidYear { year });
    }
    let year_index = year - 1;

    let month_count = schema.month_count() as u32;
    if !(1..=month_count).contains(&month) {
        return Err(ConvertError::InvalidMonth { month, month_count });
    }
    let month_index = (month - 1) as usize;

    let leap = is_leap_year(schema, year_index);
    let max_date = month_length(schema, month_index, leap);
    if date < 1 || i64::from(date) > max_date {
        return Err(ConvertError::InvalidDate {
            date,
            month,
            max_date,
        });
    }

    check_time(TimeUnit::Hour, hour, 23)?;
    check_time(TimeUnit::Minute, minute, 59)?;
    check_time(TimeUnit::Second, second, 59)?;

    let days_before_year: i64 = (0..year_index)
        .map(|index| year_length(schema, index))
        .sum();
    let days_before_month: i64 = (0..month_index)
        .map(|index| month_length(schema, index, leap))
        .sum();
    let total_days = days_before_year + days_before_month + i64::from(date) - 1;

    Ok(total_days * SECONDS_PER_DAY
        + i64::from(hour) * SECONDS_PER_HOUR
        + i64::from(minute) * SECONDS_PER_MINUTE
        + i64::from(second))
}

/// Re-encodes a decoded date back into its instant.
///
/// For any non-negative instant `i`, `encode_date(schema, &decode(schema,
/// i)?)` returns `i`.
///
/// # Errors
///
/// Propagates the same range errors as [`encode`]; a date decoded under
/// the same schema never triggers them.
pub fn encode_date(schema: &CalendarSchema, date: &DreamDate) -> Result<i64, ConvertError> {
    encode(
        schema,
        date.year(),
        date.month(),
        date.date(),
        date.hour(),
        date.minute(),
        date.second(),
    )
}

fn check_time(unit: TimeUnit, value: u32, max: u32) -> Result<(), ConvertError> {
    if value > max {
        return Err(ConvertError::InvalidTimeComponent { unit, value, max });
    }
    Ok(())
}
