//! Instant to calendar date conversion.

use dreamdate_schema::CalendarSchema;

use crate::date::DreamDate;
use crate::error::ConvertError;
use crate::leap::is_leap_year;
use crate::length::{month_length, year_length};
use crate::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Decodes an instant into a [`DreamDate`] under `schema`.
///
/// The instant counts seconds since year 1, month 1, date 1 at 00:00:00.
/// Days are a fixed 86 400 seconds whatever the schema; the weekday index
/// is the total day count modulo the week length, a continuous cycle that
/// no month or year boundary resets.
///
/// Every non-negative instant maps to exactly one date, and
/// [`encode_date`](crate::encode_date) maps that date back to the same
/// instant.
///
/// # Errors
///
/// Returns [`ConvertError::NegativeInstant`] for instants before the
/// calendar epoch.
pub fn decode(schema: &CalendarSchema, instant: i64) -> Result<DreamDate, ConvertError> {
    if instant < 0 {
        return Err(ConvertError::NegativeInstant { instant });
    }

    let total_days = instant / SECONDS_PER_DAY;
    let time_of_day = instant % SECONDS_PER_DAY;

    let day_index = (total_days % schema.week_length() as i64) as u32;
    let hour = (time_of_day / SECONDS_PER_HOUR) as u32;
    let minute = (time_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32;
    let second = (time_of_day % SECONDS_PER_MINUTE) as u32;

    // Walk whole years off the day count. Terminates because a validated
    // schema guarantees every year is at least one day long.
    let mut year_index = 0_i64;
    let mut remaining = total_days;
    loop {
        let len = year_length(schema, year_index);
        if remaining < len {
            break;
        }
        remaining -= len;
        year_index += 1;
    }
    let leap = is_leap_year(schema, year_index);

    // Same walk within the year, leaving the 0-based date index behind.
    let mut month_index = 0_usize;
    loop {
        let len = month_length(schema, month_index, leap);
        if remaining < len {
            break;
        }
        remaining -= len;
        month_index += 1;
    }

    Ok(DreamDate {
        year: year_index + 1,
        is_leap_year: leap,
        month: month_index as u32 + 1,
        date: remaining as u32 + 1,
        day_index,
        hour,
        minute,
        second,
    })
}
