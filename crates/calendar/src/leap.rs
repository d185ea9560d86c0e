//! Leap-year predicate for schema-defined calendars.

use dreamdate_schema::CalendarSchema;

/// Returns whether the year at `year_index` is a leap year under `schema`.
///
/// A calendar without a leap rule has no leap years at all. With a rule,
/// year numbers count from 1: the first leap year is the rule's start and
/// leap years repeat every `frequency` years after it. Years before the
/// start are never leap years, whatever the frequency.
pub fn is_leap_year(schema: &CalendarSchema, year_index: i64) -> bool {
    let Some(rule) = schema.leap() else {
        return false;
    };
    let year = year_index + 1;
    let start = i64::from(rule.start());
    year >= start && (year - start) % i64::from(rule.frequency()) == 0
}
