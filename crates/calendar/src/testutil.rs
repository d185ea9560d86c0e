//! Fixture schemas shared by the unit tests.

use dreamdate_schema::{
    CalendarSchema, RawCalendar, RawMonth, RawWeek, RawWeekday, RawYear,
};

fn month(name: &str, days: u32, days_in_leap_year: Option<u32>) -> RawMonth {
    RawMonth {
        name: name.to_string(),
        days,
        days_in_leap_year,
        abbreviation: None,
        long_name: None,
    }
}

fn build(
    frequency: Option<u32>,
    start: Option<u32>,
    months: Vec<RawMonth>,
    week_length: usize,
) -> CalendarSchema {
    let raw = RawCalendar {
        year: RawYear {
            leap_year_frequency: frequency,
            leap_year_start: start,
            months,
        },
        week: RawWeek {
            days: (1..=week_length)
                .map(|d| RawWeekday {
                    name: format!("Day{d}"),
                    abbreviation: None,
                    long_name: None,
                })
                .collect(),
        },
    };
    CalendarSchema::from_raw(raw).expect("test fixture schema is valid")
}

/// Three 5-day months, month 2 shortened to 4 days in leap years,
/// 5-day week, leap every 4 years from year 1.
pub(crate) fn shorter_leap_schema() -> CalendarSchema {
    build(
        Some(4),
        None,
        vec![
            month("Month1", 5, None),
            month("Month2", 5, Some(4)),
            month("Month3", 5, None),
        ],
        5,
    )
}

/// Three 5-day months, month 2 extended to 6 days in leap years,
/// 5-day week, leap every 4 years from year 2.
pub(crate) fn later_start_schema() -> CalendarSchema {
    build(
        Some(4),
        Some(2),
        vec![
            month("Month1", 5, None),
            month("Month2", 5, Some(6)),
            month("Month3", 5, None),
        ],
        5,
    )
}

/// Two months of 10 and 20 days, 7-day week, no leap years.
pub(crate) fn no_leap_schema() -> CalendarSchema {
    build(
        None,
        None,
        vec![month("First", 10, None), month("Second", 20, None)],
        7,
    )
}
