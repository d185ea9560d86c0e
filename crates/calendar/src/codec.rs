//! Canonical textual form of calendar dates.
//!
//! The canonical layout is `Y-MM-DD HH:mm:ss`: unpadded year, then
//! zero-padded month, date, hour, minute, and second. Month and date
//! widths come from the schema's largest possible values with a floor of
//! two digits, so a calendar with more than 99 months or 99-day months
//! still formats losslessly; time fields are always two digits because
//! their maxima are fixed.

use std::str::FromStr;

use dreamdate_schema::CalendarSchema;

use crate::date::DreamDate;
use crate::decode::decode;
use crate::encode::encode;
use crate::error::ConvertError;

/// Error type for canonical date strings that do not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not split into the `Y-MM-DD HH:mm:ss` layout.
    #[error("malformed date string {input:?} (expected Y-MM-DD HH:mm:ss)")]
    Layout {
        /// The rejected input.
        input: String,
    },

    /// A field in the input is not an unsigned decimal integer.
    #[error("malformed {field} in date string {input:?}")]
    NonNumeric {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected input.
        input: String,
    },

    /// The fields parsed but fall outside the schema's bounds.
    #[error(transparent)]
    OutOfRange(#[from] ConvertError),
}

/// Zero-padded width of the month field for `schema`.
pub fn month_width(schema: &CalendarSchema) -> usize {
    field_width(schema.month_count() as i64)
}

/// Zero-padded width of the date field for `schema`, sized to the longest
/// month with leap overrides included.
pub fn date_width(schema: &CalendarSchema) -> usize {
    let max = schema
        .months()
        .iter()
        .map(|m| m.days().max(m.days_in_leap_year().unwrap_or(0)))
        .max()
        .unwrap_or(0);
    field_width(i64::from(max))
}

fn field_width(max: i64) -> usize {
    max.to_string().len().max(2)
}

/// Formats a decoded date in the canonical `Y-MM-DD HH:mm:ss` layout.
pub fn format_date(schema: &CalendarSchema, date: &DreamDate) -> String {
    format!(
        "{}-{:0mw$}-{:0dw$} {:02}:{:02}:{:02}",
        date.year(),
        date.month(),
        date.date(),
        date.hour(),
        date.minute(),
        date.second(),
        mw = month_width(schema),
        dw = date_width(schema),
    )
}

/// Parses a canonical `Y-MM-DD HH:mm:ss` string into a decoded date.
///
/// The input is split on the fixed `-`, `-`, space, `:`, `:` delimiters;
/// the numeric fields may be zero-padded to any width. The fields are
/// encoded and the instant decoded again, so the result carries the leap
/// flag and weekday of the instant the string denotes, and
/// `format_date(schema, &parse(schema, s)?)` reproduces any canonical
/// `s` exactly.
///
/// # Errors
///
/// Returns [`ParseError::Layout`] when the delimiters do not line up,
/// [`ParseError::NonNumeric`] for a non-decimal field, and
/// [`ParseError::OutOfRange`] when the fields parse but the encoder
/// rejects them.
pub fn parse(schema: &CalendarSchema, input: &str) -> Result<DreamDate, ParseError> {
    let layout = || ParseError::Layout {
        input: input.to_string(),
    };

    let (date_part, time_part) = input.split_once(' ').ok_or_else(layout)?;

    let mut date_fields = date_part.splitn(3, '-');
    let (year, month, date) = match (date_fields.next(), date_fields.next(), date_fields.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(layout()),
    };

    let mut time_fields = time_part.splitn(3, ':');
    let (hour, minute, second) =
        match (time_fields.next(), time_fields.next(), time_fields.next()) {
            (Some(h), Some(m), Some(s)) => (h, m, s),
            _ => return Err(layout()),
        };

    let year: i64 = parse_field(year, "year", input)?;
    let month: u32 = parse_field(month, "month", input)?;
    let date: u32 = parse_field(date, "date", input)?;
    let hour: u32 = parse_field(hour, "hour", input)?;
    let minute: u32 = parse_field(minute, "minute", input)?;
    let second: u32 = parse_field(second, "second", input)?;

    let instant = encode(schema, year, month, date, hour, minute, second)?;
    let decoded = decode(schema, instant).expect("encoded instants are never negative");
    Ok(decoded)
}

fn parse_field<T: FromStr>(
    text: &str,
    field: &'static str,
    input: &str,
) -> Result<T, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumeric {
            field,
            input: input.to_string(),
        });
    }
    text.parse().map_err(|_| ParseError::NonNumeric {
        field,
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeUnit;
    use crate::testutil::{no_leap_schema, shorter_leap_schema};
    use crate::SECONDS_PER_DAY;

    #[test]
    fn format_epoch() {
        let schema = shorter_leap_schema();
        let d = decode(&schema, 0).unwrap();
        assert_eq!(format_date(&schema, &d), "1-01-01 00:00:00");
    }

    #[test]
    fn format_pads_every_field_but_year() {
        let schema = shorter_leap_schema();
        let instant = 14 * SECONDS_PER_DAY // year 2
            + 10 * SECONDS_PER_DAY // month 3 (5 + 5 days)
            + 3 * SECONDS_PER_DAY // date 4
            + 4 * 3_600
            + 5 * 60
            + 6;
        let d = decode(&schema, instant).unwrap();
        assert_eq!(format_date(&schema, &d), "2-03-04 04:05:06");
    }

    #[test]
    fn widths_floor_at_two_digits() {
        let schema = shorter_leap_schema();
        assert_eq!(month_width(&schema), 2);
        assert_eq!(date_width(&schema), 2);
    }

    #[test]
    fn date_width_counts_leap_override() {
        use dreamdate_schema::{CalendarSchema, RawCalendar, RawMonth, RawWeek, RawWeekday, RawYear};
        let raw = RawCalendar {
            year: RawYear {
                leap_year_frequency: Some(2),
                leap_year_start: None,
                months: vec![RawMonth {
                    name: "Long".to_string(),
                    days: 99,
                    days_in_leap_year: Some(100),
                    abbreviation: None,
                    long_name: None,
                }],
            },
            week: RawWeek {
                days: vec![RawWeekday {
                    name: "Day1".to_string(),
                    abbreviation: None,
                    long_name: None,
                }],
            },
        };
        let schema = CalendarSchema::from_raw(raw).unwrap();
        assert_eq!(date_width(&schema), 3);

        // Date 100 only exists in leap years; it formats three wide and
        // round-trips through parse.
        let d = decode(&schema, 99 * SECONDS_PER_DAY).unwrap();
        assert_eq!(format_date(&schema, &d), "1-01-100 00:00:00");
        assert_eq!(parse(&schema, "1-01-100 00:00:00").unwrap(), d);
    }

    #[test]
    fn parse_fixture() {
        let schema = shorter_leap_schema();
        let d = parse(&schema, "2-03-04 00:00:00").unwrap();
        assert_eq!(d.year(), 2);
        assert_eq!(d.month(), 3);
        assert_eq!(d.date(), 4);
        assert_eq!((d.hour(), d.minute(), d.second()), (0, 0, 0));
        assert_eq!(format_date(&schema, &d), "2-03-04 00:00:00");
    }

    #[test]
    fn parse_carries_leap_flag_and_weekday() {
        let schema = shorter_leap_schema();
        let d = parse(&schema, "1-02-01 00:00:00").unwrap();
        assert!(d.is_leap_year());
        assert_eq!(d.day_index(), 0); // day 5 of the calendar, 5-day week

        let e = parse(&schema, "2-01-01 00:00:00").unwrap();
        assert!(!e.is_leap_year());
        assert_eq!(e.day_index(), 4); // day 14
    }

    #[test]
    fn parse_rejects_missing_time() {
        let schema = no_leap_schema();
        assert_eq!(
            parse(&schema, "1-01-01").unwrap_err(),
            ParseError::Layout {
                input: "1-01-01".to_string(),
            }
        );
    }

    #[test]
    fn parse_rejects_short_date_part() {
        let schema = no_leap_schema();
        assert!(matches!(
            parse(&schema, "1-01 00:00:00").unwrap_err(),
            ParseError::Layout { .. }
        ));
    }

    #[test]
    fn parse_rejects_short_time_part() {
        let schema = no_leap_schema();
        assert!(matches!(
            parse(&schema, "1-01-01 00:00").unwrap_err(),
            ParseError::Layout { .. }
        ));
    }

    #[test]
    fn parse_rejects_non_numeric_field() {
        let schema = no_leap_schema();
        assert_eq!(
            parse(&schema, "1-xx-01 00:00:00").unwrap_err(),
            ParseError::NonNumeric {
                field: "month",
                input: "1-xx-01 00:00:00".to_string(),
            }
        );
        assert_eq!(
            parse(&schema, "1-01-01 00:00:+1").unwrap_err(),
            ParseError::NonNumeric {
                field: "second",
                input: "1-01-01 00:00:+1".to_string(),
            }
        );
    }

    #[test]
    fn parse_rejects_negative_year() {
        // A leading '-' lands an empty year field ahead of the first
        // delimiter, which reads as a malformed number.
        let schema = no_leap_schema();
        assert!(matches!(
            parse(&schema, "-1-01-01 00:00:00").unwrap_err(),
            ParseError::NonNumeric { field: "year", .. }
        ));
    }

    #[test]
    fn parse_propagates_range_errors() {
        let schema = no_leap_schema();
        assert_eq!(
            parse(&schema, "1-03-01 00:00:00").unwrap_err(),
            ParseError::OutOfRange(ConvertError::InvalidMonth {
                month: 3,
                month_count: 2,
            })
        );
        assert_eq!(
            parse(&schema, "1-01-01 24:00:00").unwrap_err(),
            ParseError::OutOfRange(ConvertError::InvalidTimeComponent {
                unit: TimeUnit::Hour,
                value: 24,
                max: 23,
            })
        );
    }

    #[test]
    fn parse_accepts_unpadded_fields() {
        let schema = no_leap_schema();
        let d = parse(&schema, "3-2-9 7:5:0").unwrap();
        assert_eq!((d.year(), d.month(), d.date()), (3, 2, 9));
        assert_eq!((d.hour(), d.minute(), d.second()), (7, 5, 0));
        assert_eq!(format_date(&schema, &d), "3-02-09 07:05:00");
    }
}
