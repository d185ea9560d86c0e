//! # dreamdate-calendar
//!
//! Pure conversion arithmetic for schema-defined calendars.
//!
//! An *instant* is an integer count of seconds since the calendar's zero
//! point (year 1, month 1, date 1 at 00:00:00). This crate converts
//! losslessly between three representations of an instant:
//!
//! ```mermaid
//! graph LR
//!     A["instant (i64 seconds)"] -->|"decode()"| B["DreamDate"]
//!     B -->|"encode_date()"| A
//!     B -->|"format_date()"| C["Y-MM-DD HH:mm:ss"]
//!     C -->|"parse()"| B
//! ```
//!
//! The calendar's shape comes entirely from a validated
//! [`CalendarSchema`](dreamdate_schema::CalendarSchema): month list and
//! lengths, leap-year cadence and overrides, and week length. Days are a
//! fixed 86 400 seconds regardless of schema.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dreamdate_calendar::{decode, encode, format_date, parse};
//!
//! let date = decode(&schema, 446_400)?;
//! assert_eq!(date.month(), 2);
//! assert_eq!(encode(&schema, 1, 2, 1, 4, 0, 0)?, 446_400);
//! assert_eq!(format_date(&schema, &date), "1-02-01 04:00:00");
//! assert_eq!(parse(&schema, "1-02-01 04:00:00")?, date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Decoded calendar date |
//! | `leap` | Leap-year predicate |
//! | `length` | Month and year length lookup |
//! | `decode` | Instant to date conversion |
//! | `encode` | Date to instant conversion |
//! | `codec` | Canonical textual form |
//! | `error` | Error types |
//!
//! Every operation is a pure, synchronous computation over an immutable
//! schema; nothing here holds state, so the whole crate is safe to call
//! concurrently.

mod codec;
mod date;
mod decode;
mod encode;
mod error;
mod leap;
mod length;
#[cfg(test)]
pub(crate) mod testutil;

pub use codec::{date_width, format_date, month_width, parse, ParseError};
pub use date::DreamDate;
pub use decode::decode;
pub use encode::{encode, encode_date};
pub use error::{ConvertError, TimeUnit};
pub use leap::is_leap_year;
pub use length::{month_length, year_length};

/// Seconds in a calendar day. Fixed at 24 hours for every schema.
pub const SECONDS_PER_DAY: i64 = 86_400;

pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
