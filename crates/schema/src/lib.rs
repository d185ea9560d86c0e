//! # dreamdate-schema
//!
//! Calendar schema configuration and validation.
//!
//! A dreamdate calendar is entirely data-driven: the number of months in a
//! year, the day count of every month, which months change length in leap
//! years, the leap-year cadence and the week length all come from a schema
//! rather than from code. This crate holds the raw configuration types as
//! they are deserialized from a schema file and the validated
//! [`CalendarSchema`] that the conversion engine consumes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dreamdate_schema::{CalendarSchema, RawSchema};
//!
//! let raw: RawSchema = serde_json::from_str(config_text)?;
//! let schema = CalendarSchema::from_raw(raw.calendar)?;
//! assert_eq!(schema.month_count(), 12);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `raw` | Configuration types as deserialized, prior to validation |
//! | `schema` | Validated, immutable calendar schema |
//! | `error` | Error types |

mod error;
mod raw;
mod schema;

pub use error::{SchemaError, SchemaErrors};
pub use raw::{RawCalendar, RawMonth, RawSchema, RawWeek, RawWeekday, RawYear};
pub use schema::{CalendarSchema, LeapRule, Month, Weekday};
