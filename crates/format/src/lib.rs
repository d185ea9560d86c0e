//! # dreamdate-format
//!
//! Token-based rendering of decoded calendar dates.
//!
//! A template is plain text with `{token}` placeholders, each naming one
//! field presentation of a date: `{YYY}` renders the year with its period
//! names, `{Do}` the ordinal date, `{P}` the full canonical form. The
//! token set is closed — every identifier maps through one exhaustive
//! dispatch to a typed accessor, and unknown identifiers render as empty
//! strings.
//!
//! ```ignore
//! use dreamdate_format::{render, DateView};
//!
//! let date = dreamdate_calendar::decode(&schema, instant)?;
//! let view = DateView::plain(&date, &schema);
//! assert_eq!(render("{ddd} the {Do} of {MMM}", &view), "Middleday the 4th of Frostfall");
//! ```
//!
//! Concurrent year numberings (eras) are supplied by a [`PeriodSource`]
//! implementation; how a raw year maps onto period-relative years is the
//! source's business, this crate only renders what it returns.

mod ordinal;
mod period;
mod template;
mod token;
mod view;

pub use ordinal::ordinal;
pub use period::{NoPeriods, PeriodSource, PeriodYear};
pub use template::render;
pub use token::Token;
pub use view::DateView;
