//! The closed set of format tokens.

use crate::ordinal::ordinal;
use crate::view::DateView;

/// A format token: one field presentation of a date.
///
/// Tokens are a closed set. Every identifier resolves through
/// [`Token::parse`] and renders through one exhaustive dispatch to a
/// typed accessor on [`DateView`]; there is no dynamic property lookup
/// anywhere in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `Y` — the year number.
    Year,
    /// `YY` — period-relative years with abbreviations, `Y` without
    /// periods.
    YearPeriodAbbr,
    /// `YYY` — period-relative years with period names, `Y` without
    /// periods.
    YearPeriodName,
    /// `YYYY` — period-relative years with long period names, `Y`
    /// without periods.
    YearPeriodLongName,
    /// `M` — the month number.
    Month,
    /// `Mz` — the month number, zero-padded to the schema's width.
    MonthPadded,
    /// `Mo` — the month number with an ordinal suffix.
    MonthOrdinal,
    /// `MM` — the month's short name.
    MonthAbbr,
    /// `MMM` — the month's name.
    MonthName,
    /// `MMMM` — the month's long name.
    MonthLongName,
    /// `D` — the date within the month.
    Date,
    /// `Dz` — the date, zero-padded to the schema's width.
    DatePadded,
    /// `Do` — the date with an ordinal suffix.
    DateOrdinal,
    /// `d` — the weekday index.
    WeekdayIndex,
    /// `dd` — the weekday's short name.
    WeekdayAbbr,
    /// `ddd` — the weekday's name.
    WeekdayName,
    /// `dddd` — the weekday's long name.
    WeekdayLongName,
    /// `H` — the hour of day.
    Hour,
    /// `Hz` (alias `HH`) — the hour, zero-padded to two digits.
    HourPadded,
    /// `h` — the hour on the 12-hour clock.
    HourInMeridiem,
    /// `a` — `am` or `pm`.
    Meridiem,
    /// `m` — the minute of hour.
    Minute,
    /// `mz` (alias `mm`) — the minute, zero-padded to two digits.
    MinutePadded,
    /// `s` — the second of minute.
    Second,
    /// `sz` (alias `ss`) — the second, zero-padded to two digits.
    SecondPadded,
    /// `PD` — the canonical date part `YY-Mz-Dz`.
    CanonicalDate,
    /// `PT` — the canonical time part `Hz:mz:sz`.
    CanonicalTime,
    /// `P` — the full canonical form `PD PT`.
    Canonical,
}

impl Token {
    /// Resolves a token identifier, or `None` for anything outside the
    /// closed set.
    pub fn parse(ident: &str) -> Option<Self> {
        let token = match ident {
            "Y" => Self::Year,
            "YY" => Self::YearPeriodAbbr,
            "YYY" => Self::YearPeriodName,
            "YYYY" => Self::YearPeriodLongName,
            "M" => Self::Month,
            "Mz" => Self::MonthPadded,
            "Mo" => Self::MonthOrdinal,
            "MM" => Self::MonthAbbr,
            "MMM" => Self::MonthName,
            "MMMM" => Self::MonthLongName,
            "D" => Self::Date,
            "Dz" => Self::DatePadded,
            "Do" => Self::DateOrdinal,
            "d" => Self::WeekdayIndex,
            "dd" => Self::WeekdayAbbr,
            "ddd" => Self::WeekdayName,
            "dddd" => Self::WeekdayLongName,
            "H" => Self::Hour,
            "Hz" | "HH" => Self::HourPadded,
            "h" => Self::HourInMeridiem,
            "a" => Self::Meridiem,
            "m" => Self::Minute,
            "mz" | "mm" => Self::MinutePadded,
            "s" => Self::Second,
            "sz" | "ss" => Self::SecondPadded,
            "PD" => Self::CanonicalDate,
            "PT" => Self::CanonicalTime,
            "P" => Self::Canonical,
            _ => return None,
        };
        Some(token)
    }

    /// Renders the token against a date view.
    pub fn render(self, view: &DateView<'_>) -> String {
        match self {
            Self::Year => view.year().to_string(),
            Self::YearPeriodAbbr => {
                period_years(view, |p| format!("{}{}", p.year, p.abbreviation))
            }
            Self::YearPeriodName => period_years(view, |p| format!("{} {}", p.year, p.name)),
            Self::YearPeriodLongName => {
                period_years(view, |p| format!("{} {}", p.year, p.long_name))
            }
            Self::Month => view.month().to_string(),
            Self::MonthPadded => view.month_padded(),
            Self::MonthOrdinal => format!("{}{}", view.month(), ordinal(view.month())),
            Self::MonthAbbr => view.month_abbreviation().to_string(),
            Self::MonthName => view.month_name().to_string(),
            Self::MonthLongName => view.month_long_name().to_string(),
            Self::Date => view.day_of_month().to_string(),
            Self::DatePadded => view.day_of_month_padded(),
            Self::DateOrdinal => {
                format!("{}{}", view.day_of_month(), ordinal(view.day_of_month()))
            }
            Self::WeekdayIndex => view.weekday_index().to_string(),
            Self::WeekdayAbbr => view.weekday_abbreviation().to_string(),
            Self::WeekdayName => view.weekday_name().to_string(),
            Self::WeekdayLongName => view.weekday_long_name().to_string(),
            Self::Hour => view.hour().to_string(),
            Self::HourPadded => view.hour_padded(),
            Self::HourInMeridiem => view.hour_in_meridiem().to_string(),
            Self::Meridiem => view.meridiem().to_string(),
            Self::Minute => view.minute().to_string(),
            Self::MinutePadded => view.minute_padded(),
            Self::Second => view.second().to_string(),
            Self::SecondPadded => view.second_padded(),
            Self::CanonicalDate => format!(
                "{}-{}-{}",
                Self::YearPeriodAbbr.render(view),
                Self::MonthPadded.render(view),
                Self::DatePadded.render(view),
            ),
            Self::CanonicalTime => format!(
                "{}:{}:{}",
                Self::HourPadded.render(view),
                Self::MinutePadded.render(view),
                Self::SecondPadded.render(view),
            ),
            Self::Canonical => format!(
                "{} {}",
                Self::CanonicalDate.render(view),
                Self::CanonicalTime.render(view),
            ),
        }
    }
}

/// Joins one rendering per period year with `/`, falling back to the
/// plain year when the source yields no periods.
fn period_years(view: &DateView<'_>, render: impl Fn(&crate::PeriodYear) -> String) -> String {
    let periods = view.period_years();
    if periods.is_empty() {
        return view.year().to_string();
    }
    periods
        .iter()
        .map(|period| render(period))
        .collect::<Vec<_>>()
        .join("/")
}
