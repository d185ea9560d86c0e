//! Concurrent year-numbering overlays.

/// One concurrent year numbering that applies to a raw year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodYear {
    /// The year number within the period.
    pub year: i64,
    /// Short marker appended directly to the year, e.g. `"BF"`.
    pub abbreviation: String,
    /// Period name rendered after the year.
    pub name: String,
    /// Long period name rendered after the year.
    pub long_name: String,
}

/// Source of concurrent year numberings for a calendar.
///
/// How a raw year maps onto period-relative years (offsets, overlaps,
/// open ends) is owned by the implementor; the rendering layer only
/// consumes the result.
pub trait PeriodSource {
    /// Returns every period numbering that applies to `year`, in display
    /// order. An empty result makes the year tokens fall back to the
    /// plain year number.
    fn periods_for_year(&self, year: i64) -> Vec<PeriodYear>;
}

/// Period source for calendars without era overlays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPeriods;

impl PeriodSource for NoPeriods {
    fn periods_for_year(&self, _year: i64) -> Vec<PeriodYear> {
        Vec::new()
    }
}
