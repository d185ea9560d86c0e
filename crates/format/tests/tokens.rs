//! Every token rendered against a known calendar.

use dreamdate_calendar::{decode, format_date};
use dreamdate_format::{render, DateView, NoPeriods, PeriodSource, PeriodYear, Token};
use dreamdate_schema::{CalendarSchema, RawSchema};

/// The shortening-override calendar with configured name forms: three
/// 5-day months (month 2 drops to 4 days in leap years), 5-day week,
/// leap every 4 years from year 1.
fn schema() -> CalendarSchema {
    let raw: RawSchema = serde_json::from_str(
        r#"{
            "calendar": {
                "year": {
                    "leapYearFrequency": 4,
                    "months": [
                        {"name": "Frostfall", "days": 5, "abbreviation": "Fro",
                         "longName": "The Month of Frostfall"},
                        {"name": "Thaw", "days": 5, "daysInLeapYear": 4},
                        {"name": "Highsun", "days": 5}
                    ]
                },
                "week": {
                    "days": [
                        {"name": "Restday", "abbreviation": "Re",
                         "longName": "The Day of Rest"},
                        {"name": "Firstday"},
                        {"name": "Middleday"},
                        {"name": "Fourthday"},
                        {"name": "Lastday"}
                    ]
                }
            }
        }"#,
    )
    .unwrap();
    CalendarSchema::from_raw(raw.calendar).unwrap()
}

/// Two fixed numbering systems offset from the raw year.
struct TwoAges;

impl PeriodSource for TwoAges {
    fn periods_for_year(&self, year: i64) -> Vec<PeriodYear> {
        vec![
            PeriodYear {
                year: year + 100,
                abbreviation: "FA".to_string(),
                name: "First Age".to_string(),
                long_name: "The First Age of the World".to_string(),
            },
            PeriodYear {
                year,
                abbreviation: "SA".to_string(),
                name: "Second Age".to_string(),
                long_name: "The Second Age of the World".to_string(),
            },
        ]
    }
}

#[test]
fn every_token_renders() {
    let schema = schema();
    // Year 2, month 3, date 4 at 14:05:09. Year 2 starts at day 14, so
    // this is calendar day 27: weekday 27 % 5 = 2.
    let instant = (14 + 10 + 3) * 86_400 + 14 * 3_600 + 5 * 60 + 9;
    let date = decode(&schema, instant).unwrap();
    let view = DateView::plain(&date, &schema);

    let cases = [
        ("Y", "2"),
        ("YY", "2"),
        ("YYY", "2"),
        ("YYYY", "2"),
        ("M", "3"),
        ("Mz", "03"),
        ("Mo", "3rd"),
        ("MM", "Highsun"),
        ("MMM", "Highsun"),
        ("MMMM", "Highsun"),
        ("D", "4"),
        ("Dz", "04"),
        ("Do", "4th"),
        ("d", "2"),
        ("dd", "Middleday"),
        ("ddd", "Middleday"),
        ("dddd", "Middleday"),
        ("H", "14"),
        ("Hz", "14"),
        ("HH", "14"),
        ("h", "2"),
        ("a", "pm"),
        ("m", "5"),
        ("mz", "05"),
        ("mm", "05"),
        ("s", "9"),
        ("sz", "09"),
        ("ss", "09"),
        ("PD", "2-03-04"),
        ("PT", "14:05:09"),
        ("P", "2-03-04 14:05:09"),
    ];
    for (ident, expected) in cases {
        let token = Token::parse(ident).unwrap_or_else(|| panic!("unknown token {ident}"));
        assert_eq!(token.render(&view), expected, "token {ident}");
    }
}

#[test]
fn configured_name_forms_render() {
    let schema = schema();
    let date = decode(&schema, 0).unwrap();
    let view = DateView::plain(&date, &schema);
    assert_eq!(Token::parse("MM").unwrap().render(&view), "Fro");
    assert_eq!(Token::parse("MMM").unwrap().render(&view), "Frostfall");
    assert_eq!(
        Token::parse("MMMM").unwrap().render(&view),
        "The Month of Frostfall"
    );
    assert_eq!(Token::parse("dd").unwrap().render(&view), "Re");
    assert_eq!(
        Token::parse("dddd").unwrap().render(&view),
        "The Day of Rest"
    );
}

#[test]
fn canonical_token_matches_codec() {
    let schema = schema();
    for day in 0..44_i64 {
        let instant = day * 86_400 + 45_296;
        let date = decode(&schema, instant).unwrap();
        let view = DateView::plain(&date, &schema);
        assert_eq!(
            Token::Canonical.render(&view),
            format_date(&schema, &date),
            "canonical drifted at day {day}"
        );
    }
}

#[test]
fn period_overlays_join_year_tokens() {
    let schema = schema();
    let date = decode(&schema, 14 * 86_400).unwrap(); // year 2
    let view = DateView::new(&date, &schema, &TwoAges);
    assert_eq!(render("{Y}", &view), "2");
    assert_eq!(render("{YY}", &view), "102FA/2SA");
    assert_eq!(render("{YYY}", &view), "102 First Age/2 Second Age");
    assert_eq!(
        render("{YYYY}", &view),
        "102 The First Age of the World/2 The Second Age of the World"
    );
    // The canonical date part is era-aware too.
    assert_eq!(render("{PD}", &view), "102FA/2SA-01-01");
}

#[test]
fn template_mixes_tokens_and_text() {
    let schema = schema();
    let date = decode(&schema, 8 * 86_400).unwrap(); // year 1, month 2, date 4
    let view = DateView::new(&date, &schema, &NoPeriods);
    assert_eq!(
        render("{ddd}, {MMM} {Do}, {Y}", &view),
        "Fourthday, Thaw 4th, 1"
    );
}
