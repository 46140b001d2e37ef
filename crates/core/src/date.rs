//! Calendar-date helpers (day granularity, no time of day).

use chrono::{Datelike, Local, NaiveDate};

/// Format used on the wire and in date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Same month and day, one year later.
///
/// 29 February rolls over to 1 March when the next year is not a leap year.
/// Returns `None` only past the end of the representable calendar.
pub fn add_one_year(date: NaiveDate) -> Option<NaiveDate> {
    let year = date.year().checked_add(1)?;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Parse a date as sent by the backend or typed into a date input.
///
/// Accepts `YYYY-MM-DD` or a full ISO date-time, in which case everything from
/// the `T` onwards is ignored.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Render a date the way [`parse_wire_date`] reads it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_year_later_keeps_month_and_day() {
        assert_eq!(add_one_year(ymd(2025, 1, 1)), Some(ymd(2026, 1, 1)));
        assert_eq!(add_one_year(ymd(2023, 12, 31)), Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn leap_day_rolls_to_first_of_march() {
        assert_eq!(add_one_year(ymd(2024, 2, 29)), Some(ymd(2025, 3, 1)));
    }

    #[test]
    fn end_of_calendar_has_no_successor() {
        assert_eq!(add_one_year(NaiveDate::MAX), None);
    }

    #[test]
    fn wire_dates_accept_plain_and_datetime_forms() {
        assert_eq!(parse_wire_date("2025-01-01"), Some(ymd(2025, 1, 1)));
        assert_eq!(
            parse_wire_date("2025-01-01T00:00:00.000+00:00"),
            Some(ymd(2025, 1, 1))
        );
        assert_eq!(parse_wire_date(" 2025-10-10 "), Some(ymd(2025, 10, 10)));
    }

    #[test]
    fn garbage_is_not_a_date() {
        assert_eq!(parse_wire_date(""), None);
        assert_eq!(parse_wire_date("mañana"), None);
        assert_eq!(parse_wire_date("2025-02-30"), None);
    }

    #[test]
    fn format_round_trips_through_parse() {
        let d = ymd(2031, 7, 4);
        assert_eq!(format_date(d), "2031-07-04");
        assert_eq!(parse_wire_date(&format_date(d)), Some(d));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the review date is always exactly one calendar year on.
            #[test]
            fn one_year_later_is_next_year(
                y in 1900i32..2500,
                m in 1u32..=12,
                d in 1u32..=28,
            ) {
                let date = ymd(y, m, d);
                let next = add_one_year(date).unwrap();
                prop_assert_eq!(next.year(), y + 1);
                prop_assert_eq!(next.month(), m);
                prop_assert_eq!(next.day(), d);
                prop_assert!(next > date);
            }
        }
    }
}
