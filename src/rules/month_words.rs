//! Dates written with English month names.

use chrono::NaiveDate;

use crate::DateRange;
use crate::rules::calendar::{clamped_date, iso, month_bounds, month_end, month_from_word, month_year};
use crate::rules::numeric::exact_or_span;
use crate::rules::patterns::{DAY_NUM, DELIM, MONTH_NAME, RANGE_DELIM, YEAR, capture, capture_str};

/// "August 1974", "Jan. 1979", "Late May 2003", "end of Sept 1990"
///
/// `early` is days 1-10, `end of` days 16 onwards, `late` days 21 onwards.
pub(crate) fn month_word_year(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?:(?P<span>early|end of|late)\s*)?(?P<month>{mn})\s*(?P<year>{y})$",
        mn = MONTH_NAME,
        y = YEAR
    );

    let caps = re.captures(text)?;
    let month = month_from_word(capture_str(&caps, "month")?)?;
    let year: i32 = capture(&caps, "year")?;
    let (first, last) = month_bounds(year, month)?;

    let (start, end) = match capture_str(&caps, "span").map(str::to_lowercase).as_deref() {
        None => (first, last),
        Some("early") => (first, NaiveDate::from_ymd_opt(year, month, 10)?),
        Some("end of") => (NaiveDate::from_ymd_opt(year, month, 16)?, last),
        Some("late") => (NaiveDate::from_ymd_opt(year, month, 21)?, last),
        Some(_) => return None,
    };

    Some(DateRange::new(month_year(year, month)?, start, end))
}

/// "January 17, 2009", "mar. 6 1994"
pub(crate) fn month_word_day_year(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?P<month>{mn})\s*(?P<day>{dd})(?:,\s*|\s+)(?P<year>{y})$",
        mn = MONTH_NAME,
        dd = DAY_NUM,
        y = YEAR
    );

    let caps = re.captures(text)?;
    let month = month_from_word(capture_str(&caps, "month")?)?;
    let date = clamped_date(capture(&caps, "year")?, month, capture(&caps, "day")?)?;
    Some(DateRange::exact(iso(date), date))
}

/// "30-jan-19", "1-mar-1908" (spreadsheet exports)
///
/// A two-digit year is read as 19xx. This is a blunt guess, but it is what
/// existing catalogues were normalized with, so it stays.
pub(crate) fn day_month_word_year(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?P<day>{dd}){d}(?P<month>{mn}){d}(?P<year>[12][0-9](?:[0-9]{{2}})?)$",
        dd = DAY_NUM,
        d = DELIM,
        mn = MONTH_NAME
    );

    let caps = re.captures(text)?;
    let month = month_from_word(capture_str(&caps, "month")?)?;
    let year = capture_str(&caps, "year")?;
    let year: i32 = if year.len() == 2 { format!("19{year}").parse().ok()? } else { year.parse().ok()? };
    let date = clamped_date(year, month, capture(&caps, "day")?)?;
    Some(DateRange::exact(iso(date), date))
}

/// "September 29, 2002 to September 30, 2002", "May 2002 - June 3, 2003"
///
/// A side without a day stands for its whole month: the earlier side
/// contributes its first day, the later side its last.
pub(crate) fn month_word_day_year_range(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?P<month_1>{mn})\s*(?:(?P<day_1>{dd})(?:,\s*|\s+))?(?P<year_1>{y}){r}(?P<month_2>{mn})\s*(?:(?P<day_2>{dd})(?:,\s*|\s+))?(?P<year_2>{y})$",
        mn = MONTH_NAME,
        dd = DAY_NUM,
        y = YEAR,
        r = RANGE_DELIM
    );

    let caps = re.captures(text)?;
    let first = side_bounds(&caps, "month_1", "day_1", "year_1")?;
    let second = side_bounds(&caps, "month_2", "day_2", "year_2")?;
    let (earlier, later) = if second < first { (second, first) } else { (first, second) };

    Some(exact_or_span(earlier.0, later.1))
}

/// First and last day one side of a range can mean.
fn side_bounds(caps: &regex::Captures<'_>, month: &str, day: &str, year: &str) -> Option<(NaiveDate, NaiveDate)> {
    let month = month_from_word(capture_str(caps, month)?)?;
    let year: i32 = capture(caps, year)?;
    match capture::<u32>(caps, day) {
        Some(day) => {
            let date = clamped_date(year, month, day)?;
            Some((date, date))
        }
        None => Some((NaiveDate::from_ymd_opt(year, month, 1)?, month_end(year, month)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_and_year() {
        let cases = [
            ("January 1979", "January 1979", ymd(1979, 1, 1), ymd(1979, 1, 31)),
            ("Jan. 1979", "January 1979", ymd(1979, 1, 1), ymd(1979, 1, 31)),
            ("February 1980", "February 1980", ymd(1980, 2, 1), ymd(1980, 2, 29)),
            ("Feb 1980", "February 1980", ymd(1980, 2, 1), ymd(1980, 2, 29)),
            ("May. 1983", "May 1983", ymd(1983, 5, 1), ymd(1983, 5, 31)),
            ("sept. 1990", "September 1990", ymd(1990, 9, 1), ymd(1990, 9, 30)),
            ("Early June 1944", "June 1944", ymd(1944, 6, 1), ymd(1944, 6, 10)),
            ("end of April 1982", "April 1982", ymd(1982, 4, 16), ymd(1982, 4, 30)),
            ("Late May 2003", "May 2003", ymd(2003, 5, 21), ymd(2003, 5, 31)),
        ];
        for (input, label, start, end) in cases {
            let range = month_word_year(input).unwrap_or_else(|| panic!("no match for {input:?}"));
            assert_eq!(range.label, label, "input {input:?}");
            assert_eq!((range.start, range.end), (start, end), "input {input:?}");
        }
    }

    #[test]
    fn month_day_year() {
        assert_eq!(month_word_day_year("January 17, 2009").unwrap().label, "2009-01-17");
        assert_eq!(month_word_day_year("mar. 6 1994").unwrap().label, "1994-03-06");
        assert_eq!(month_word_day_year("Feb 30, 2001").unwrap().label, "2001-02-28");
        assert!(month_word_day_year("January 1979").is_none());
    }

    #[test]
    fn day_month_year_from_spreadsheets() {
        let range = day_month_word_year("30-jan-19").unwrap();
        assert_eq!(range.label, "1919-01-30");
        assert!(range.is_exact());
        assert_eq!(day_month_word_year("1-mar-1908").unwrap().label, "1908-03-01");
        assert_eq!(day_month_word_year("5.Dec.2001").unwrap().label, "2001-12-05");
    }

    #[test]
    fn month_word_ranges() {
        let range = month_word_day_year_range("September 29, 2002 to September 30, 2002").unwrap();
        assert_eq!(range.label, "September 29, 2002 - September 30, 2002");
        assert_eq!((range.start, range.end), (ymd(2002, 9, 29), ymd(2002, 9, 30)));

        let same = month_word_day_year_range("May 5, 2001 - May 5, 2001").unwrap();
        assert_eq!(same.label, "2001-05-05");

        let reversed = month_word_day_year_range("June 3, 2003 - May 1, 2002").unwrap();
        assert_eq!(reversed.label, "May 1, 2002 - June 3, 2003");
    }

    #[test]
    fn month_word_ranges_without_days_cover_whole_months() {
        let range = month_word_day_year_range("October 2003 to September 2002").unwrap();
        assert_eq!(range.label, "September 1, 2002 - October 31, 2003");
        assert_eq!((range.start, range.end), (ymd(2002, 9, 1), ymd(2003, 10, 31)));

        let range = month_word_day_year_range("Feb 1980 - March 3, 1980").unwrap();
        assert_eq!((range.start, range.end), (ymd(1980, 2, 1), ymd(1980, 3, 3)));
    }
}
