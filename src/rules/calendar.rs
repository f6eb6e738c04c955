//! Calendar helpers: month lengths, month names, range boundaries.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in `month` of `year`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some(last.day())
}

/// English month name for `month` (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Month number from an English month word ("Sept.", "jan", "December").
///
/// Only the first three letters matter, so any accepted abbreviation works.
pub fn month_from_word(word: &str) -> Option<u32> {
    let prefix: String = word.chars().take(3).collect::<String>().to_lowercase();
    MONTH_NAMES.iter().position(|name| name[..3].eq_ignore_ascii_case(&prefix)).map(|idx| idx as u32 + 1)
}

/// A date whose day is pulled back to the month's last day when too large.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Last day of `month` in `year`.
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)?)
}

/// First and last day of `month` in `year`.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    Some((NaiveDate::from_ymd_opt(year, month, 1)?, month_end(year, month)?))
}

/// January 1st and December 31st of `year`.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((NaiveDate::from_ymd_opt(year, 1, 1)?, NaiveDate::from_ymd_opt(year, 12, 31)?))
}

/// January 1st of `first` through December 31st of `last`.
pub fn years_bounds(first: i32, last: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((year_bounds(first)?.0, year_bounds(last)?.1))
}

/// `YYYY-MM-DD`.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `Month D, YYYY` (e.g. "March 1, 2000").
pub fn long_date(date: NaiveDate) -> String {
    let month = month_name(date.month()).unwrap_or_default();
    format!("{} {}, {}", month, date.day(), date.year())
}

/// `Month YYYY` (e.g. "March 2000").
pub fn month_year(year: i32, month: u32) -> Option<String> {
    Some(format!("{} {}", month_name(month)?, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(days_in_month(1980, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2001, 2), Some(28));
        assert_eq!(days_in_month(2001, 12), Some(31));
        assert_eq!(days_in_month(2001, 13), None);
    }

    #[test]
    fn month_words_resolve_by_prefix() {
        assert_eq!(month_from_word("Sept."), Some(9));
        assert_eq!(month_from_word("jan"), Some(1));
        assert_eq!(month_from_word("DECEMBER"), Some(12));
        assert_eq!(month_from_word("may."), Some(5));
        assert_eq!(month_from_word("xyz"), None);
        assert_eq!(month_from_word("ja"), None);
    }

    #[test]
    fn clamping_pulls_day_back_into_month() {
        assert_eq!(clamped_date(2001, 2, 30), NaiveDate::from_ymd_opt(2001, 2, 28));
        assert_eq!(clamped_date(2004, 2, 31), NaiveDate::from_ymd_opt(2004, 2, 29));
        assert_eq!(clamped_date(2001, 4, 31), NaiveDate::from_ymd_opt(2001, 4, 30));
        assert_eq!(clamped_date(2001, 4, 12), NaiveDate::from_ymd_opt(2001, 4, 12));
    }

    #[test]
    fn formatting() {
        let date = NaiveDate::from_ymd_opt(2002, 2, 2).unwrap();
        assert_eq!(iso(date), "2002-02-02");
        assert_eq!(long_date(date), "February 2, 2002");
        assert_eq!(month_year(1999, 12).as_deref(), Some("December 1999"));
    }
}
