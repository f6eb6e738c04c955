//! All-numeric forms: years, year ranges, exact dates and their ranges, and
//! dates with an unknown month or day.

use crate::DateRange;
use crate::rules::calendar::{self, clamped_date, iso, long_date, month_bounds, month_year, year_bounds};
use crate::rules::patterns::{
    DAY_NUM, DELIM, MONTH_NUM, RANGE_DELIM, UNKNOWN_PORTION, YEAR, capture, capture_str,
};

/// "2000 to 2005", "2000-05", "2001-00-00 and 2002-00-00", "1995 - 1992"
///
/// A two-digit second year takes the century of the first.
pub(crate) fn year_range(text: &str) -> Option<DateRange> {
    let full = regex_fmt!(
        r"(?i)^(?P<first>{y})(?:{d}{u}{d}{u})?{r}(?P<second>{y})(?:{d}{u}{d}{u})?$",
        y = YEAR,
        d = DELIM,
        u = UNKNOWN_PORTION,
        r = RANGE_DELIM
    );
    let abbreviated = regex_fmt!(r"(?i)^(?P<first>{y}){r}(?P<second>[0-9]{{2}})$", y = YEAR, r = RANGE_DELIM);

    let caps = full.captures(text).or_else(|| abbreviated.captures(text))?;
    let first = capture_str(&caps, "first")?;
    let second = capture_str(&caps, "second")?;
    let second = if second.len() == 2 { format!("{}{}", first.get(..2)?, second) } else { second.to_string() };

    let mut low: i32 = first.parse().ok()?;
    let mut high: i32 = second.parse().ok()?;
    if high < low {
        std::mem::swap(&mut low, &mut high);
    }

    let label = if low == high { low.to_string() } else { format!("{low} - {high}") };
    let (start, end) = calendar::years_bounds(low, high)?;
    Some(DateRange::new(label, start, end))
}

/// "1999-09-01", "12/01/1984", "2014.03.03", "15-01-2000"
///
/// Tried as year-month-day, then month-day-year, then day-month-year.
pub(crate) fn year_month_day(text: &str) -> Option<DateRange> {
    let ymd = regex_fmt!(
        r"^(?P<year>{y}){d}(?P<month>{m}){d}(?P<day>{dd})$",
        y = YEAR,
        d = DELIM,
        m = MONTH_NUM,
        dd = DAY_NUM
    );
    let mdy = regex_fmt!(
        r"^(?P<month>{m}){d}(?P<day>{dd}){d}(?P<year>{y})$",
        y = YEAR,
        d = DELIM,
        m = MONTH_NUM,
        dd = DAY_NUM
    );
    let dmy = regex_fmt!(
        r"^(?P<day>{dd}){d}(?P<month>{m}){d}(?P<year>{y})$",
        y = YEAR,
        d = DELIM,
        m = MONTH_NUM,
        dd = DAY_NUM
    );

    let caps = [ymd, mdy, dmy].into_iter().find_map(|re| re.captures(text))?;
    let date = clamped_date(capture(&caps, "year")?, capture(&caps, "month")?, capture(&caps, "day")?)?;
    Some(DateRange::exact(iso(date), date))
}

/// "2009-05-00 to 2010-02-00", "2002—01—* — 2003-04-XX"
pub(crate) fn year_month_range(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?P<year_1>{y}){d}(?P<month_1>{m}){d}{u}{r}(?P<year_2>{y}){d}(?P<month_2>{m}){d}{u}$",
        y = YEAR,
        d = DELIM,
        m = MONTH_NUM,
        u = UNKNOWN_PORTION,
        r = RANGE_DELIM
    );

    let caps = re.captures(text)?;
    let mut first: (i32, u32) = (capture(&caps, "year_1")?, capture(&caps, "month_1")?);
    let mut second: (i32, u32) = (capture(&caps, "year_2")?, capture(&caps, "month_2")?);
    if second < first {
        std::mem::swap(&mut first, &mut second);
    }

    let (start, _) = month_bounds(first.0, first.1)?;
    let (_, end) = month_bounds(second.0, second.1)?;
    let label = format!("{} - {}", month_year(first.0, first.1)?, month_year(second.0, second.1)?);
    Some(DateRange::new(label, start, end))
}

/// "2009-05-20 to 2008-09-16", "2005/04/06 - 2005/04/08"
///
/// Reversed sides are swapped; two equal sides collapse to one exact date.
pub(crate) fn year_month_day_range(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?P<year_1>{y}){d}(?P<month_1>{m}){d}(?P<day_1>{dd}){r}(?P<year_2>{y}){d}(?P<month_2>{m}){d}(?P<day_2>{dd})$",
        y = YEAR,
        d = DELIM,
        m = MONTH_NUM,
        dd = DAY_NUM,
        r = RANGE_DELIM
    );

    let caps = re.captures(text)?;
    let first = clamped_date(capture(&caps, "year_1")?, capture(&caps, "month_1")?, capture(&caps, "day_1")?)?;
    let second = clamped_date(capture(&caps, "year_2")?, capture(&caps, "month_2")?, capture(&caps, "day_2")?)?;

    Some(exact_or_span(first, second))
}

/// An exact date when both ends agree, otherwise "Month D, YYYY - Month D, YYYY".
pub(crate) fn exact_or_span(a: chrono::NaiveDate, b: chrono::NaiveDate) -> DateRange {
    if a == b {
        return DateRange::exact(iso(a), a);
    }
    let (start, end) = if b < a { (b, a) } else { (a, b) };
    DateRange::new(format!("{} - {}", long_date(start), long_date(end)), start, end)
}

/// "2005-00-01"
///
/// The day is read but not used: without a month the whole year is meant.
pub(crate) fn zero_month(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(r"(?i)^(?P<year>{y}){d}{u}{d}(?:{dd})$", y = YEAR, d = DELIM, u = UNKNOWN_PORTION, dd = DAY_NUM);

    let year: i32 = capture(&re.captures(text)?, "year")?;
    let (start, end) = year_bounds(year)?;
    Some(DateRange::new(year.to_string(), start, end))
}

/// "2021-06-XX", "2001-03-00"
pub(crate) fn zero_day(text: &str) -> Option<DateRange> {
    let re =
        regex_fmt!(r"(?i)^(?P<year>{y}){d}(?P<month>{m}){d}{u}$", y = YEAR, d = DELIM, m = MONTH_NUM, u = UNKNOWN_PORTION);

    let caps = re.captures(text)?;
    let year: i32 = capture(&caps, "year")?;
    let month: u32 = capture(&caps, "month")?;
    let (start, end) = month_bounds(year, month)?;
    Some(DateRange::new(month_year(year, month)?, start, end))
}

/// "2017", "2018-00-00"
pub(crate) fn year(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(r"(?i)^(?P<year>{y})(?:{d}{u}{d}{u})?$", y = YEAR, d = DELIM, u = UNKNOWN_PORTION);

    let year: i32 = capture(&re.captures(text)?, "year")?;
    let (start, end) = year_bounds(year)?;
    Some(DateRange::new(year.to_string(), start, end))
}
