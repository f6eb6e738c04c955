//! Decades ("1920s", "Early 190-") and decade ranges.

use crate::DateRange;
use crate::rules::calendar::years_bounds;
use crate::rules::patterns::{DECADE_STEM, DECADE_SUFFIX, RANGE_DELIM, capture, capture_str};

/// "1920s", "192-", "Early 190-", "late 1880's"
///
/// `early` keeps the first four years of the decade, `late` the last three.
pub(crate) fn decade(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(r"(?i)^(?:(?P<span>early|late)\s*)?(?P<decade>{stem}){suffix}$", stem = DECADE_STEM, suffix = DECADE_SUFFIX);

    let caps = re.captures(text)?;
    let stem: i32 = capture(&caps, "decade")?;
    let base = stem * 10;
    let (first, last) = match capture_str(&caps, "span").map(str::to_lowercase).as_deref() {
        None => (base, base + 9),
        Some("early") => (base, base + 3),
        Some("late") => (base + 7, base + 9),
        Some(_) => return None,
    };

    let (start, end) = years_bounds(first, last)?;
    Some(DateRange::new(format!("{base}s"), start, end))
}

/// "1930s - 1940s", "1880s to 1870s"
pub(crate) fn decade_range(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?P<first>{stem}){suffix}{r}(?P<second>{stem}){suffix}$",
        stem = DECADE_STEM,
        suffix = DECADE_SUFFIX,
        r = RANGE_DELIM
    );

    let caps = re.captures(text)?;
    let mut first: i32 = capture(&caps, "first")?;
    let mut second: i32 = capture(&caps, "second")?;
    if second < first {
        std::mem::swap(&mut first, &mut second);
    }

    let (from, to) = (first * 10, second * 10 + 9);
    let (start, end) = years_bounds(from, to)?;
    Some(DateRange::new(format!("{from} - {to}"), start, end))
}
