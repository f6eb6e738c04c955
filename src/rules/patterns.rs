//! Shared regex fragments.
//!
//! Fragments carry no capture groups of their own; rules wrap them in named
//! groups when assembling a full pattern with `regex_fmt!`. Digits are ASCII
//! only so captured text can be sliced and parsed directly.

use regex::Captures;
use std::str::FromStr;

/// Separator between the components of one date.
pub(crate) const DELIM: &str = r"[-—\./]";

/// Separator between the two sides of a range.
pub(crate) const RANGE_DELIM: &str = r"\s*(?:-|—|and|to)\s*";

/// A month or day explicitly marked as unknown.
pub(crate) const UNKNOWN_PORTION: &str = r"(?:00|[Xx]{1,2}|\*+|\?+)";

pub(crate) const YEAR: &str = r"[12][0-9]{3}";

/// First three digits of a decade ("192" in "1920s").
pub(crate) const DECADE_STEM: &str = r"[12][0-9]{2}";

/// What may follow a decade stem: "192-", "192_", "1920s", "1920's".
pub(crate) const DECADE_SUFFIX: &str = r"(?:-|—|_|0['❜’]?s)";

pub(crate) const MONTH_NUM: &str = r"1[0-2]|0?[1-9]";

pub(crate) const DAY_NUM: &str = r"3[01]|[12][0-9]|0?[1-9]";

pub(crate) const MONTH_NAME: &str = concat!(
    r"jan(?:\.?|uary)?|feb(?:\.?|ruary)?|mar(?:\.?|ch)?|apr(?:\.?|il)?|",
    r"may\.?|jun(?:\.?|e)?|jul(?:\.?|y)?|aug(?:\.?|ust)?|sep(?:\.?|t\.?|tember)?|",
    r"oct(?:\.?|ober)?|nov(?:\.?|ember)?|dec(?:\.?|ember)?"
);

/// Parse a named capture group, `None` if absent or unparseable.
pub(crate) fn capture<T: FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

/// Text of a named capture group.
pub(crate) fn capture_str<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}
