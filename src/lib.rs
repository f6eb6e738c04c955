//! Rule-based normalization of archival event dates.
//!
//! Archival description records carry three related date columns: a free-text
//! event date ("Circa 2000?", "Spring 1999", "1930s - 1940s", ...) and optional
//! explicit start and end dates. This crate turns them into one consistent
//! triple: a clean human-readable label plus an exact `YYYY-MM-DD` range.
//!
//! ```text
//! raw string ── sanitize ── RuleChain (first match wins) ── DateRange
//!                                                            │
//! event / start / end ────────── reconcile ──────────────────┴── EventDates
//! ```
//!
//! # Example
//! ```
//! use archdate::{EventDateParser, ParserOptions};
//!
//! let parser = EventDateParser::new(ParserOptions::default()).unwrap();
//! let out = parser.parse_event_dates("2000-2001", None, None).unwrap();
//! assert_eq!(out.event_date, "2000 - 2001");
//! assert_eq!(out.event_start_date, "2000-01-01");
//! assert_eq!(out.event_end_date, "2001-12-31");
//! ```
extern crate self as archdate;

#[macro_use]
mod macros;
mod api;
mod cells;
mod engine;
mod error;
mod rules;

pub use api::{Dialect, EventDateParser, EventDates, FallbackOptions, ParserOptions, SentinelDate};
pub use cells::{cardinality, split_by};
pub use engine::{Recognition, sanitize};
pub use error::{Error, Result};
pub use rules::fallback::{EnglishDateParser, FreeTextParser};

use chrono::NaiveDate;

// --- Data model --------------------------------------------------------------

/// A normalized date: a display label and an inclusive calendar range.
///
/// `start <= end` always holds; an exact day has `start == end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, putting the two boundaries in chronological order.
    pub fn new(label: impl Into<String>, a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        DateRange { label: label.into(), start, end }
    }

    /// A single-day range.
    pub fn exact(label: impl Into<String>, date: NaiveDate) -> Self {
        DateRange { label: label.into(), start: date, end: date }
    }

    pub fn is_exact(&self) -> bool {
        self.start == self.end
    }
}

/// The placeholder triple standing in for "no usable date is known".
///
/// Built once per parser and shared read-only by every rule. The textual
/// forms are kept alongside the dates so the sentinel triple can be echoed
/// back exactly as it was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelConfig {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub start_text: String,
    pub end_text: String,
}

impl SentinelConfig {
    /// Validate and order the configured sentinel dates.
    pub fn new(label: impl Into<String>, start: &SentinelDate, end: &SentinelDate) -> Result<Self> {
        let (mut start_date, mut start_text) = (start.to_date("unknown start date")?, start.to_string());
        let (mut end_date, mut end_text) = (end.to_date("unknown end date")?, end.to_string());

        if end_date < start_date {
            std::mem::swap(&mut start_date, &mut end_date);
            std::mem::swap(&mut start_text, &mut end_text);
        }

        Ok(SentinelConfig { label: label.into(), start: start_date, end: end_date, start_text, end_text })
    }

    /// The full sentinel range as a `DateRange`.
    pub fn range(&self) -> DateRange {
        DateRange { label: self.label.clone(), start: self.start, end: self.end }
    }

    /// True when `start..=end` is exactly the sentinel range.
    pub fn is_unknown(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start == self.start && end == self.end
    }

    /// True for either sentinel boundary date.
    pub fn is_reserved(&self, date: NaiveDate) -> bool {
        date == self.start || date == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_range_orders_its_boundaries() {
        let range = DateRange::new("x", ymd(2001, 5, 1), ymd(1999, 1, 1));
        assert_eq!(range.start, ymd(1999, 1, 1));
        assert_eq!(range.end, ymd(2001, 5, 1));
        assert!(!range.is_exact());
    }

    #[test]
    fn sentinel_swaps_reversed_dates_and_their_text() {
        let sentinel =
            SentinelConfig::new("Unknown", &SentinelDate::from("2010-01-01"), &SentinelDate::from("1800-01-01"))
                .unwrap();
        assert_eq!(sentinel.start, ymd(1800, 1, 1));
        assert_eq!(sentinel.end, ymd(2010, 1, 1));
        assert_eq!(sentinel.start_text, "1800-01-01");
        assert_eq!(sentinel.end_text, "2010-01-01");
    }

    #[test]
    fn sentinel_rejects_malformed_text() {
        let err = SentinelConfig::new("Unknown", &SentinelDate::from("1800-1-1"), &SentinelDate::from("2010-01-01"))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = SentinelConfig::new("Unknown", &SentinelDate::from("1800-02-30"), &SentinelDate::from("2010-01-01"))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn sentinel_accepts_structured_dates() {
        let sentinel =
            SentinelConfig::new("?", &SentinelDate::Date(ymd(1850, 6, 1)), &SentinelDate::Date(ymd(1990, 1, 1)))
                .unwrap();
        assert_eq!(sentinel.start_text, "1850-06-01");
        assert!(sentinel.is_unknown(ymd(1850, 6, 1), ymd(1990, 1, 1)));
        assert!(sentinel.is_reserved(ymd(1990, 1, 1)));
        assert!(!sentinel.is_reserved(ymd(1990, 1, 2)));
    }
}
