//! Merging the event-date, start-date and end-date columns of one row.
//!
//! The event date is split on `" and "` and every token is recognized; the
//! start and end columns are recognized leniently. Sentinel dates are avoided
//! wherever a real boundary exists, so a placeholder never widens a real range.

use crate::api::{EventDateParser, EventDates};
use crate::cells::{cardinality, split_by};
use crate::rules::calendar::iso;
use crate::rules::numeric;
use crate::{Error, Result, SentinelConfig};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Literal used for explicitly empty columns.
pub(crate) const NULL: &str = "NULL";

pub(crate) fn reconcile(
    parser: &EventDateParser,
    event: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<EventDates> {
    let sentinel = parser.sentinel();
    let event = event.trim();
    let start = start.map(str::trim).unwrap_or_default();
    let end = end.map(str::trim).unwrap_or_default();

    if [event, start, end].into_iter().any(|field| cardinality(Some(field)) > 1) {
        return Err(Error::Configuration("parse_event_dates does not accept pipe-delimited date cells".to_string()));
    }
    if let Some(trivial) = trivial_case(sentinel, event, start, end) {
        return Ok(trivial);
    }

    let mut labels = BTreeSet::new();
    let mut endpoints = BTreeSet::new();
    for token in split_by(event, " and ") {
        let range = parser.parse_date(&token)?;
        endpoints.insert(range.start);
        endpoints.insert(range.end);
        labels.insert(range.label);
    }

    let (mut low, mut high) = bounds_avoiding_reserved(sentinel, &endpoints);
    let (column_low, column_high) = start_end_range(parser, start, end).unwrap_or((low, high));

    if sentinel.is_unknown(low, high) && !sentinel.is_unknown(column_low, column_high) {
        low = column_low;
        high = column_high;
    }

    if column_low < low || column_high > high {
        let (low, high) = (low.min(column_low), high.max(column_high));
        let literal = format!("{} - {}", iso(low), iso(high));
        log::debug!("start/end dates widen {event:?} to {literal}");
        let label = numeric::year_month_day_range(&literal).map(|range| range.label).unwrap_or(literal);
        return Ok(EventDates { event_date: label, event_start_date: iso(low), event_end_date: iso(high) });
    }

    Ok(EventDates {
        event_date: contained_label(sentinel, &labels, low, high),
        event_start_date: iso(low),
        event_end_date: iso(high),
    })
}

fn trivial_case(sentinel: &SentinelConfig, event: &str, start: &str, end: &str) -> Option<EventDates> {
    let fields = [event, start, end];
    if fields.iter().all(|field| field.is_empty()) || event == sentinel.label {
        return Some(EventDates::unknown(sentinel));
    }
    if fields.iter().all(|field| field.is_empty() || field.eq_ignore_ascii_case(NULL)) {
        return Some(EventDates::null());
    }
    None
}

/// Earliest and latest of `dates`, skipping the sentinel boundaries when
/// more than one date is present and a real one exists.
fn bounds_avoiding_reserved(sentinel: &SentinelConfig, dates: &BTreeSet<NaiveDate>) -> (NaiveDate, NaiveDate) {
    if let (1, Some(&only)) = (dates.len(), dates.first()) {
        return (only, only);
    }
    let real = |date: &&NaiveDate| !sentinel.is_reserved(**date);
    let low = dates.iter().find(real).copied().unwrap_or(sentinel.start);
    let high = dates.iter().rev().find(real).copied().unwrap_or(sentinel.end);
    (low, high)
}

/// The span covered by the start and end columns, or `None` when they say
/// nothing beyond the sentinel.
fn start_end_range(parser: &EventDateParser, start: &str, end: &str) -> Option<(NaiveDate, NaiveDate)> {
    let sentinel = parser.sentinel();
    let fields: BTreeSet<&str> = [start, end].into_iter().collect();
    if fields.contains(sentinel.start_text.as_str()) && fields.contains(sentinel.end_text.as_str()) {
        return None;
    }

    let mut dates = BTreeSet::new();
    for field in fields {
        match parser.parse_date(field) {
            Ok(range) if sentinel.is_unknown(range.start, range.end) => {}
            Ok(range) => {
                dates.insert(range.start);
                dates.insert(range.end);
            }
            Err(err) => log::debug!("ignoring start/end column: {err}"),
        }
    }

    let (&low, &high) = (dates.first()?, dates.last()?);
    (!sentinel.is_unknown(low, high)).then_some((low, high))
}

/// Label for an event-date range that already contains the start/end dates.
fn contained_label(sentinel: &SentinelConfig, labels: &BTreeSet<String>, low: NaiveDate, high: NaiveDate) -> String {
    let known: Vec<&str> =
        labels.iter().map(String::as_str).filter(|label| *label != NULL && *label != sentinel.label).collect();

    if !known.is_empty() {
        known.join(" and ")
    } else if sentinel.is_unknown(low, high) {
        sentinel.label.clone()
    } else if low.year() == high.year() {
        low.year().to_string()
    } else {
        format!("{} - {}", low.year(), high.year())
    }
}
