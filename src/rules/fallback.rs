//! Last-resort rules: a general free-text date parser, then a bare search
//! for any plausible year.
//!
//! Both run only after every structured rule has declined. The free-text
//! parser is comparatively slow on garbage input, which is the other reason it
//! sits at the end of the chain.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};

use crate::DateRange;
use crate::api::{Dialect, FallbackOptions};
use crate::rules::RuleContext;
use crate::rules::calendar::{iso, year_bounds};
use crate::rules::patterns::capture;

/// A best-effort parser for dates in free text.
///
/// Returning `None` means "not recognized"; it is never an error.
pub trait FreeTextParser: Send + Sync {
    fn parse(&self, text: &str, options: &FallbackOptions) -> Option<NaiveDate>;
}

/// [`FreeTextParser`] backed by `chrono-english`.
///
/// Relative expressions ("last friday") resolve against
/// [`FallbackOptions::reference_time`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDateParser;

impl FreeTextParser for EnglishDateParser {
    fn parse(&self, text: &str, options: &FallbackOptions) -> Option<NaiveDate> {
        let now = Utc.from_utc_datetime(&options.reference_time);
        let dialect = match options.dialect {
            Dialect::Uk => chrono_english::Dialect::Uk,
            Dialect::Us => chrono_english::Dialect::Us,
        };
        chrono_english::parse_date_string(text, now, dialect).ok().map(|dt| dt.date_naive())
    }
}

/// Anything the free-text parser understands, as an exact day. Results in a
/// future year are treated as misparses.
pub(crate) fn free_text(text: &str, ctx: &RuleContext<'_>) -> Option<DateRange> {
    let date = ctx.free_text.parse(text, ctx.fallback)?;
    if date.year() > ctx.current_year() {
        log::debug!("free-text parser read {text:?} as {date}, which is in the future; ignoring");
        return None;
    }
    Some(DateRange::exact(iso(date), date))
}

/// The first four-digit year found anywhere, as a whole year.
///
/// Only the first candidate is considered. It must be no later than the
/// current year and no earlier than the configured unknown start year.
pub(crate) fn year_anywhere(text: &str, ctx: &RuleContext<'_>) -> Option<DateRange> {
    let re = regex!(r"(?P<year>[12][0-9]{3})");

    let year: i32 = capture(&re.captures(text)?, "year")?;
    if year > ctx.current_year() || year < ctx.sentinel.start.year() {
        return None;
    }

    let (start, end) = year_bounds(year)?;
    Some(DateRange::new(year.to_string(), start, end))
}
