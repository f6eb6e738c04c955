use crate::cells;
use crate::engine::{self, Recognition, RuleChain};
use crate::rules::RuleContext;
use crate::rules::fallback::{EnglishDateParser, FreeTextParser};
use crate::{DateRange, Error, Result, SentinelConfig};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Spelling convention handed to the free-text parser ("04/05" is 4 May in
/// the UK and April 5 in the US).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Uk,
    Us,
}

/// Options passed through to the [`FreeTextParser`].
#[derive(Debug, Clone)]
pub struct FallbackOptions {
    pub dialect: Dialect,
    /// Reference datetime for relative expressions. Its year is also the
    /// latest year the fallback rules accept.
    pub reference_time: NaiveDateTime,
}

impl Default for FallbackOptions {
    fn default() -> Self {
        let now = || Local::now().naive_local();
        let reference_time = if cfg!(test) {
            NaiveDate::from_ymd_opt(2022, 6, 15).map(|date| date.and_time(NaiveTime::MIN)).unwrap_or_else(now)
        } else {
            now()
        };
        Self { dialect: Dialect::default(), reference_time }
    }
}

/// A configured sentinel boundary: either `yyyy-mm-dd` text or a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentinelDate {
    Text(String),
    Date(NaiveDate),
}

impl SentinelDate {
    /// The calendar date this stands for. `what` names the option in errors.
    pub(crate) fn to_date(&self, what: &str) -> Result<NaiveDate> {
        match self {
            SentinelDate::Date(date) => Ok(*date),
            SentinelDate::Text(text) => {
                if !regex!(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").is_match(text) {
                    return Err(Error::Configuration(format!("{what} \"{text}\" does not match yyyy-mm-dd format")));
                }
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .map_err(|err| Error::Configuration(format!("{what} \"{text}\" is not a calendar date: {err}")))
            }
        }
    }
}

impl fmt::Display for SentinelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentinelDate::Text(text) => f.write_str(text),
            SentinelDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for SentinelDate {
    fn from(text: &str) -> Self {
        SentinelDate::Text(text.to_string())
    }
}

impl From<String> for SentinelDate {
    fn from(text: String) -> Self {
        SentinelDate::Text(text)
    }
}

impl From<NaiveDate> for SentinelDate {
    fn from(date: NaiveDate) -> Self {
        SentinelDate::Date(date)
    }
}

/// Construction parameters for [`EventDateParser`].
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Label used for dates that are not known at all.
    pub unknown_date: String,
    pub unknown_start_date: SentinelDate,
    pub unknown_end_date: SentinelDate,
    /// Leave out the rule that accepts any plausible year found anywhere.
    pub timid: bool,
    pub fallback: FallbackOptions,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            unknown_date: "Unknown date".to_string(),
            unknown_start_date: SentinelDate::from("1800-01-01"),
            unknown_end_date: SentinelDate::from("2010-01-01"),
            timid: false,
            fallback: FallbackOptions::default(),
        }
    }
}

/// The reconciled value of the three date columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDates {
    pub event_date: String,
    pub event_start_date: String,
    pub event_end_date: String,
}

impl EventDates {
    /// The sentinel triple, using the configured text of the sentinel dates.
    pub(crate) fn unknown(sentinel: &SentinelConfig) -> Self {
        EventDates {
            event_date: sentinel.label.clone(),
            event_start_date: sentinel.start_text.clone(),
            event_end_date: sentinel.end_text.clone(),
        }
    }

    /// All three columns explicitly null.
    pub(crate) fn null() -> Self {
        EventDates {
            event_date: engine::NULL.to_string(),
            event_start_date: engine::NULL.to_string(),
            event_end_date: engine::NULL.to_string(),
        }
    }
}

/// Normalizes event-date strings and reconciles them with start/end columns.
///
/// Configuration is fixed at construction; a parser can be shared across
/// threads and reused for any number of calls.
pub struct EventDateParser {
    sentinel: SentinelConfig,
    chain: RuleChain,
    fallback: FallbackOptions,
    free_text: Box<dyn FreeTextParser>,
}

impl fmt::Debug for EventDateParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDateParser")
            .field("sentinel", &self.sentinel)
            .field("rules", &self.chain.names())
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl EventDateParser {
    /// Build a parser that falls back to [`EnglishDateParser`] for free text.
    pub fn new(options: ParserOptions) -> Result<Self> {
        Self::with_free_text_parser(options, Box::new(EnglishDateParser))
    }

    /// Build a parser with a caller-supplied free-text collaborator.
    pub fn with_free_text_parser(options: ParserOptions, free_text: Box<dyn FreeTextParser>) -> Result<Self> {
        let sentinel =
            SentinelConfig::new(options.unknown_date, &options.unknown_start_date, &options.unknown_end_date)?;
        Ok(Self { sentinel, chain: RuleChain::new(options.timid), fallback: options.fallback, free_text })
    }

    pub fn sentinel(&self) -> &SentinelConfig {
        &self.sentinel
    }

    /// Names of the rules this parser tries, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.chain.names()
    }

    /// Sanitize `date` and run it through the rule chain.
    ///
    /// # Example
    /// ```
    /// use archdate::{EventDateParser, ParserOptions};
    ///
    /// let parser = EventDateParser::new(ParserOptions::default()).unwrap();
    /// let range = parser.parse_date("[Circa 1920s?]").unwrap();
    /// assert_eq!(range.label, "1920s");
    /// ```
    pub fn parse_date(&self, date: &str) -> Result<DateRange> {
        self.parse_date_verbose(date).map(|found| found.range)
    }

    /// Like [`parse_date`](Self::parse_date), but also reports which rule
    /// matched and how much of the chain ran.
    pub fn parse_date_verbose(&self, date: &str) -> Result<Recognition> {
        let sanitized = engine::sanitize(date);
        self.chain
            .recognize(&sanitized, &self.context())
            .ok_or_else(|| Error::UnknownDateFormat { input: date.to_string() })
    }

    /// Reconcile one row's event date with its optional start and end dates.
    ///
    /// None of the three values may be pipe-delimited; see
    /// [`parse_event_date_cells`](Self::parse_event_date_cells) for that.
    pub fn parse_event_dates(&self, event: &str, start: Option<&str>, end: Option<&str>) -> Result<EventDates> {
        engine::reconcile(self, event, start, end)
    }

    /// Reconcile pipe-delimited cells position by position and join the
    /// results back with `|`.
    ///
    /// A start or end cell may not hold more values than the event cell,
    /// unless the event cell is blank.
    pub fn parse_event_date_cells(&self, event: &str, start: Option<&str>, end: Option<&str>) -> Result<EventDates> {
        let events = cells::cells(Some(event));
        let starts = cells::cells(start);
        let ends = cells::cells(end);

        if !events.is_empty() && (starts.len() > events.len() || ends.len() > events.len()) {
            return Err(Error::Configuration(format!(
                "{} event dates but {} start dates and {} end dates",
                events.len(),
                starts.len(),
                ends.len()
            )));
        }

        let rows = events.len().max(starts.len()).max(ends.len()).max(1);
        let mut reconciled = Vec::with_capacity(rows);
        for row in 0..rows {
            let event = events.get(row).map(String::as_str).unwrap_or_default();
            let start = starts.get(row).map(String::as_str);
            let end = ends.get(row).map(String::as_str);
            reconciled.push(self.parse_event_dates(event, start, end)?);
        }

        let join = |column: fn(&EventDates) -> &str| reconciled.iter().map(column).collect::<Vec<_>>().join("|");
        Ok(EventDates {
            event_date: join(|d| d.event_date.as_str()),
            event_start_date: join(|d| d.event_start_date.as_str()),
            event_end_date: join(|d| d.event_end_date.as_str()),
        })
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext { sentinel: &self.sentinel, fallback: &self.fallback, free_text: self.free_text.as_ref() }
    }
}
