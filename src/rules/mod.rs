//! Format rules, in priority order.
//!
//! Every rule is a pure function `(sanitized text, &RuleContext) -> Option<DateRange>`.
//! `Rule` is the tagged dispatch over them; [`Rule::ALL`] is the fixed order in
//! which the chain tries them. Several patterns overlap (a bare year is a prefix
//! of most numeric forms), so the order is part of the behavior: most specific
//! first, heuristics last.

pub(crate) mod calendar;
pub(crate) mod decades;
pub mod fallback;
pub(crate) mod month_words;
pub(crate) mod numeric;
pub(crate) mod patterns;
pub(crate) mod seasons;
pub(crate) mod sentinel;

#[cfg(test)]
pub(crate) mod tests;

use crate::api::FallbackOptions;
use crate::engine::BucketMask;
use crate::{DateRange, SentinelConfig};
use chrono::Datelike;
use fallback::FreeTextParser;

/// Read-only state a rule may consult.
pub(crate) struct RuleContext<'a> {
    pub sentinel: &'a SentinelConfig,
    pub fallback: &'a FallbackOptions,
    pub free_text: &'a dyn FreeTextParser,
}

impl RuleContext<'_> {
    /// Year of the reference time; later years are treated as misparses.
    pub fn current_year(&self) -> i32 {
        self.fallback.reference_time.year()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Rule {
    NoDate,
    YearRange,
    YearMonthDay,
    YearMonthRange,
    YearMonthDayRange,
    ZeroMonth,
    ZeroDay,
    Decade,
    DecadeRange,
    Year,
    Season,
    MonthWordYear,
    MonthWordDayYear,
    DayMonthWordYear,
    MonthWordDayYearRange,
    FreeText,
    YearAnywhere,
}

impl Rule {
    pub const ALL: [Rule; 17] = [
        Rule::NoDate,
        Rule::YearRange,
        Rule::YearMonthDay,
        Rule::YearMonthRange,
        Rule::YearMonthDayRange,
        Rule::ZeroMonth,
        Rule::ZeroDay,
        Rule::Decade,
        Rule::DecadeRange,
        Rule::Year,
        Rule::Season,
        Rule::MonthWordYear,
        Rule::MonthWordDayYear,
        Rule::DayMonthWordYear,
        Rule::MonthWordDayYearRange,
        Rule::FreeText,
        Rule::YearAnywhere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::NoDate => "no date",
            Rule::YearRange => "<year> - <year>",
            Rule::YearMonthDay => "<year>-<month>-<day>",
            Rule::YearMonthRange => "<year>-<month>-?? - <year>-<month>-??",
            Rule::YearMonthDayRange => "<year>-<month>-<day> - <year>-<month>-<day>",
            Rule::ZeroMonth => "<year>-??-<day>",
            Rule::ZeroDay => "<year>-<month>-??",
            Rule::Decade => "[early|late] <decade>",
            Rule::DecadeRange => "<decade> - <decade>",
            Rule::Year => "<year>",
            Rule::Season => "<season> <year>",
            Rule::MonthWordYear => "[early|late|end of] <month name> <year>",
            Rule::MonthWordDayYear => "<month name> <day>, <year>",
            Rule::DayMonthWordYear => "<day>-<month name>-<year>",
            Rule::MonthWordDayYearRange => "<month name> [<day>,] <year> - <month name> [<day>,] <year>",
            Rule::FreeText => "free text",
            Rule::YearAnywhere => "year anywhere",
        }
    }

    /// Coarse input features the rule's pattern cannot match without.
    pub fn buckets(self) -> BucketMask {
        match self {
            Rule::NoDate | Rule::FreeText => BucketMask::empty(),
            Rule::Season => BucketMask::HAS_DIGITS | BucketMask::SEASONISH,
            Rule::MonthWordYear
            | Rule::MonthWordDayYear
            | Rule::DayMonthWordYear
            | Rule::MonthWordDayYearRange => BucketMask::HAS_DIGITS | BucketMask::MONTHISH,
            _ => BucketMask::HAS_DIGITS,
        }
    }

    pub fn recognize(self, text: &str, ctx: &RuleContext<'_>) -> Option<DateRange> {
        match self {
            Rule::NoDate => sentinel::no_date(text, ctx),
            Rule::YearRange => numeric::year_range(text),
            Rule::YearMonthDay => numeric::year_month_day(text),
            Rule::YearMonthRange => numeric::year_month_range(text),
            Rule::YearMonthDayRange => numeric::year_month_day_range(text),
            Rule::ZeroMonth => numeric::zero_month(text),
            Rule::ZeroDay => numeric::zero_day(text),
            Rule::Decade => decades::decade(text),
            Rule::DecadeRange => decades::decade_range(text),
            Rule::Year => numeric::year(text),
            Rule::Season => seasons::season(text),
            Rule::MonthWordYear => month_words::month_word_year(text),
            Rule::MonthWordDayYear => month_words::month_word_day_year(text),
            Rule::DayMonthWordYear => month_words::day_month_word_year(text),
            Rule::MonthWordDayYearRange => month_words::month_word_day_year_range(text),
            Rule::FreeText => fallback::free_text(text, ctx),
            Rule::YearAnywhere => fallback::year_anywhere(text, ctx),
        }
    }
}

/// The rule order used by a parser. Timid parsers leave out the
/// search-anywhere fallback.
pub(crate) fn ordered(timid: bool) -> Vec<Rule> {
    Rule::ALL.into_iter().filter(|rule| !(timid && *rule == Rule::YearAnywhere)).collect()
}
