//! What a single recognition reports.
//!
//! `EventDateParser::parse_date` only needs the range; `parse_date_verbose`
//! and the `--explain` report also want to know which rule matched and how
//! much of the chain ran before it did.

use crate::DateRange;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// The sanitized text the chain actually saw.
    pub sanitized: String,
    pub range: DateRange,
    /// Name of the rule that recognized the text.
    pub rule: &'static str,
    /// Rules whose pattern was tried, the winner included.
    pub attempted: usize,
    /// Rules passed over because the input lacked their buckets.
    pub skipped: usize,
    /// Time spent in the chain.
    pub elapsed: Duration,
}
