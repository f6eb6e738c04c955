//! Placeholder values meaning "no date".

use crate::DateRange;
use crate::rules::RuleContext;

/// "", "n.d.", "undated", "NULL", "n/a", "no date", "0000-00-00", "19-?",
/// any all-letter text, and anything containing "unknown".
///
/// The "unknown" check is unanchored on purpose: it wins even over text that
/// another rule would parse.
pub(crate) fn no_date(text: &str, ctx: &RuleContext<'_>) -> Option<DateRange> {
    let re = regex!(
        r"(?i)^$|^0[0-9]{3}[-—][0-9]{2}[-—][0-9]{2}$|^9999.[0-9]{2}.[0-9]{2}$|^n\.?d\.?$|^null$|^\[?[0-9]{2}[-_]*\??\]?$|^[0-9]$|^[a-z\s]+$|^no\s+date$|^undated$|^n/a$|unknown"
    );
    re.is_match(text).then(|| ctx.sentinel.range())
}
