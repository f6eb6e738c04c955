//! The ordered rule walk.
//!
//! Rules are tried in `Rule::ALL` order and the first one to recognize the
//! text wins. Bucket gating only skips rules that could not have matched, so
//! it never changes the winner.

use super::metrics::Recognition;
use super::trigger::TriggerInfo;
use crate::rules::{self, Rule, RuleContext};
use std::time::Instant;

#[derive(Debug, Clone)]
pub(crate) struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    pub fn new(timid: bool) -> Self {
        RuleChain { rules: rules::ordered(timid) }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run `text` (already sanitized) through the chain.
    pub fn recognize(&self, text: &str, ctx: &RuleContext<'_>) -> Option<Recognition> {
        let start = Instant::now();
        let trigger = TriggerInfo::scan(text);
        log::trace!("[trigger_scan] input={text:?} buckets={:?}", trigger.buckets);

        let (mut attempted, mut skipped) = (0, 0);
        for rule in &self.rules {
            if !trigger.admits(rule.buckets()) {
                skipped += 1;
                log::trace!("[rule:skip] name=\"{}\"", rule.name());
                continue;
            }

            attempted += 1;
            match rule.recognize(text, ctx) {
                Some(range) => {
                    log::debug!("[rule:match] name=\"{}\" input={text:?} label={:?}", rule.name(), range.label);
                    return Some(Recognition {
                        sanitized: text.to_string(),
                        range,
                        rule: rule.name(),
                        attempted,
                        skipped,
                        elapsed: start.elapsed(),
                    });
                }
                None => log::trace!("[rule:decline] name=\"{}\"", rule.name()),
            }
        }

        log::debug!("[chain:exhausted] input={text:?} attempted={attempted} skipped={skipped}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::tests::context_fixture;

    #[test]
    fn gating_counts_add_up_to_the_winner_position() {
        let fixture = context_fixture();
        let ctx = fixture.ctx();
        let chain = RuleChain::new(false);

        let found = chain.recognize("Spring 2002", &ctx).unwrap();
        let position = chain.names().iter().position(|name| *name == found.rule).unwrap();
        assert_eq!(found.attempted + found.skipped, position + 1);
        // Month-word rules come after seasons, so nothing numeric was skipped.
        assert_eq!(found.skipped, 0);
    }

    #[test]
    fn letters_only_input_skips_digit_rules() {
        let fixture = context_fixture();
        let ctx = fixture.ctx();
        let chain = RuleChain::new(false);

        // "n/a" is caught by the first rule; "#b" falls through to the end.
        assert_eq!(chain.recognize("n/a", &ctx).unwrap().rule, Rule::NoDate.name());
        assert!(chain.recognize("#b", &ctx).is_none());
    }

    #[test]
    fn names_follow_rule_order() {
        let names = RuleChain::new(false).names();
        assert_eq!(names, Rule::ALL.iter().map(|rule| rule.name()).collect::<Vec<_>>());
    }
}
