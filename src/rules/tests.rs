use chrono::NaiveDate;

use crate::api::FallbackOptions;
use crate::engine::RuleChain;
use crate::rules::fallback::FreeTextParser;
use crate::rules::{Rule, RuleContext};
use crate::{SentinelConfig, SentinelDate};

/// Free-text parser that only knows the answers it was given.
#[derive(Debug, Default)]
pub(crate) struct StubFreeText {
    answers: Vec<(String, NaiveDate)>,
}

impl FreeTextParser for StubFreeText {
    fn parse(&self, text: &str, _options: &FallbackOptions) -> Option<NaiveDate> {
        self.answers.iter().find(|(known, _)| known == text).map(|(_, date)| *date)
    }
}

/// Owns everything a `RuleContext` borrows.
pub(crate) struct ContextFixture {
    pub sentinel: SentinelConfig,
    pub fallback: FallbackOptions,
    pub free_text: StubFreeText,
}

impl ContextFixture {
    pub fn with_free_text(mut self, text: &str, (y, m, d): (i32, u32, u32)) -> Self {
        self.free_text.answers.push((text.to_string(), NaiveDate::from_ymd_opt(y, m, d).unwrap()));
        self
    }

    pub fn ctx(&self) -> RuleContext<'_> {
        RuleContext { sentinel: &self.sentinel, fallback: &self.fallback, free_text: &self.free_text }
    }
}

/// Default sentinel (1800-01-01 .. 2010-01-01) and a 2022-06-15 reference time.
pub(crate) fn context_fixture() -> ContextFixture {
    let sentinel =
        SentinelConfig::new("Unknown date", &SentinelDate::from("1800-01-01"), &SentinelDate::from("2010-01-01"))
            .unwrap();
    ContextFixture { sentinel, fallback: FallbackOptions::default(), free_text: StubFreeText::default() }
}

fn ymd(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn chain_examples_matching() {
    // (input, expected label, expected start, expected end)
    let cases: Vec<(&str, &str, &str, &str)> = vec![
        ("", "Unknown date", "1800-01-01", "2010-01-01"),
        ("n.d.", "Unknown date", "1800-01-01", "2010-01-01"),
        ("Undated", "Unknown date", "1800-01-01", "2010-01-01"),
        ("2000-01-01 unknown", "Unknown date", "1800-01-01", "2010-01-01"),
        ("2000-2001", "2000 - 2001", "2000-01-01", "2001-12-31"),
        ("1995 - 1992", "1992 - 1995", "1992-01-01", "1995-12-31"),
        ("1901-20", "1901 - 1920", "1901-01-01", "1920-12-31"),
        ("2000-01-01", "2000-01-01", "2000-01-01", "2000-01-01"),
        ("2000/02/02", "2000-02-02", "2000-02-02", "2000-02-02"),
        ("2000.03.03", "2000-03-03", "2000-03-03", "2000-03-03"),
        ("01-01-2000", "2000-01-01", "2000-01-01", "2000-01-01"),
        ("12-13-2000", "2000-12-13", "2000-12-13", "2000-12-13"),
        ("15-01-2000", "2000-01-15", "2000-01-15", "2000-01-15"),
        ("2001-02-30", "2001-02-28", "2001-02-28", "2001-02-28"),
        ("2000.02.00-2000.04.00", "February 2000 - April 2000", "2000-02-01", "2000-04-30"),
        ("2009-05-20 to 2008-09-16", "September 16, 2008 - May 20, 2009", "2008-09-16", "2009-05-20"),
        ("2005-00-01", "2005", "2005-01-01", "2005-12-31"),
        ("2001-03-00", "March 2001", "2001-03-01", "2001-03-31"),
        ("1920s", "1920s", "1920-01-01", "1929-12-31"),
        ("Late 188-", "1880s", "1887-01-01", "1889-12-31"),
        ("1930s - 1940s", "1930 - 1949", "1930-01-01", "1949-12-31"),
        ("2000", "2000", "2000-01-01", "2000-12-31"),
        ("2000-00-00", "2000", "2000-01-01", "2000-12-31"),
        ("Spring 2002", "Spring 2002", "2002-03-01", "2002-05-31"),
        ("Winter 1999", "Winter 1999", "1999-12-01", "2000-02-29"),
        ("February 1980", "February 1980", "1980-02-01", "1980-02-29"),
        ("Late May 2003", "May 2003", "2003-05-21", "2003-05-31"),
        ("May 17, 2009", "2009-05-17", "2009-05-17", "2009-05-17"),
        ("30-jan-19", "1919-01-30", "1919-01-30", "1919-01-30"),
        ("September 29, 2002 to September 30, 2002", "September 29, 2002 - September 30, 2002", "2002-09-29", "2002-09-30"),
        ("taken around 1954 probably", "1954", "1954-01-01", "1954-12-31"),
    ];

    let fixture = context_fixture();
    let ctx = fixture.ctx();
    let chain = RuleChain::new(false);

    for (input, label, start, end) in cases {
        let found = chain.recognize(input, &ctx).unwrap_or_else(|| panic!("no rule recognized {input:?}"));
        assert_eq!(found.range.label, label, "input {input:?} (rule {})", found.rule);
        assert_eq!(found.range.start, ymd(start), "input {input:?} (rule {})", found.rule);
        assert_eq!(found.range.end, ymd(end), "input {input:?} (rule {})", found.rule);
    }
}

#[test]
fn first_match_wins() {
    let fixture = context_fixture();
    let ctx = fixture.ctx();
    let chain = RuleChain::new(false);

    let cases = [
        ("2000-2001", Rule::YearRange),
        ("2001-03-00", Rule::ZeroDay),
        ("2000-00-00", Rule::Year),
        ("Early 1984", Rule::Season),
        ("Early June 1944", Rule::MonthWordYear),
        ("1999-05", Rule::YearRange),
        ("UNKNOWN 1999", Rule::NoDate),
    ];
    for (input, rule) in cases {
        let found = chain.recognize(input, &ctx).unwrap();
        assert_eq!(found.rule, rule.name(), "input {input:?}");
    }
}

#[test]
fn free_text_runs_before_year_anywhere() {
    let fixture = context_fixture().with_free_text("3rd of May 1950", (1950, 5, 3));
    let ctx = fixture.ctx();
    let found = RuleChain::new(false).recognize("3rd of May 1950", &ctx).unwrap();
    assert_eq!(found.rule, Rule::FreeText.name());
    assert_eq!(found.range.label, "1950-05-03");
}

#[test]
fn timid_chain_gives_up_instead_of_guessing() {
    let fixture = context_fixture();
    let ctx = fixture.ctx();
    assert!(RuleChain::new(true).recognize("taken around 1954 probably", &ctx).is_none());
    assert!(RuleChain::new(false).recognize("taken around 1954 probably", &ctx).is_some());
    assert!(!RuleChain::new(true).names().contains(&Rule::YearAnywhere.name()));
}

#[test]
fn unrecognized_text_declines() {
    let fixture = context_fixture();
    let ctx = fixture.ctx();
    assert!(RuleChain::new(false).recognize("#42/b", &ctx).is_none());
    assert!(RuleChain::new(false).recognize("letter no. 1750", &ctx).is_none());
}
