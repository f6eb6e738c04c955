//! Seasons and named periods of a year ("Spring 2002", "Christmas 1985").

use chrono::NaiveDate;

use crate::DateRange;
use crate::rules::calendar::month_end;
use crate::rules::patterns::{YEAR, capture, capture_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Early,
    Spring,
    Easter,
    Summer,
    Fall,
    Winter,
    Christmas,
    Late,
    YearEnd,
}

impl Period {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "early" => Some(Period::Early),
            "spring" => Some(Period::Spring),
            "easter" => Some(Period::Easter),
            "summer" => Some(Period::Summer),
            "fall" => Some(Period::Fall),
            "winter" => Some(Period::Winter),
            "christmas" => Some(Period::Christmas),
            "late" => Some(Period::Late),
            "year end" => Some(Period::YearEnd),
            _ => None,
        }
    }

    /// Inclusive bounds of the period in `year`. Winter runs into February
    /// of the following year.
    fn bounds(self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let ymd = NaiveDate::from_ymd_opt;
        match self {
            Period::Early => Some((ymd(year, 1, 1)?, month_end(year, 2)?)),
            Period::Spring => Some((ymd(year, 3, 1)?, ymd(year, 5, 31)?)),
            Period::Easter => Some((ymd(year, 4, 1)?, ymd(year, 4, 30)?)),
            Period::Summer => Some((ymd(year, 6, 1)?, ymd(year, 8, 31)?)),
            Period::Fall => Some((ymd(year, 9, 1)?, ymd(year, 11, 30)?)),
            Period::Winter => Some((ymd(year, 12, 1)?, month_end(year + 1, 2)?)),
            Period::Christmas => Some((ymd(year, 12, 20)?, ymd(year, 12, 31)?)),
            Period::Late => Some((ymd(year, 11, 1)?, ymd(year, 12, 31)?)),
            Period::YearEnd => Some((ymd(year, 12, 1)?, ymd(year, 12, 31)?)),
        }
    }
}

/// "Spring 2002", "winter 1999", "Year end 1975"
pub(crate) fn season(text: &str) -> Option<DateRange> {
    let re = regex_fmt!(
        r"(?i)^(?P<season>spring|easter|summer|fall|winter|christmas|late|year end|early)\s*(?P<year>{y})$",
        y = YEAR
    );

    let caps = re.captures(text)?;
    let word = capture_str(&caps, "season")?.to_lowercase();
    let year: i32 = capture(&caps, "year")?;
    let (start, end) = Period::from_word(&word)?.bounds(year)?;
    Some(DateRange::new(format!("{} {}", capitalize(&word), year), start, end))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
