//! Trigger scanning (input pre-classification).
//!
//! Inspects the sanitized input and produces coarse signals that let the chain
//! skip rules whose pattern cannot possibly match.
//!
//! ## Design notes
//!
//! - This is a *heuristic* scan. False positives are fine because the rule
//!   still has to match its full pattern; false negatives are not, since they
//!   would change which rule wins.
//! - Month and season words are found by substring, not by whitespace tokens:
//!   "30-jan-19" and "Sept.1990" have no spaces around the month.

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const MONTHISH   = 1 << 1;
        const SEASONISH  = 1 << 2;
    }
}

/// Three-letter stems of every English month name and abbreviation.
const MONTH_STEMS: &[&str] = &["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];

const SEASON_WORDS: &[&str] =
    &["spring", "easter", "summer", "fall", "winter", "christmas", "late", "year end", "early"];

/// Input characteristics detected from the sanitized input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets.
    ///
    /// Uses `to_ascii_lowercase()`: every trigger word is ASCII English.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();
        let lower = input.to_ascii_lowercase();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }
        if MONTH_STEMS.iter().any(|stem| lower.contains(stem)) {
            buckets |= BucketMask::MONTHISH;
        }
        if SEASON_WORDS.iter().any(|word| lower.contains(word)) {
            buckets |= BucketMask::SEASONISH;
        }

        TriggerInfo { buckets }
    }

    /// True when every bucket in `required` was seen.
    pub fn admits(&self, required: BucketMask) -> bool {
        self.buckets.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_months_and_seasons() {
        let info = TriggerInfo::scan("30-JAN-19");
        assert!(info.admits(BucketMask::HAS_DIGITS | BucketMask::MONTHISH));
        assert!(!info.admits(BucketMask::SEASONISH));

        let info = TriggerInfo::scan("Year end 1975");
        assert!(info.admits(BucketMask::HAS_DIGITS | BucketMask::SEASONISH));

        let info = TriggerInfo::scan("undated");
        assert_eq!(info.buckets, BucketMask::empty());
        assert!(info.admits(BucketMask::empty()));
    }

    #[test]
    fn abbreviations_without_spaces_still_count() {
        assert!(TriggerInfo::scan("sept.1990").admits(BucketMask::MONTHISH));
        assert!(TriggerInfo::scan("Mar. 6 1994").admits(BucketMask::MONTHISH));
    }
}
