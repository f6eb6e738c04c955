//! Helpers for multi-value spreadsheet cells (`a|b|c`).

/// Split `value` on `delimiter`, trimming each piece and dropping empty ones.
pub fn split_by(value: &str, delimiter: &str) -> Vec<String> {
    value.split(delimiter).map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Number of pipe-delimited values in a cell: 0 for a blank or missing cell,
/// otherwise the pipe count plus one.
pub fn cardinality(value: Option<&str>) -> usize {
    match value {
        Some(v) if !v.trim().is_empty() => v.matches('|').count() + 1,
        _ => 0,
    }
}

/// Positional split of a cell: keeps empty slots so columns stay aligned.
pub(crate) fn cells(value: Option<&str>) -> Vec<String> {
    if cardinality(value) == 0 {
        return Vec::new();
    }
    value.unwrap_or_default().split('|').map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_by_trims_and_drops_empty_pieces() {
        assert_eq!(split_by(" 1996 and  and 1998 ", " and "), vec!["1996", "1998"]);
        assert_eq!(split_by("", " and "), Vec::<String>::new());
        assert_eq!(split_by("March 2001", " and "), vec!["March 2001"]);
    }

    #[test]
    fn cardinality_counts_pipes() {
        assert_eq!(cardinality(None), 0);
        assert_eq!(cardinality(Some("   ")), 0);
        assert_eq!(cardinality(Some("2001")), 1);
        assert_eq!(cardinality(Some("2001|2002|")), 3);
    }

    #[test]
    fn cells_keep_blank_slots() {
        assert_eq!(cells(Some("2001||2003")), vec!["2001", "", "2003"]);
        assert!(cells(Some("")).is_empty());
    }
}
