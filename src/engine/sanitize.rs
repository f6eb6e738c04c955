/// Strip decorative wrapping from a raw date string.
///
/// Removes leading `{`, `[` and whitespace plus one optional qualifier
/// (`ca.`, `c.`, `circa`, `between`), and trailing `?`, whitespace, `}` and
/// `]`. The inner text is returned unchanged.
///
/// ```
/// assert_eq!(archdate::sanitize("[Circa 2000/02/00 ? ]"), "2000/02/00");
/// assert_eq!(archdate::sanitize("{ca. Spring 1999}"), "Spring 1999");
/// ```
pub fn sanitize(raw: &str) -> String {
    let re = regex!(r"(?is)^\s*[{\[\s]*(?:ca\.?|c\.|circa|between)?\s*(?P<sanitized>.*?)\s*\??\s*[}\]\s]*\s*$");

    match re.captures(raw).and_then(|caps| caps.name("sanitized")) {
        Some(inner) => inner.as_str().to_string(),
        None => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_and_qualifiers_are_removed() {
        assert_eq!(sanitize("[CA 2000]"), "2000");
        assert_eq!(sanitize("[c. 2000]"), "2000");
        assert_eq!(sanitize("Circa 2000?"), "2000");
        assert_eq!(sanitize("[ 2000? ]"), "2000");
        assert_eq!(sanitize("[Between 1996"), "1996");
        assert_eq!(sanitize("1998]"), "1998");
    }

    #[test]
    fn inner_text_keeps_its_case_and_shape() {
        assert_eq!(sanitize("  Late May 2003  "), "Late May 2003");
        assert_eq!(sanitize("1930s - 1940s"), "1930s - 1940s");
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("[n.d.]"), "n.d.");
    }
}
