/// Compile a regex literal once per process and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Like [`regex!`], but for patterns assembled at startup from the shared
/// fragments in `rules::patterns` (`format!`-style arguments).
#[macro_export]
macro_rules! regex_fmt {
    ($($fmt:tt)+) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new(&format!($($fmt)+)).unwrap());
        &*RE
    }};
}
