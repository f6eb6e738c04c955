use archdate::{EventDateParser, EventDates, Recognition, split_by};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_report(parser: &EventDateParser, event: &str, dates: &EventDates, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Event date: \"{}\"", event), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    let cells: Vec<&str> = event.split('|').collect();
    let tokens: Vec<String> = cells.iter().flat_map(|cell| split_by(cell, " and ")).collect();
    if tokens.is_empty() {
        println!("{}", palette.dim("  No event-date tokens (start/end columns only)"));
    }
    for (idx, token) in tokens.iter().enumerate() {
        match parser.parse_date_verbose(token) {
            Ok(found) => print_recognition(idx, token, &found, &palette),
            Err(err) => println!(
                "  {} {} {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.paint(format!("\"{}\"", token), ansi::YELLOW),
                palette.dim(format!("✗ {err}"))
            ),
        }
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("event date:"), palette.bold(palette.paint(&dates.event_date, ansi::GREEN)));
    println!("  {} {}", palette.dim("start date:"), palette.paint(&dates.event_start_date, ansi::GREEN));
    println!("  {} {}", palette.dim("end date:  "), palette.paint(&dates.event_end_date, ansi::GREEN));

    let sentinel = parser.sentinel();
    println!("\n{}", palette.paint("━━━ Configuration ━━━", ansi::GRAY));
    println!(
        "  {} {} {} {} .. {}",
        palette.dim("unknown:"),
        palette.paint(&sentinel.label, ansi::BLUE),
        palette.dim("│"),
        palette.paint(&sentinel.start_text, ansi::YELLOW),
        palette.paint(&sentinel.end_text, ansi::YELLOW)
    );
    println!("  {} {}", palette.dim("rules:"), palette.dim(parser.rule_names().len().to_string()));
    println!();
}

fn print_recognition(idx: usize, token: &str, found: &Recognition, palette: &ansi::Palette) {
    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", idx), ansi::GRAY),
        palette.paint(format!("\"{}\"", token), ansi::YELLOW),
        palette.dim("→"),
        palette.bold(palette.paint(&found.range.label, ansi::GREEN)),
    );
    println!(
        "      {} {}..{}  {} {}",
        palette.dim("range:"),
        found.range.start,
        found.range.end,
        palette.dim("│ rule:"),
        palette.paint(found.rule, ansi::CYAN)
    );
    println!(
        "      {} {:?}  {} {}  {} {}  {} {:?}",
        palette.dim("sanitized:"),
        found.sanitized,
        palette.dim("│ tried:"),
        palette.paint(found.attempted.to_string(), ansi::BLUE),
        palette.dim("skipped:"),
        palette.dim(found.skipped.to_string()),
        palette.dim("│"),
        found.elapsed
    );
}
