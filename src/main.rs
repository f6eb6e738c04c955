mod debug_report;

use archdate::{Dialect, Error, EventDateParser, ParserOptions, SentinelDate};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging(config.verbosity);

    let parser = match EventDateParser::new(config.options) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let dates = match parser.parse_event_date_cells(&config.event, config.start.as_deref(), config.end.as_deref()) {
        Ok(dates) => dates,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(exit_code(&err));
        }
    };

    if config.explain {
        debug_report::print_report(&parser, &config.event, &dates, config.color);
    } else {
        println!("{}\t{}\t{}", dates.event_date, dates.event_start_date, dates.event_end_date);
    }
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::UnknownDateFormat { .. } => 1,
        Error::Configuration(_) => 2,
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 if std::env::var_os("ARCHDATE_DEBUG_RULES").is_some() => LevelFilter::Trace,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

struct CliConfig {
    event: String,
    start: Option<String>,
    end: Option<String>,
    options: ParserOptions,
    explain: bool,
    color: bool,
    verbosity: u8,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut event: Option<String> = None;
    let mut start: Option<String> = None;
    let mut end: Option<String> = None;
    let mut options = ParserOptions::default();
    let mut explain = false;
    let mut color = io::stdout().is_terminal();
    let mut verbosity = 0u8;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("archdate {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" => verbosity = verbosity.max(1),
            "-vv" => verbosity = 2,
            "--color" => color = true,
            "--no-color" => color = false,
            "--explain" => explain = true,
            "--timid" => options.timid = true,
            "--us" => options.fallback.dialect = Dialect::Us,
            "--start" => start = Some(expect_value(&mut args, "--start")?),
            "--end" => end = Some(expect_value(&mut args, "--end")?),
            "--unknown-date" => options.unknown_date = expect_value(&mut args, "--unknown-date")?,
            "--unknown-start" => {
                options.unknown_start_date = SentinelDate::from(expect_value(&mut args, "--unknown-start")?)
            }
            "--unknown-end" => options.unknown_end_date = SentinelDate::from(expect_value(&mut args, "--unknown-end")?),
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                set_event(&mut event, rest)?;
                break;
            }
            _ if arg.starts_with("--start=") => start = Some(arg.trim_start_matches("--start=").to_string()),
            _ if arg.starts_with("--end=") => end = Some(arg.trim_start_matches("--end=").to_string()),
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_event(&mut event, rest)?;
                break;
            }
        }
    }

    let event = match event {
        Some(value) => value,
        None if io::stdin().is_terminal() => return Err(format!("error: no event date provided\n\n{}", help_text())),
        None => read_stdin_input()?,
    };

    Ok(CliConfig { event: event.trim().to_string(), start, end, options, explain, color, verbosity })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn set_event(event: &mut Option<String>, value: String) -> Result<(), String> {
    if event.is_some() {
        return Err("error: event date provided multiple times".to_string());
    }
    *event = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "archdate {version}

Normalize archival event dates into a label and a start/end range.

Usage:
  archdate [OPTIONS] [--] <event date...>
  echo '<event date>' | archdate [OPTIONS]

Cells may be pipe-delimited (\"1920s|March 2001\"); each position is
reconciled separately and joined back with '|'.

Options:
  --start <date>             Event start date column.
  --end <date>               Event end date column.
  --unknown-date <label>     Label for unknown dates. Default: Unknown date
  --unknown-start <date>     Sentinel start date (yyyy-mm-dd). Default: 1800-01-01
  --unknown-end <date>       Sentinel end date (yyyy-mm-dd). Default: 2010-01-01
  --timid                    Do not guess a year found anywhere in the text.
  --us                       Read ambiguous free-text dates month-first.
  --explain                  Print which rule recognized each token.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, -vv                    Log rule matches (-v) or every rule tried (-vv)
                             to stderr. ARCHDATE_DEBUG_RULES=1 acts like -vv.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Output:
  <event date>\\t<start date>\\t<end date>

Exit codes:
  0  Success.
  1  A date could not be recognized.
  2  Invalid arguments or configuration.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
