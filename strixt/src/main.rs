//! # strixt
//!
//! A CLI tool that reports whitespace and formatting peeves in plain-text
//! source files.
//!
//! ## Overview
//!
//! strixt is built on top of strixtlib. It walks the given files and
//! directories (the current directory by default), skips symbolic links,
//! hidden directories and binary files, and prints every peeve as
//! `path:line:column: error: message`.
//!
//! ## Usage
//!
//! ```bash
//! # Check the current directory
//! strixt
//!
//! # Check specific paths, allowing leading tabs
//! strixt -t src include
//!
//! # Show skipped entries and clean files too
//! strixt -v .
//!
//! # Machine-readable output
//! strixt --output json .
//!
//! # Ignore vendored code
//! strixt --exclude "**/vendor/**"
//! ```
//!
//! ## Exit status
//!
//! 0 when nothing was reported, 1 when any peeve was found, 2 on a fatal
//! error such as a missing path.

mod render;

use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;
use strixtlib::options::{DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_SHOWN_PEEVES};
use strixtlib::{check_paths, CheckOptions, FilterConfig, ScanOptions, Verbosity};

use render::{render_json, render_text, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("strixt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Whitespace and formatting style checker for plain-text source files")
        .arg(
            Arg::new("paths")
                .help("Files and directories to check (defaults to current directory)")
                .action(ArgAction::Append)
                .num_args(1..)
                .default_value("."),
        )
        .arg(
            Arg::new("tabs")
                .short('t')
                .long("tabs")
                .action(ArgAction::SetTrue)
                .help("Allow tabs for indentation"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .help("Also report skipped entries and clean files"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Report peeves only"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Only check files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip files matching glob pattern"),
        )
        .arg(
            Arg::new("max-line-width")
                .long("max-line-width")
                .value_parser(value_parser!(usize))
                .help("Longest allowed line, with tabs expanded [default: 79]"),
        )
        .arg(
            Arg::new("max-blank-lines")
                .long("max-blank-lines")
                .value_parser(value_parser!(usize))
                .help("Longest allowed run of blank lines [default: 2]"),
        )
        .arg(
            Arg::new("max-file-size")
                .long("max-file-size")
                .value_parser(value_parser!(usize))
                .help("Bytes scanned per file; the rest is ignored [default: 65536]"),
        )
        .arg(
            Arg::new("max-shown")
                .long("max-shown")
                .value_parser(value_parser!(usize))
                .help("Peeves shown per file in text output [default: 10]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

fn extract_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else {
        Verbosity::Info
    }
}

fn get_usize(matches: &ArgMatches, id: &str, fallback: usize) -> usize {
    matches.get_one::<usize>(id).copied().unwrap_or(fallback)
}

/// Build check options from matches
fn build_options(matches: &ArgMatches) -> Result<CheckOptions, anyhow::Error> {
    let defaults = ScanOptions::default();
    let scan = ScanOptions::new()
        .tabs_allowed(matches.get_flag("tabs"))
        .max_line_width(get_usize(matches, "max-line-width", defaults.max_line_width))
        .max_blank_lines(get_usize(
            matches,
            "max-blank-lines",
            defaults.max_blank_lines,
        ));

    Ok(CheckOptions::new()
        .scan(scan)
        .max_file_size(get_usize(matches, "max-file-size", DEFAULT_MAX_FILE_SIZE))
        .max_shown_peeves(get_usize(matches, "max-shown", DEFAULT_MAX_SHOWN_PEEVES))
        .verbosity(extract_verbosity(matches))
        .filter(build_filter(matches)?))
}

/// Run a check; returns whether any peeve was found.
fn run(matches: &ArgMatches) -> Result<bool, anyhow::Error> {
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|v| v.collect())
        .unwrap_or_default();
    let options = build_options(matches)?;
    let output_mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_name(s))
        .unwrap_or(OutputMode::Text);

    log::info!(
        "checking {} path(s) tabs_allowed={} max_file_size={}",
        paths.len(),
        options.scan.tabs_allowed,
        options.max_file_size
    );

    let result = check_paths(&paths, &options)?;

    log::info!(
        "checked {} file(s), {} peeve(s)",
        result.files_checked(),
        result.peeve_count()
    );

    match output_mode {
        OutputMode::Json => println!("{}", render_json(&result, options.verbosity)?),
        OutputMode::Text => print!(
            "{}",
            render_text(&result, options.verbosity, options.max_shown_peeves)
        ),
    }

    Ok(result.has_peeves())
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
