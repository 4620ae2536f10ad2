//! # aster
//!
//! A CLI tool for counting code, comment and blank lines in a set of files.
//!
//! ## Overview
//!
//! aster is built on top of asterlib. Every line of every selected file is
//! classified as code, comment (`//`, `#`, `/* ... */`) or blank, and the
//! counts are reported per file or merged into a single total.
//!
//! ## Usage
//!
//! ```bash
//! # Count two files, one line per file
//! aster main.go util.go
//!
//! # Walk a tree, only Go and Rust files, skipping vendor/
//! aster -r -e go,rs -d vendor .
//!
//! # One combined total
//! aster -r -a src
//!
//! # JSON output
//! aster -r -a src --output json
//! ```
//!
//! Diagnostics are controlled with `ASTER_LOG` (e.g. `ASTER_LOG=debug`).

mod render;

use std::process::ExitCode;

use asterlib::{count_paths, Aggregation, CountOptions, FilterConfig, Report};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;


/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("aster")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count the number of blank lines, comments or code lines in a set of files")
        .override_usage("aster [OPTIONS] <PATH>...")
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(1..)
                .help("Files to analyze (directories too, with --recursive)"),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .value_name("LIST")
                .action(ArgAction::Append)
                .help("Only count files with these comma-separated extensions"),
        )
        .arg(
            Arg::new("exclude-dirs")
                .short('d')
                .long("exclude-dirs")
                .value_name("LIST")
                .action(ArgAction::Append)
                .help("Skip these comma-separated directories, used with --recursive"),
        )
        .arg(
            Arg::new("recursive")
                .short('r')
                .long("recursive")
                .action(ArgAction::SetTrue)
                .help("Recursively search directories (symbolic links are not followed)"),
        )
        .arg(
            Arg::new("aggregate")
                .short('a')
                .long("aggregate")
                .action(ArgAction::SetTrue)
                .help("Aggregate all the results instead of one line per file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("MODE")
                .value_parser(["auto", "term", "text", "term-debug", "json"])
                .default_value("auto")
                .help("Output mode"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> FilterConfig {
    let mut filter = FilterConfig::new().recursive(matches.get_flag("recursive"));

    if let Some(lists) = matches.get_many::<String>("extension") {
        for list in lists {
            filter = filter.extensions_from_list(list);
        }
    }

    if let Some(lists) = matches.get_many::<String>("exclude-dirs") {
        for list in lists {
            filter = filter.exclude_dirs_from_list(list);
        }
    }

    filter
}

/// Build count options from matches
fn build_options(matches: &ArgMatches) -> CountOptions {
    let aggregation = if matches.get_flag("aggregate") {
        Aggregation::Total
    } else {
        Aggregation::ByFile
    };

    CountOptions::new()
        .filter(build_filter(matches))
        .aggregation(aggregation)
}

/// Extract positional paths from matches
fn extract_paths(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("paths")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Handler for the count run
fn count_handler(matches: &ArgMatches, paths: &[String]) -> anyhow::Result<String> {
    let output_mode = matches
        .get_one::<String>("output")
        .map(|s| render::parse_output_mode(s))
        .unwrap_or(render::OutputMode::Auto);

    let options = build_options(matches);
    tracing::debug!(?options, "counting {} paths", paths.len());

    let result = count_paths(paths, &options);

    for skipped in &result.skipped {
        eprintln!("{}", render::render_warning(skipped));
    }

    let report = Report::from_result(&result);
    render::render(&report, output_mode)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ASTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut cmd = build_command();
    let matches = cmd.clone().get_matches();

    let paths = extract_paths(&matches);
    if paths.is_empty() {
        eprint!("{}", cmd.render_help());
        return ExitCode::FAILURE;
    }

    match count_handler(&matches, &paths) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
