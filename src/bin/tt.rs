// src/bin/tt.rs

//! Print a regular expression matching timestamps between two instants.
//!
//! ```text
//! $ tt "2021-07-04 12:30:00" "2021-07-04 12:30:05"
//! 2021-07-04 12:30:0[0-5]
//! ```

use std::process::ExitCode;

use ::anyhow::Context;
use ::clap::Parser;
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};
use ::tt_regex::{Simplify, Timestamp, TimestampRange};

/// Source revision, injected at build time through `TT_REVISION`.
const REVISION: &str = match option_env!("TT_REVISION") {
    Some(revision) => revision,
    None => "unknown",
};

const VERSION: &str = concatcp!("v", env!("CARGO_PKG_VERSION"), " (rev:", REVISION, ")");

const CLI_HELP_AFTER: &str = "\
Timestamps use the layout \"YYYY-MM-DD HH:MM:SS\".
START must be strictly older than END.
Fields below the first field that differs are widened to cover a rollover,
so the pattern may match some timestamps outside the interval.";

#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "tt",
    version = VERSION,
    after_help = CLI_HELP_AFTER,
)]
struct CliArgs {
    /// Oldest timestamp of the interval, e.g. "2021-07-04 12:30:00".
    start: String,

    /// Newest timestamp of the interval, e.g. "2021-07-04 12:30:05".
    end: String,

    /// Keep "[0-9]" classes instead of shortening them to "\d".
    #[clap(long)]
    no_simplify: bool,
}

impl CliArgs {
    const fn simplify(&self) -> Simplify {
        if self.no_simplify {
            Simplify::Keep
        } else {
            Simplify::Shorthand
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<String> {
    defn!("({:?})", args);

    let start: Timestamp = args
        .start
        .parse()
        .with_context(|| format!("bad START {:?}", args.start))?;
    let end: Timestamp = args
        .end
        .parse()
        .with_context(|| format!("bad END {:?}", args.end))?;
    let range = TimestampRange::new(start, end)?;
    let pattern = range.pattern_with(args.simplify())?;

    defx!("return {:?}", pattern);
    Ok(pattern)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(pattern) => {
            println!("{pattern}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
