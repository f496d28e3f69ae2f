//! Command line summary of a SWIFT run log
//!
//! Pulls the one-off run parameters, the step table totals, and the time spent
//! per scheduler task category out of captured console output.
//!
//! # Usage
//!
//! ```text
//! Usage: swsummary <log> [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples and
//! any important behaviour.
//!
//! ### Text output
//!
//! By default a short table is printed to the terminal.
//!
//! ```bash
//! # Summarise a run with default settings
//! swsummary /path/to/output.log
//!
//! # Only categories with time spent, averaged per thread, in seconds
//! swsummary /path/to/output.log --compact --per-thread --unit s
//! ```
//!
//! Fields that the log never declares are shown as `none` rather than failing
//! the whole summary.
//!
//! ```text
//! Run summary for output.log
//! --------------------------------------------------
//!   Particles                     1.04858e+06
//!   MPI ranks                     4
//!   Threads per rank              none
//! ...
//! ```
//!
//! ### JSON output
//!
//! The `--json` flag writes the same summary as JSON to stdout instead, for
//! use in scripts and plotting tools.
//!
//! ### Older logs
//!
//! Logs from code versions without the status column in the step table need
//! the `--legacy` flag.

// standard library
use std::path::Path;

// swtools modules
use swtools_stdout::{ColumnMap, Stdout, DEFAULT_HEADER_LINES};
use swtools_utils::{f, TimeUnit};

// external crates
use anyhow::{Context, Result};
use clap::Parser;
use log::*;

mod summary;
use summary::{Options, RunSummary};

/// The binary and every toolkit crate it depends on
const LOG_MODULES: [&str; 3] = [module_path!(), "swtools_stdout", "swtools_utils"];

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make Info the default)
    logging_init(cli.verbose + 2, cli.quiet);

    let path = Path::new(&cli.log);
    let stdout = Stdout::from_file(path).with_context(|| f!("reading {}", cli.log))?;
    debug!("{} lines read", stdout.len());

    let options = Options {
        header_lines: cli.header,
        columns: match cli.legacy {
            true => ColumnMap::V1,
            false => ColumnMap::V2,
        },
        compact: cli.compact,
        per_thread: cli.per_thread,
        reference_step: cli.reference,
        unit: cli.unit,
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| cli.log.clone());

    let summary = RunSummary::collect(&name, &stdout, &options)
        .with_context(|| f!("summarising {}", cli.log))?;
    info!("Summary complete");

    match cli.json {
        true => println!("{}", serde_json::to_string_pretty(&summary)?),
        false => println!("{}", summary.table()),
    }

    Ok(())
}

/// Summarise a SWIFT run from its console output
///
/// Reports the particle, rank, thread and top-level cell counts, the time
/// taken to read initial conditions, totals over the step table, and the
/// total time per task category from every scheduler report.
///
/// Missing one-off fields are reported as 'none'. A broken step table or
/// an unreadable scheduler report fails the summary.
///
/// Examples
/// --------
///
///  Typical use:
///     $ swsummary output.log
///
///  Scheduler times averaged over threads, zeros dropped:
///     $ swsummary output.log --per-thread --compact
///
///  Times in hours, JSON for other tools:
///     $ swsummary output.log --unit hr --json > summary.json
///
///  Older logs without the status column:
///     $ swsummary old_output.log --legacy
///
#[allow(rustdoc::invalid_rust_codeblocks)]
#[doc(hidden)]
#[derive(Parser, Debug)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: swsummary output.log --compact\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("swsummary <log> [options]")
)]
struct Cli {
    // * Positional
    /// Path to captured console output
    #[arg(name = "log")]
    log: String,

    // * Optional
    /// Number of banner lines before the step table
    ///
    /// Indented lines in the banner would otherwise be mistaken for step
    /// table rows.
    #[arg(help_heading("Log options"))]
    #[arg(long, value_name = "lines")]
    #[arg(default_value_t = DEFAULT_HEADER_LINES)]
    header: usize,

    /// Step table has no status column
    ///
    /// For logs written by code versions before the status flag was added
    /// to the step table.
    #[arg(help_heading("Log options"))]
    #[arg(long)]
    legacy: bool,

    /// Step that clean steps are compared against
    ///
    /// Clean steps have no status flag set and the same number of particle
    /// updates as this step.
    #[arg(help_heading("Log options"))]
    #[arg(short, long, value_name = "step")]
    #[arg(default_value_t = 1)]
    reference: u32,

    /// Drop scheduler times that round to zero
    #[arg(help_heading("Scheduler options"))]
    #[arg(short, long)]
    compact: bool,

    /// Average scheduler times over the threads of a rank
    ///
    /// Requires the thread count to be declared in the log.
    #[arg(help_heading("Scheduler options"))]
    #[arg(short, long)]
    per_thread: bool,

    /// Unit for every reported time (ms, s, hr)
    #[arg(help_heading("Output options"))]
    #[arg(short, long, value_name = "unit")]
    #[arg(default_value_t = TimeUnit::Millisecond)]
    unit: TimeUnit,

    /// Write the summary as JSON
    #[arg(help_heading("Output options"))]
    #[arg(short, long)]
    json: bool,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and Warnings are always logged unless in quiet
    /// (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

#[doc(hidden)]
fn logging_init(verbosity: u8, quiet: bool) {
    let result = stderrlog::new()
        .modules(LOG_MODULES)
        .quiet(quiet)
        .verbosity(verbosity as usize)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init();

    if let Err(e) = result {
        eprintln!("Logging unavailable: {e}");
    }
}

#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "SWIFT run summary");
    s += &f!("{:-<1$}", "", 70);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolkit_crates_are_logged() {
        // every swtools dependency in Cargo.toml needs its records shown
        let manifest = include_str!("../Cargo.toml");
        let dependencies = manifest
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .filter(|name| name.starts_with("swtools-"))
            .map(|name| name.replace('-', "_"));

        for dependency in dependencies {
            assert!(LOG_MODULES.contains(&dependency.as_str()), "{dependency}");
        }
        assert!(LOG_MODULES.contains(&"swsummary"));
    }
}
