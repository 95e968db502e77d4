// ==============================================================================
// CLI for simfold
// ==============================================================================
//
//   simfold [DIRECTORY] [--threshold F] [--dry-run] [--json] [-v...]
//
// Organizes DIRECTORY (default: the current directory) in place and prints a
// confirmation line. `--dry-run` prints the planned moves instead.

use std::io::{self, IsTerminal as _, Write as _};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::EnvFilter;

use simfold::{DEFAULT_THRESHOLD, OrganizeReport, Organizer};

const SUCCESS_MESSAGE: &str = "Files organized successfully!";

// ==============================================================================
// CLI Argument Definitions
// ==============================================================================

#[derive(Parser)]
#[command(
    name = "simfold",
    version,
    about = "Group files with similar names into subfolders"
)]
struct Cli {
    /// Directory to organize (defaults to the current directory).
    directory: Option<PathBuf>,

    /// Minimum base-name similarity (0.0 to 1.0) for two entries to be grouped.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Print the planned moves without touching the directory.
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print the groups as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log more detail to stderr. May be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ==============================================================================
// Entry Point
// ==============================================================================

fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let directory = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()
            .into_diagnostic()
            .wrap_err("determine current directory")?,
    };

    let mut organizer = Organizer::new();
    organizer.threshold(cli.threshold);

    let report = if cli.dry_run {
        organizer.plan(&directory)
    } else {
        organizer.organize(&directory)
    }
    .map_err(miette::Report::new)
    .wrap_err_with(|| format!("organize {}", directory.display()))?;

    tracing::info!(
        folders = report.folders_created(),
        moved = report.entries_moved(),
        "done"
    );

    write_report(&report, cli.dry_run, cli.json)
}

/// Install a stderr `tracing` subscriber whose level follows the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

// ==============================================================================
// Output
// ==============================================================================

fn write_report(report: &OrganizeReport, dry_run: bool, json: bool) -> miette::Result<()> {
    let mut out = io::stdout().lock();
    let result = if json {
        let text = serde_json::to_string_pretty(&report.to_json()).into_diagnostic()?;
        writeln!(out, "{text}")
    } else if dry_run {
        write_plan(&mut out, report)
    } else {
        writeln!(out, "{SUCCESS_MESSAGE}")
    };

    match result {
        // Exit quietly when piped into something like `head`.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.into_diagnostic().wrap_err("write to stdout"),
    }
}

/// One line per planned move, grouped by destination folder.
fn write_plan(out: &mut impl io::Write, report: &OrganizeReport) -> io::Result<()> {
    if report.is_empty() {
        return writeln!(out, "nothing to organize");
    }
    for group in &report.groups {
        for name in group.moved() {
            writeln!(out, "{name:?} -> \"{}/\"", group.folder)?;
        }
    }
    Ok(())
}
