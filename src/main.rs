use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kanji_dupcheck::prelude::*;

/// Exit status when `--fail-on-duplicates` finds duplicates
const EXIT_DUPLICATES: i32 = 2;

#[derive(Parser)]
#[command(name = "kanji_dupcheck")]
#[command(about = "Report duplicate answers in kanji quiz question files", long_about = None)]
struct Cli {
    /// Question file to check (default: every matching file in --dir)
    path: Option<PathBuf>,

    /// Directory scanned when no file is given
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    dir: PathBuf,

    /// File name pattern used when scanning --dir
    #[arg(long, default_value = DEFAULT_SOURCE_PATTERN)]
    pattern: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Exit with status 1 if any file could not be checked
    #[arg(long)]
    strict: bool,

    /// Exit with status 2 if any duplicate answers were found
    #[arg(long)]
    fail_on_duplicates: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scanning = cli.path.is_none();
    let sources = match resolve_sources(cli.path.as_deref(), &cli.dir, &cli.pattern) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    if scanning && cli.format == ReportFormat::Text {
        writeln!(out, "Found {} kanji test files", sources.len())
            .context("Failed to write report")?;
    }

    let outcome = check_sources(&sources, cli.format, scanning, &mut out, &mut err)
        .context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    tracing::info!(
        checked = outcome.checked,
        failed = outcome.failed,
        with_duplicates = outcome.with_duplicates,
        "run complete"
    );

    if cli.strict && outcome.failed > 0 {
        std::process::exit(1);
    }
    if cli.fail_on_duplicates && outcome.with_duplicates > 0 {
        std::process::exit(EXIT_DUPLICATES);
    }

    Ok(())
}
