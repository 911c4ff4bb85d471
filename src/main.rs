// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: enumerate full-period sequences for the compiled-in
//! register width and print them.

use clap::Parser;
use ror_search::enumerate::Printer;
use ror_search::graph::{BITS, NODE_COUNT};
use ror_search::sequence::Format;
use ror_search::{Enumerator, Result, SearchConfig, SearchContext};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

/// Enumerate full-period rotate-right bit sequences
#[derive(Parser)]
#[command(name = "ror-search")]
#[command(version)]
#[command(about = "Enumerate full-period rotate-right bit sequences")]
struct Cli {
    /// Stop after this many sequences
    #[arg(long, default_value_t = SearchConfig::default().capacity)]
    capacity: usize,

    /// Output format for each sequence
    #[arg(long, value_enum, default_value_t = Format::Hex)]
    format: Format,

    /// Check each sequence for full period before printing it
    #[arg(long)]
    verify: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = SearchConfig::new()
        .with_capacity(cli.capacity)
        .with_format(cli.format)
        .with_verify(cli.verify);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "run failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SearchConfig) -> Result<()> {
    config.validate()?;
    let start = Instant::now();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(
        out,
        "Generating {}-bit period ({}-bit ROR value):\n",
        BITS, NODE_COUNT
    )?;

    let printer = Printer::new(&mut out, BITS, config.format).with_verify(config.verify);
    let report = Enumerator::new(SearchContext::new(), config.capacity).run(printer)?;

    writeln!(out, "Found: {}", report.found)?;
    writeln!(out, "Time: {} ms.", start.elapsed().as_millis())?;
    out.flush()?;
    Ok(())
}
