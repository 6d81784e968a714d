// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lonely edge finder.
//!
//! Reads graph6 lines from standard input, writes graph6 lines to standard
//! output, and writes diagnostics and the final summary to standard error.

use clap::Parser;
use lonely_edges::config::{Args, Config, Mode};
use lonely_edges::driver::{Counters, Driver};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Use lonely-edges --help for more detailed instructions.");
            return ExitCode::FAILURE;
        }
    };

    match config.mode {
        Mode::AllChildren => {
            warn!("children might be isomorphic; also generating children without lonely edges")
        }
        Mode::PreservingChildren => {
            warn!("-d is only intended for 3-connected cubic graphs; children may be isomorphic")
        }
        Mode::Filter { .. } => {}
    }

    let start = Instant::now();
    let mut driver = Driver::new(config, BufWriter::new(io::stdout().lock()), io::stderr());
    let stats = match driver.run(io::stdin().lock()) {
        Ok(stats) => stats,
        Err(err) => {
            error!(error = %err, "I/O failure");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if let Err(err) = stats.report(elapsed, config.mode != Mode::AllChildren, &mut io::stderr()) {
        error!(error = %err, "could not write summary");
        return ExitCode::FAILURE;
    }
    info!(
        checked = stats.get(Counters::Checked),
        passed = stats.get(Counters::Passed),
        skipped = stats.get(Counters::Skipped),
        elapsed_ms = elapsed.as_millis() as u64,
        "done"
    );

    ExitCode::SUCCESS
}
