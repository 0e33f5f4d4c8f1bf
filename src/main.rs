use std::{io, process::ExitCode};

use clap::Parser;
use mini_ll1::cli::{self, Args, EXIT_ANALYSIS_FAILED};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs share stderr with diagnostics; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let code = cli::run(&args, &mut io::stdout(), &mut io::stderr())
        .unwrap_or_else(|error| {
            tracing::error!("failed to write report: {}", error);
            EXIT_ANALYSIS_FAILED
        });

    ExitCode::from(code)
}
