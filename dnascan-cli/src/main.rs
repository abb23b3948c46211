use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands, LoadOptions};
use dnascan_core::BioError;

/// Filter directive from `DNASCAN_LOG` (default `warn`), raised to at least
/// `info` by `-v` and `debug` by `-vv`. `-v` never lowers a configured level.
fn log_directive(verbose: u8, configured: Option<String>) -> String {
    let floor = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    match configured {
        Some(value) => match value.parse::<LevelFilter>() {
            Ok(level) => level.max(floor).to_string(),
            Err(_) if verbose == 0 => value,
            // per-target directives: keep them, add the floor as default
            Err(_) => format!("{},{}", floor, value),
        },
        None => floor.to_string(),
    }
}

fn init_logging(verbose: u8) {
    let directive = log_directive(verbose, std::env::var("DNASCAN_LOG").ok());

    // RUST_LOG overrides everything
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BioError>() {
        Some(e) if e.is_invalid_argument() => 2,
        Some(e) if e.is_not_found() => 3,
        Some(BioError::FastaIo(_)) => 4,
        Some(
            BioError::FastaFormat { .. }
            | BioError::InvalidSequence { .. }
            | BioError::InvalidChar { .. },
        ) => 5,
        _ => 1,
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let num_threads = if cli.threads == 0 {
        num_cpus::get()
    } else {
        cli.threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;
    tracing::info!(threads = num_threads, "thread pool ready");

    let load = LoadOptions {
        min_len: cli.min_len,
    };

    match cli.command {
        Commands::Records(args) => crate::cli::commands::records::run(args, &load),
        Commands::Lengths(args) => crate::cli::commands::lengths::run(args, &load),
        Commands::Orf(args) => crate::cli::commands::orf::run(args, &load),
        Commands::Repeats(args) => crate::cli::commands::repeats::run(args, &load),
    }
}
