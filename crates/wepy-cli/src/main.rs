//! # wepy-cli
//!
//! Command line front end for the wepy configuration resolver.
//!
//! Parses arguments, sets up logging, and dispatches to the command
//! handlers. Errors are rendered with suggestions on stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use wepy_core::WepyResult;

mod commands;
mod output;

use commands::{CommandContext, ResolveArgs};
use output::errors::ErrorFormatter;

/// Resolve and inspect wepy project configuration
#[derive(Parser)]
#[command(name = "wepy", version, about = "Resolve wepy project configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory containing wepy.config.js
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration as JSON
    Config(ResolveArgs),
    /// Validate the configuration and command-line options
    Check(ResolveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting wepy v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        },
    }
}

fn run_cli(cli: Cli) -> WepyResult<()> {
    let ctx = CommandContext::new(cli.cwd)?;
    commands::dispatch_command(cli.command, &ctx)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("WEPY_LOG").unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "wepy_cli={level},wepy_config={level},wepy_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("wepy encountered an unexpected error: {}", panic_info);
        eprintln!("wepy crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}
