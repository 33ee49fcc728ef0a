//! Command implementations and dispatch logic.
//!
//! Each command takes the parsed option flags and a `CommandContext`.

use camino::Utf8PathBuf;
use std::path::PathBuf;
use tracing::info;
use wepy_core::{WepyError, WepyResult};

pub mod args;
pub mod check;
pub mod config;


pub use args::ResolveArgs;

use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a command context rooted at `cwd`, or the process directory
    pub fn new(cwd: Option<PathBuf>) -> WepyResult<Self> {
        let cwd = match cwd {
            Some(dir) => dir,
            None => std::env::current_dir()
                .map_err(|e| WepyError::io("Failed to get current directory", e))?,
        };

        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
            WepyError::io("Project directory is not valid UTF-8", e.into_io_error())
        })?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
        })
    }
}

/// Dispatch a command to its handler
pub fn dispatch_command(command: Commands, ctx: &CommandContext) -> WepyResult<()> {
    match command {
        Commands::Config(args) => {
            info!("Resolving configuration in {}", ctx.cwd);
            config::execute(&args, ctx)
        },
        Commands::Check(args) => {
            info!("Checking configuration in {}", ctx.cwd);
            check::execute(&args, ctx)
        },
    }
}
