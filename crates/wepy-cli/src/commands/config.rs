//! Print the effective configuration

use wepy_config::{ConfigLoader, ResolvedConfig};
use wepy_core::WepyResult;

use super::{CommandContext, ResolveArgs};

/// Execute the config command
pub fn execute(args: &ResolveArgs, ctx: &CommandContext) -> WepyResult<()> {
    let resolved = resolve(args, ctx)?;
    ctx.output.data(&render(&resolved));
    Ok(())
}

/// Resolve the project configuration with `args` laid over it
pub fn resolve(args: &ResolveArgs, ctx: &CommandContext) -> WepyResult<ResolvedConfig> {
    ConfigLoader::new(ctx.cwd.clone()).convert(&args.to_cli_args())
}

/// Pretty JSON rendering of a resolved configuration
pub fn render(resolved: &ResolvedConfig) -> String {
    format!("{:#}", resolved.to_json())
}
