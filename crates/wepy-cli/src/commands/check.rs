//! Validate the configuration without printing it

use wepy_config::CONFIG_FILE_NAME;
use wepy_core::{Value, WepyResult};

use super::{config, CommandContext, ResolveArgs};

/// Execute the check command
pub fn execute(args: &ResolveArgs, ctx: &CommandContext) -> WepyResult<()> {
    let resolved = config::resolve(args, ctx)?;

    ctx.output.success(&format!("{} is valid", CONFIG_FILE_NAME));

    for key in ["target", "src", "output"] {
        if let Some(value) = resolved.get(key) {
            ctx.output.info(&format!("  {}: {}", key, describe(value)));
        }
    }

    Ok(())
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
