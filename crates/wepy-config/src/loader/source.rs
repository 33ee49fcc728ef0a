//! Configuration sources
//!
//! A `ConfigSource` turns a path into the raw configuration value exported
//! by that file. The default `ModuleFileSource` only understands a static
//! object literal in JSON syntax behind `module.exports =` or
//! `export default`; evaluating arbitrary script is left to other sources.

use camino::Utf8Path;
use tracing::debug;
use wepy_core::{Value, WepyError, WepyResult};

/// Capability that loads the raw configuration exported by a file.
///
/// Implementations must fail with [`WepyError::ConfigNotFound`] when the
/// file does not exist.
pub trait ConfigSource {
    fn load(&self, path: &Utf8Path) -> WepyResult<Value>;
}

impl<F> ConfigSource for F
where
    F: Fn(&Utf8Path) -> WepyResult<Value>,
{
    fn load(&self, path: &Utf8Path) -> WepyResult<Value> {
        self(path)
    }
}

/// Reads a config module from disk and parses its exported literal
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleFileSource;

const ASSIGN_TARGETS: &[&str] = &["module.exports", "exports"];

impl ConfigSource for ModuleFileSource {
    fn load(&self, path: &Utf8Path) -> WepyResult<Value> {
        if !path.exists() {
            return Err(WepyError::ConfigNotFound {
                path: path.to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| WepyError::io(format!("Failed to read {}", path), e))?;

        debug!(%path, bytes = content.len(), "loaded configuration module");
        parse_module(path, &content)
    }
}

/// Extract and parse the exported literal of the config module at `path`
pub fn parse_module(path: &Utf8Path, content: &str) -> WepyResult<Value> {
    let body = exported_body(content).ok_or_else(|| {
        WepyError::config_load(
            path.as_str(),
            "expected `module.exports = {...}` or `export default {...}`",
        )
    })?;

    serde_json::from_str::<Value>(body).map_err(|e| {
        WepyError::config_load(path.as_str(), format!("invalid exported literal: {}", e))
    })
}

fn exported_body(content: &str) -> Option<&str> {
    let mut rest = content.trim();

    if let Some(body) = rest.strip_prefix("export default") {
        rest = body;
    } else {
        // `module.exports = ...`, possibly chained as `exports = module.exports = ...`
        let mut assigned = false;
        while let Some(after) = ASSIGN_TARGETS.iter().find_map(|t| rest.strip_prefix(t)) {
            rest = after.trim_start().strip_prefix('=')?;
            rest = rest.trim_start();
            assigned = true;
        }
        if !assigned {
            return None;
        }
    }

    let body = rest.trim();
    Some(body.strip_suffix(';').unwrap_or(body).trim_end())
}
