//! Schema-driven merge of one option source
//!
//! `parse` walks the schema in declaration order and, per key, either copies
//! the supplied value after type checking it or fills in the declared
//! default. Command-line input is never default-filled so that it can later
//! be laid over a fully defaulted file configuration.

use serde::Serialize;
use tracing::{debug, trace};
use wepy_core::{Map, Value, WepyError, WepyResult};

use crate::path::{get_value, set_value};
use crate::schema::{default_schema, Schema};

/// Where a set of options came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    /// The project configuration file; missing keys receive defaults
    ConfigFile,
    /// Command-line arguments; missing keys stay missing
    CommandLine,
}

/// Nested option mapping produced by a merge.
///
/// Contains exactly the keys that received a value, explicit or default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig(Map);

impl ResolvedConfig {
    /// Value at a dotted key path
    pub fn get(&self, path: &str) -> Option<&Value> {
        get_value(&self.0, path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn as_map(&self) -> &Map {
        &self.0
    }

    pub fn into_map(self) -> Map {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow top-level overlay: every top-level key of `top` replaces the
    /// same key here wholesale. Replaced keys keep their position; keys new
    /// to `self` are appended.
    pub fn overlay(mut self, top: ResolvedConfig) -> ResolvedConfig {
        for (key, value) in top.0 {
            self.0.insert(key, value);
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        Value::Object(self.0.clone()).to_json()
    }
}

impl From<ResolvedConfig> for Value {
    fn from(config: ResolvedConfig) -> Self {
        Value::Object(config.0)
    }
}

/// Merge `input` against `schema`.
///
/// Fails with [`WepyError::InvalidOptionType`] on the first supplied value
/// that does not satisfy its field's type; nothing is returned in that case.
pub fn parse(input: &Map, schema: &Schema, origin: InputOrigin) -> WepyResult<ResolvedConfig> {
    let mut resolved = Map::new();
    let mut defaulted = 0usize;

    for (key, spec) in schema.iter() {
        match get_value(input, key) {
            None => {
                if origin == InputOrigin::CommandLine {
                    continue;
                }
                if let Some(default) = spec.default_value() {
                    trace!(key, "applying default");
                    set_value(&mut resolved, key, default.clone());
                    defaulted += 1;
                }
            },
            Some(value) => {
                if let Some(ty) = spec.ty() {
                    if !ty.satisfies(value) {
                        return Err(WepyError::InvalidOptionType {
                            key: key.to_string(),
                            expected: ty.to_string(),
                        });
                    }
                }
                set_value(&mut resolved, key, value.clone());
            },
        }
    }

    debug!(
        ?origin,
        keys = resolved.len(),
        defaulted,
        "resolved options against schema"
    );

    Ok(ResolvedConfig(resolved))
}

/// Merge a configuration-file object against the built-in schema.
pub fn parse_options(input: &Map) -> WepyResult<ResolvedConfig> {
    parse(input, default_schema(), InputOrigin::ConfigFile)
}
