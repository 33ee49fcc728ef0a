//! Option resolution for the wepy build tool
//!
//! This crate merges command-line options with the project's
//! `wepy.config.js` against a declarative schema, applying defaults and
//! type validation along the way.
//!
//! - `path`: dotted key-path get/set on nested mappings
//! - `check`: type constraints and the matching rules
//! - `schema`: field specs and the built-in option schema
//! - `parse`: the schema walk producing a `ResolvedConfig`
//! - `loader`: configuration sources and the command-line overlay

pub mod check;
pub mod loader;
pub mod parse;
pub mod path;
pub mod schema;

// Re-export main types
pub use check::{satisfies, TypeConstraint, TypeTag};
pub use loader::{convert, ConfigLoader, ConfigSource, ModuleFileSource, CONFIG_FILE_NAME};
pub use parse::{parse, parse_options, InputOrigin, ResolvedConfig};
pub use path::{get_value, set_value};
pub use schema::{default_schema, FieldSpec, Schema};

pub use wepy_core::{Map, Value, WepyError, WepyResult};
