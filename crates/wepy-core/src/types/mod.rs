//! Core data types for configuration values.
//!
//! Configuration files and command-line arguments are both read into the
//! same owned `Value` tree before being checked against a schema.

pub mod value;

// Re-export all public types
pub use value::{FunctionRef, Instance, Map, Value};
