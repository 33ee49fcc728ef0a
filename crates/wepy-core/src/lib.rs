//! # wepy-core
//!
//! Core types shared by the wepy configuration crates.
//!
//! This crate provides:
//! - `Value`, the owned tree that configuration sources are read into
//! - `WepyError` enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: the `Value` tree and its helpers
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{WepyError, WepyResult};
pub use types::{FunctionRef, Instance, Map, Value};
