//! Commands module - CLI command implementations.
//!
//! Each command receives the loaded settings and writes to the given output.

pub mod check;
pub mod get;
pub mod show;
