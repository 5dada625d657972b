//! Command-line surface and shared support types
//!
//! This module contains everything outside the index itself:
//! - Command-line parsing and the demonstration workload
//! - Default constants for the demo runs
//! - Error types shared across the crate

/// Command-line interface and demonstration runner
pub mod cli;
/// Demo constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;

pub use error::{GridError, Result};
