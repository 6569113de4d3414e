//! CLI command handlers for huepick.
//!
//! This module provides headless, scriptable access to the color catalog
//! and search pipeline for automation and testing.

pub mod common;
pub mod copy;
pub mod list;
pub mod search;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use copy::CopyArgs;
pub use list::ListArgs;
pub use search::SearchArgs;
