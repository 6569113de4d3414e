//! Huepick library
//!
//! Core functionality for the huepick terminal color lookup: the embedded
//! color catalog, the fuzzy search and merge pipeline, clipboard copy,
//! configuration, and the TUI and CLI surfaces.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod models;
pub mod search;
#[cfg(feature = "ratatui")]
pub mod tui;
