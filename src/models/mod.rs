//! Data models shared across the TUI and CLI.
//!
//! Models are designed to be independent of UI and business logic.

pub mod rgb;

pub use rgb::RgbColor;
