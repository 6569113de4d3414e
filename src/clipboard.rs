//! Clipboard copy for search results.
//!
//! The copy text is selected purely from the record's stored fields; the
//! only side effect lives in [`copy_to_clipboard`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::search::MergedColor;

/// Which representation of a color gets copied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    /// Hex string as stored, including the leading '#'
    #[default]
    Hex,
    /// rgb(r, g, b) string verbatim
    Rgb,
    /// Lowercase identifier, not a display-cased variant
    Name,
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Rgb => write!(f, "rgb"),
            Self::Name => write!(f, "name"),
        }
    }
}

/// Returns the exact text to place on the clipboard for a result.
#[must_use]
pub fn copy_text(color: &MergedColor, format: CopyFormat) -> String {
    match format {
        CopyFormat::Hex => color.hex.clone(),
        CopyFormat::Rgb => color.rgb.clone(),
        CopyFormat::Name => color.name.clone(),
    }
}

/// Writes text to the system clipboard.
///
/// Failures propagate to the caller; there is no retry or fallback.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .context("Failed to copy to clipboard")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::collections::BTreeSet;

    fn red() -> MergedColor {
        MergedColor {
            name: "red".to_string(),
            hex: "#FF0000".to_string(),
            rgb: "rgb(255, 0, 0)".to_string(),
            categories: BTreeSet::from([Category::Basic]),
        }
    }

    #[test]
    fn test_copy_text_hex() {
        assert_eq!(copy_text(&red(), CopyFormat::Hex), "#FF0000");
    }

    #[test]
    fn test_copy_text_rgb() {
        assert_eq!(copy_text(&red(), CopyFormat::Rgb), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_copy_text_name_is_identifier() {
        // The identifier, not a display-cased variant like "Red"
        assert_eq!(copy_text(&red(), CopyFormat::Name), "red");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(CopyFormat::Hex.to_string(), "hex");
        assert_eq!(CopyFormat::Rgb.to_string(), "rgb");
        assert_eq!(CopyFormat::Name.to_string(), "name");
    }
}
