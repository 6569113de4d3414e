//! Named web color catalog.
//!
//! This module provides access to the embedded color database with
//! category filtering for the picker and the CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RgbColor;

/// Category a color record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The 16 basic HTML color keywords
    Basic,
    /// The extended (X11/CSS3) color keywords
    Extended,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::Extended => write!(f, "Extended"),
        }
    }
}

/// Which slice of the catalog to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorFilter {
    /// Basic and extended colors
    #[default]
    All,
    /// Basic colors only
    Basic,
    /// Extended colors only
    Extended,
}

impl ColorFilter {
    /// Cycles to the next filter value (All -> Basic -> Extended -> All).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Basic,
            Self::Basic => Self::Extended,
            Self::Extended => Self::All,
        }
    }

    /// Human-readable label for the filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Basic => "Basic",
            Self::Extended => "Extended",
        }
    }
}

/// Individual color record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Lowercase color identifier (e.g., "rebeccapurple")
    pub name: String,
    /// Canonical uppercase hex string with leading '#' (e.g., "#663399")
    pub hex: String,
    /// Canonical rgb string (e.g., "rgb(102, 51, 153)")
    pub rgb: String,
    /// Catalog category this record was defined in
    pub category: Category,
}

/// Database schema from colors.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ColorDatabase {
    version: String,
    colors: Vec<ColorRecord>,
}

/// Named color database with category-scoped access.
///
/// The database is embedded in the binary at compile time and loaded
/// once at startup. Records are kept in catalog order, which is the
/// order results fall back to when no search is active.
#[derive(Debug, Clone)]
pub struct ColorDb {
    colors: Vec<ColorRecord>,
}

impl ColorDb {
    /// Loads the color database from the embedded JSON file.
    ///
    /// Records are canonicalized on load: the hex string is normalized to
    /// uppercase `#RRGGBB` and the rgb string to `rgb(r, g, b)`, whatever
    /// formatting the data file used. A record with an unparseable hex
    /// value is a data error and fails the load.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("colors.json");
        let mut db: ColorDatabase =
            serde_json::from_str(json_data).context("Failed to parse embedded colors.json")?;

        for record in &mut db.colors {
            let rgb = RgbColor::from_hex(&record.hex)
                .with_context(|| format!("Invalid hex value for color '{}'", record.name))?;
            record.hex = rgb.to_hex();
            record.rgb = rgb.to_rgb_string();
        }

        Ok(Self { colors: db.colors })
    }

    /// Returns the records covered by a category filter, in catalog order.
    ///
    /// Basic records precede extended records in the `All` scope, matching
    /// the order they are defined in the catalog. Each record keeps its own
    /// category tag so overlapping names can be grouped later.
    #[must_use]
    pub fn select(&self, filter: ColorFilter) -> Vec<&ColorRecord> {
        match filter {
            ColorFilter::All => self.colors.iter().collect(),
            ColorFilter::Basic => self
                .colors
                .iter()
                .filter(|c| c.category == Category::Basic)
                .collect(),
            ColorFilter::Extended => self
                .colors
                .iter()
                .filter(|c| c.category == Category::Extended)
                .collect(),
        }
    }

    /// Finds all records with the given name (case-insensitive).
    ///
    /// A name can appear once per category, so this returns up to two records.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<&ColorRecord> {
        let name_lower = name.to_lowercase();
        self.colors
            .iter()
            .filter(|c| c.name == name_lower)
            .collect()
    }

    /// Gets the total number of color records.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_db() -> ColorDb {
        ColorDb::load().expect("Failed to load color database")
    }

    #[test]
    fn test_load_database() {
        let db = get_test_db();
        assert!(db.color_count() > 100);
    }

    #[test]
    fn test_select_all_is_whole_catalog() {
        let db = get_test_db();
        assert_eq!(db.select(ColorFilter::All).len(), db.color_count());
    }

    #[test]
    fn test_select_basic() {
        let db = get_test_db();
        let basic = db.select(ColorFilter::Basic);
        assert_eq!(basic.len(), 16);
        assert!(basic.iter().all(|c| c.category == Category::Basic));
        assert!(basic.iter().any(|c| c.name == "red"));
        assert!(basic.iter().any(|c| c.name == "navy"));
    }

    #[test]
    fn test_select_extended() {
        let db = get_test_db();
        let extended = db.select(ColorFilter::Extended);
        assert!(extended.len() > 100);
        assert!(extended.iter().all(|c| c.category == Category::Extended));
        assert!(extended.iter().any(|c| c.name == "rebeccapurple"));
    }

    #[test]
    fn test_select_preserves_catalog_order() {
        let db = get_test_db();
        let all = db.select(ColorFilter::All);
        let basic = db.select(ColorFilter::Basic);
        // Basic scope is a subsequence of the All scope
        let mut iter = all.iter();
        for record in &basic {
            assert!(iter.any(|r| r == record));
        }
    }

    #[test]
    fn test_overlapping_names_across_categories() {
        let db = get_test_db();
        // "gray" is both a basic keyword and an extended keyword
        let matches = db.find_by_name("gray");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().any(|c| c.category == Category::Basic));
        assert!(matches.iter().any(|c| c.category == Category::Extended));
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let db = get_test_db();
        let matches = db.find_by_name("RebeccaPurple");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].hex, "#663399");
    }

    #[test]
    fn test_find_by_name_unknown() {
        let db = get_test_db();
        assert!(db.find_by_name("notacolor").is_empty());
    }

    #[test]
    fn test_record_canonical_forms() {
        let db = get_test_db();
        for record in db.select(ColorFilter::All) {
            let rgb = RgbColor::from_hex(&record.hex).unwrap();
            // Load canonicalizes both display strings from the hex value
            assert_eq!(record.hex, rgb.to_hex());
            assert_eq!(record.rgb, rgb.to_rgb_string());
            assert_eq!(record.name, record.name.to_lowercase());
        }
    }

    #[test]
    fn test_names_unique_within_category() {
        let db = get_test_db();
        for filter in [ColorFilter::Basic, ColorFilter::Extended] {
            let records = db.select(filter);
            let mut names: Vec<&str> = records.iter().map(|c| c.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), records.len());
        }
    }

    #[test]
    fn test_filter_cycle() {
        assert_eq!(ColorFilter::All.next(), ColorFilter::Basic);
        assert_eq!(ColorFilter::Basic.next(), ColorFilter::Extended);
        assert_eq!(ColorFilter::Extended.next(), ColorFilter::All);
    }
}
