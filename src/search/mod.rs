//! Fuzzy search and result merging over the color catalog.
//!
//! This module wraps the `fuzzy-matcher` crate with per-field weights and
//! a two-stage score cutoff, then groups matches that share a name across
//! categories into a single merged result.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::catalog::{Category, ColorRecord};
use crate::models::RgbColor;

/// Matches with a combined score at or above this value are discarded.
///
/// Tunable, validated empirically against the catalog rather than derived.
pub const SCORE_CUTOFF: f64 = 0.4;

/// Per-field acceptance threshold applied before fields are combined.
const FIELD_THRESHOLD: f64 = 0.5;

/// Queries shorter than this match nothing (the empty query bypasses
/// matching entirely and is handled separately).
const MIN_QUERY_LEN: usize = 2;

/// Field text beyond this length is not considered for alignment.
const MAX_FIELD_LEN: usize = 150;

/// Relative field weights. Scores live in [0,1] with 0 = perfect and the
/// weight is applied as an exponent, so the higher name weight pulls name
/// matches ahead of equally scored hex/rgb matches.
const NAME_WEIGHT: f64 = 2.0;
const HEX_WEIGHT: f64 = 1.0;
const RGB_WEIGHT: f64 = 1.0;

/// A catalog record with its match score for the current query.
///
/// Scores are in [0,1] with 0 = perfect; the list handed out by
/// [`ColorSearcher::search`] is sorted ascending with ties left in
/// catalog order.
#[derive(Debug, Clone, Copy)]
pub struct ScoredMatch<'a> {
    /// The matched catalog record
    pub record: &'a ColorRecord,
    /// Combined weighted score, strictly below [`SCORE_CUTOFF`]
    pub score: f64,
}

/// One search result per unique color name.
///
/// When a name appears in both the basic and extended catalogs, the merged
/// result keeps the hex/rgb of the best-scoring occurrence and the union of
/// the categories it matched under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedColor {
    /// Lowercase color identifier
    pub name: String,
    /// Canonical hex string as stored in the catalog
    pub hex: String,
    /// Canonical rgb string as stored in the catalog
    pub rgb: String,
    /// Categories this name matched under; never empty
    pub categories: BTreeSet<Category>,
}

impl MergedColor {
    /// Wraps a single catalog record with its own category as the only entry.
    #[must_use]
    pub fn from_record(record: &ColorRecord) -> Self {
        Self {
            name: record.name.clone(),
            hex: record.hex.clone(),
            rgb: record.rgb.clone(),
            categories: BTreeSet::from([record.category]),
        }
    }

    /// Parses the record's hex field for swatch rendering.
    #[must_use]
    pub fn swatch(&self) -> Option<RgbColor> {
        RgbColor::from_hex(&self.hex).ok()
    }
}

/// Fuzzy searcher over color records.
pub struct ColorSearcher {
    matcher: SkimMatcherV2,
}

impl Default for ColorSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSearcher {
    /// Creates a searcher with the default matcher configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Runs the full pipeline: match, cut off, sort, merge.
    ///
    /// An empty (or whitespace-only) query bypasses matching and returns
    /// every record in catalog order, each wrapped as a singleton result.
    #[must_use]
    pub fn run(&self, query: &str, records: &[&ColorRecord]) -> Vec<MergedColor> {
        let query = query.trim();
        if query.is_empty() {
            return records.iter().map(|r| MergedColor::from_record(r)).collect();
        }
        merge_matches(&self.search(query, records))
    }

    /// Scores records against a non-empty query.
    ///
    /// Each record is matched independently on name, hex, and rgb; the best
    /// weighted field score wins. Results with a score at or above
    /// [`SCORE_CUTOFF`] are dropped, the rest are sorted ascending by score
    /// with catalog order preserved for ties.
    #[must_use]
    pub fn search<'a>(&self, query: &str, records: &[&'a ColorRecord]) -> Vec<ScoredMatch<'a>> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        // Self-match raw score serves as the perfect-match reference for
        // normalizing the matcher's unbounded scores into [0,1].
        let Some(reference) = self.matcher.fuzzy_match(&query, &query) else {
            return Vec::new();
        };

        let mut matches: Vec<ScoredMatch<'a>> = records
            .iter()
            .copied()
            .filter_map(|record| {
                let fields = [
                    (record.name.as_str(), NAME_WEIGHT),
                    (record.hex.as_str(), HEX_WEIGHT),
                    (record.rgb.as_str(), RGB_WEIGHT),
                ];

                let score = fields
                    .into_iter()
                    .filter_map(|(field, weight)| {
                        self.field_score(field, &query, reference)
                            .map(|s| s.powf(weight))
                    })
                    .min_by(f64::total_cmp)?;

                (score < SCORE_CUTOFF).then_some(ScoredMatch { record, score })
            })
            .collect();

        // Stable sort: ties keep catalog order
        matches.sort_by(|a, b| a.score.total_cmp(&b.score));
        matches
    }

    /// Scores a single field in [0,1] (0 = perfect), or None if the field
    /// does not match or misses the per-field threshold.
    fn field_score(&self, field: &str, query: &str, reference: i64) -> Option<f64> {
        let capped = if field.len() > MAX_FIELD_LEN {
            &field[..MAX_FIELD_LEN]
        } else {
            field
        };
        let raw = self.matcher.fuzzy_match(&capped.to_lowercase(), query)?;
        #[allow(clippy::cast_precision_loss)]
        let score = (1.0 - raw as f64 / reference as f64).clamp(0.0, 1.0);
        (score <= FIELD_THRESHOLD).then_some(score)
    }
}

/// Groups score-sorted matches into one result per unique name.
///
/// The first (best-scoring) occurrence of a name supplies hex/rgb and the
/// result's rank; later occurrences only contribute their category to the
/// union. Emission order follows first occurrence in the sorted input.
#[must_use]
pub fn merge_matches(matches: &[ScoredMatch<'_>]) -> Vec<MergedColor> {
    let mut results: Vec<MergedColor> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for m in matches {
        if let Some(&i) = by_name.get(m.record.name.as_str()) {
            results[i].categories.insert(m.record.category);
        } else {
            by_name.insert(m.record.name.as_str(), results.len());
            results.push(MergedColor::from_record(m.record));
        }
    }

    results
}
