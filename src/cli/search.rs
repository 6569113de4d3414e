//! Headless fuzzy search command.

use clap::Args;
use serde::Serialize;

use crate::catalog::{ColorDb, ColorFilter};
use crate::cli::common::{CliError, CliResult};
use crate::search::{ColorSearcher, MergedColor};

/// Fuzzy-search the catalog by name, hex, or rgb
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search query (typos allowed)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Category scope to search
    #[arg(short, long, value_enum, default_value_t = ColorFilter::All)]
    pub filter: ColorFilter,

    /// Limit the number of results
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    count: usize,
    results: Vec<MergedColor>,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> CliResult<()> {
        let db = ColorDb::load()
            .map_err(|e| CliError::io(format!("Failed to load color database: {e}")))?;
        let searcher = ColorSearcher::new();

        let mut results = searcher.run(&self.query, &db.select(self.filter));
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        if self.json {
            let output = SearchOutput {
                query: &self.query,
                count: results.len(),
                results,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if results.is_empty() {
            println!("No colors match '{}'", self.query);
        } else {
            for color in &results {
                let categories = color
                    .categories
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("+");
                println!(
                    "{:<22} {:<9} {:<20} {}",
                    color.name, color.hex, color.rgb, categories
                );
            }
        }

        Ok(())
    }
}
