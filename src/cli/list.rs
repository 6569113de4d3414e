//! Catalog listing command.

use clap::Args;
use serde::Serialize;

use crate::catalog::{ColorDb, ColorFilter, ColorRecord};
use crate::cli::common::{CliError, CliResult};

/// List the color catalog
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Category scope to list
    #[arg(short, long, value_enum, default_value_t = ColorFilter::All)]
    pub filter: ColorFilter,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    count: usize,
    colors: Vec<&'a ColorRecord>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let db = ColorDb::load()
            .map_err(|e| CliError::io(format!("Failed to load color database: {e}")))?;
        let colors = db.select(self.filter);

        if self.json {
            let output = ListOutput {
                count: colors.len(),
                colors,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for color in &colors {
                println!(
                    "{:<22} {:<9} {:<20} {}",
                    color.name, color.hex, color.rgb, color.category
                );
            }
            println!();
            println!("{} colors ({})", colors.len(), self.filter.label());
        }

        Ok(())
    }
}
