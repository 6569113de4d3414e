//! Copy-by-name command.

use clap::Args;

use crate::catalog::ColorDb;
use crate::cli::common::{CliError, CliResult};
use crate::clipboard::{self, CopyFormat};
use crate::config::Config;
use crate::search::{merge_matches, ScoredMatch};

/// Copy a color's representation by exact name
#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    /// Color name to copy (case-insensitive, e.g., "rebeccapurple")
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Representation to copy (defaults to the configured format)
    #[arg(short = 'F', long, value_enum)]
    pub format: Option<CopyFormat>,

    /// Print the text to stdout instead of touching the clipboard
    #[arg(long)]
    pub stdout: bool,
}

impl CopyArgs {
    /// Execute the copy command
    pub fn execute(&self) -> CliResult<()> {
        let db = ColorDb::load()
            .map_err(|e| CliError::io(format!("Failed to load color database: {e}")))?;

        let records = db.find_by_name(&self.name);
        if records.is_empty() {
            return Err(CliError::validation(format!(
                "Unknown color name: '{}'",
                self.name
            )));
        }

        // A name present in both categories merges into one result
        let matches: Vec<ScoredMatch<'_>> = records
            .iter()
            .map(|&record| ScoredMatch { record, score: 0.0 })
            .collect();
        let merged = merge_matches(&matches);
        let color = &merged[0];

        let format = self.format.unwrap_or_else(|| {
            Config::load()
                .map(|c| c.copy.default_format)
                .unwrap_or_default()
        });
        let text = clipboard::copy_text(color, format);

        if self.stdout {
            println!("{text}");
        } else {
            clipboard::copy_to_clipboard(&text).map_err(|e| CliError::io(format!("{e:#}")))?;
            println!("Copied to clipboard: {text}");
        }

        Ok(())
    }
}
