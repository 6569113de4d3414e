//! Huepick - terminal lookup for named web colors.
//!
//! Without a subcommand this launches the interactive picker; the `list`,
//! `search`, and `copy` subcommands give scriptable access to the same
//! catalog and search pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};

use huepick::cli::{CopyArgs, ListArgs, SearchArgs};

/// Terminal lookup for named web colors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the color catalog
    List(ListArgs),
    /// Fuzzy-search the catalog by name, hex, or rgb
    Search(SearchArgs),
    /// Copy a color's representation by exact name
    Copy(CopyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List(args)) => run_command(args.execute()),
        Some(Commands::Search(args)) => run_command(args.execute()),
        Some(Commands::Copy(args)) => run_command(args.execute()),
        None => run_interactive(),
    }
}

/// Runs a CLI command and exits with its mapped code on failure.
fn run_command(result: huepick::cli::CliResult<()>) -> Result<()> {
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code() as i32);
    }
    Ok(())
}

#[cfg(feature = "ratatui")]
fn run_interactive() -> Result<()> {
    use huepick::catalog::ColorDb;
    use huepick::config::Config;
    use huepick::tui;

    let db = ColorDb::load()?;

    // A broken config file should not block the picker
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            eprintln!("Continuing with defaults.");
            Config::new()
        }
    };

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(db, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal before surfacing any loop error
    tui::restore_terminal(terminal)?;
    result?;

    // Persist view preferences toggled during the session
    let mut updated = state.config;
    updated.ui.show_hex = state.show_hex;
    updated.ui.default_filter = state.filter;
    if updated != state.config {
        if let Err(e) = updated.save() {
            eprintln!("Warning: Failed to save config: {e:#}");
        }
    }

    Ok(())
}

#[cfg(not(feature = "ratatui"))]
fn run_interactive() -> Result<()> {
    use huepick::constants::APP_BINARY_NAME;

    eprintln!("This build has no interactive picker (compiled without the 'ratatui' feature).");
    eprintln!("Use the subcommands instead, e.g.:");
    eprintln!("  {APP_BINARY_NAME} search teal");
    eprintln!("  {APP_BINARY_NAME} copy rebeccapurple --stdout");
    std::process::exit(2);
}
