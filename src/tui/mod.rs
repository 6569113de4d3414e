//! Terminal user interface: state management, event loop, and widgets.
//!
//! All computation runs synchronously on the UI thread: every keystroke or
//! filter change recomputes the merged result list before the next event is
//! read. The two view toggles only change rendering and never re-search.

pub mod color_list;
pub mod detail_pane;
pub mod help_overlay;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::catalog::{ColorDb, ColorFilter};
use crate::clipboard::{self, CopyFormat};
use crate::config::Config;
use crate::search::{ColorSearcher, MergedColor};

pub use theme::Theme;

/// Application state for the color picker session.
pub struct AppState {
    /// Color database
    pub db: ColorDb,
    /// Fuzzy searcher
    pub searcher: ColorSearcher,
    /// Loaded configuration
    pub config: Config,
    /// Active theme
    pub theme: Theme,
    /// Current search text
    pub search: String,
    /// Active category filter
    pub filter: ColorFilter,
    /// Results for the current search and filter
    pub results: Vec<MergedColor>,
    /// Selected result index
    pub selected: usize,
    /// Show hex (true) or rgb (false) as the list subtitle
    pub show_hex: bool,
    /// Whether the detail pane is expanded
    pub show_detail: bool,
    /// Whether the help overlay is open
    pub show_help: bool,
    /// Status message shown in the status bar
    pub status_message: String,
    /// Error message, takes precedence over the status message
    pub error_message: Option<String>,
    /// Set when the user quits
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state from a loaded database and configuration.
    #[must_use]
    pub fn new(db: ColorDb, config: Config) -> Self {
        let mut state = Self {
            theme: Theme::from_mode(config.ui.theme_mode),
            searcher: ColorSearcher::new(),
            search: String::new(),
            filter: config.ui.default_filter,
            results: Vec::new(),
            selected: 0,
            show_hex: config.ui.show_hex,
            show_detail: false,
            show_help: false,
            status_message: "Type to search, F1 for help".to_string(),
            error_message: None,
            should_quit: false,
            db,
            config,
        };
        state.refresh_results();
        state
    }

    /// Recomputes the merged result list for the current search and filter.
    ///
    /// Called after every input event that changes the query or the filter;
    /// the selection is clamped into the new list.
    pub fn refresh_results(&mut self) {
        let records = self.db.select(self.filter);
        self.results = self.searcher.run(&self.search, &records);
        self.selected = self.selected.min(self.results.len().saturating_sub(1));
    }

    /// The currently selected result, if any.
    #[must_use]
    pub fn selected_color(&self) -> Option<&MergedColor> {
        self.results.get(self.selected)
    }

    /// Sets a status message (clears any error).
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Sets an error message.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Copies the selected color in the given format and confirms in the
    /// status bar. Clipboard failures surface as error messages.
    pub fn copy_selected(&mut self, format: CopyFormat) {
        let Some(color) = self.selected_color() else {
            self.set_status("Nothing to copy");
            return;
        };
        let text = clipboard::copy_text(color, format);
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.set_status(format!("Copied to clipboard: {text}")),
            Err(e) => self.set_error(format!("{e:#}")),
        }
    }

    /// Cycles the category filter and recomputes results.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
        self.refresh_results();
        self.set_status(format!("Filter: {}", self.filter.label()));
    }
}

/// Sets up the terminal for TUI rendering.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the main TUI loop until the user quits.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(state, key);
                }
                _ => {} // Resize re-renders on the next loop
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handles a single key event against the current state.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    // Help overlay swallows everything except its close keys
    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => state.should_quit = true,
        // Copy actions
        KeyCode::Enter => state.copy_selected(state.config.copy.default_format),
        KeyCode::Char('r') if ctrl => state.copy_selected(CopyFormat::Rgb),
        KeyCode::Char('n') if ctrl => state.copy_selected(CopyFormat::Name),
        KeyCode::Char('y') if ctrl => state.copy_selected(CopyFormat::Hex),
        // View toggles: rendering only, no re-search
        KeyCode::Char('t') if ctrl => {
            state.show_hex = !state.show_hex;
            state.set_status(if state.show_hex {
                "Subtitle: hex"
            } else {
                "Subtitle: rgb"
            });
        }
        KeyCode::Char('d') if ctrl => {
            state.show_detail = !state.show_detail;
        }
        KeyCode::F(1) => state.show_help = true,
        KeyCode::Tab => state.cycle_filter(),
        KeyCode::Esc => {
            if state.search.is_empty() {
                state.should_quit = true;
            } else {
                state.search.clear();
                state.selected = 0;
                state.refresh_results();
                state.set_status("Search cleared");
            }
        }
        // Search input
        KeyCode::Char(c) if !ctrl => {
            state.search.push(c);
            state.selected = 0;
            state.refresh_results();
        }
        KeyCode::Backspace => {
            state.search.pop();
            state.selected = 0;
            state.refresh_results();
        }
        // List navigation
        KeyCode::Up => {
            state.selected = state.selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.selected + 1 < state.results.len() {
                state.selected += 1;
            }
        }
        KeyCode::PageUp => {
            state.selected = state.selected.saturating_sub(10);
        }
        KeyCode::PageDown => {
            state.selected = (state.selected + 10).min(state.results.len().saturating_sub(1));
        }
        KeyCode::Home => state.selected = 0,
        KeyCode::End => state.selected = state.results.len().saturating_sub(1),
        _ => {}
    }
}

/// Renders the full frame: search bar, result list, optional detail pane,
/// status bar, and the help overlay when open.
fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Result list / detail pane
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    color_list::render_search_bar(f, chunks[0], state);

    let main_area: Rect = chunks[1];
    if state.show_detail {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_area);
        color_list::render_results(f, halves[0], state);
        detail_pane::render(f, halves[1], state);
    } else {
        color_list::render_results(f, main_area, state);
    }

    status_bar::render(f, chunks[2], state);

    if state.show_help {
        help_overlay::render(f, state);
    }
}
