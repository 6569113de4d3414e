//! Help overlay listing all key bindings.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::AppState;

const BINDINGS: &[(&str, &str)] = &[
    ("Type", "Search by name, hex, or rgb"),
    ("Backspace", "Delete last character"),
    ("Esc", "Clear search / quit when empty"),
    ("Up/Down", "Move selection"),
    ("PgUp/PgDn", "Move selection by 10"),
    ("Home/End", "Jump to first/last result"),
    ("Tab", "Cycle category filter (all/basic/extended)"),
    ("Enter", "Copy in the default format"),
    ("Ctrl+Y", "Copy hex"),
    ("Ctrl+R", "Copy rgb"),
    ("Ctrl+N", "Copy name"),
    ("Ctrl+T", "Toggle hex/rgb subtitle"),
    ("Ctrl+D", "Toggle detail pane"),
    ("F1", "This help"),
    ("Ctrl+Q", "Quit"),
];

/// Renders the centered help popup over the main view.
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<12}"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc to close",
        Style::default().fg(theme.text_muted),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(help, area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
