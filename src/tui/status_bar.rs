//! Status bar widget for messages and shortcut hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Shortcut hints shown on the bottom line.
const HINTS: &[(&str, &str)] = &[
    ("Enter", "Copy"),
    ("^R", "Copy rgb"),
    ("^N", "Copy name"),
    ("Tab", "Filter"),
    ("^T", "Hex/rgb"),
    ("^D", "Detail"),
    ("F1", "Help"),
];

/// Renders the status bar: error or status message on top, hints below.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let message_line = if let Some(error) = &state.error_message {
        Line::from(vec![
            Span::styled(
                "ERROR: ",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.as_str(), Style::default().fg(theme.error)),
        ])
    } else if state.status_message.starts_with("Copied") {
        Line::from(Span::styled(
            state.status_message.as_str(),
            Style::default().fg(theme.success),
        ))
    } else {
        Line::from(Span::styled(
            state.status_message.as_str(),
            Style::default().fg(theme.text),
        ))
    };

    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::raw("  "));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
    }

    let status = Paragraph::new(vec![message_line, Line::from(hint_spans)])
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(status, area);
}
