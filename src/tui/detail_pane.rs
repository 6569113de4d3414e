//! Detail pane for the selected color.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Renders the detail pane: a large swatch plus labeled fields for the
/// selected result (categories, name, hex, rgb).
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.surface))
        .style(Style::default().bg(theme.background));

    let Some(color) = state.selected_color() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No selection",
            Style::default().fg(theme.text_muted),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    };

    let swatch_style = color
        .swatch()
        .map(|rgb| Style::default().fg(rgb.to_ratatui_color()))
        .unwrap_or_default();

    let categories = color
        .categories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let label_style = Style::default().fg(theme.primary);
    let value_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("████████", swatch_style)),
        Line::from(Span::styled("████████", swatch_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name:       ", label_style),
            Span::styled(color.name.clone(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Hex:        ", label_style),
            Span::styled(color.hex.clone(), value_style),
        ]),
        Line::from(vec![
            Span::styled("RGB:        ", label_style),
            Span::styled(color.rgb.clone(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Categories: ", label_style),
            Span::styled(categories, Style::default().fg(theme.accent)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
