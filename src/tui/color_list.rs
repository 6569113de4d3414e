//! Search bar and result list widgets.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::catalog::Category;
use crate::constants::APP_NAME;
use crate::search::MergedColor;

use super::AppState;

/// Renders the search input with the active filter indicator.
pub fn render_search_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let search_text = vec![Line::from(vec![
        Span::styled(" Search: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.search.as_str(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "_",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ])];

    let title = format!(" {APP_NAME} [{}] ", state.filter.label());
    let search = Paragraph::new(search_text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(search, area);
}

/// Renders the merged result list with swatch and category accessories.
pub fn render_results(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let list_items: Vec<ListItem> = state
        .results
        .iter()
        .enumerate()
        .map(|(idx, color)| {
            // Unselected swatches are dimmed so the selection stands out
            let swatch_style = color
                .swatch()
                .map(|rgb| {
                    let rgb = if idx == state.selected { rgb } else { rgb.dim(70) };
                    Style::default().fg(rgb.to_ratatui_color())
                })
                .unwrap_or_default();

            let subtitle = if state.show_hex {
                color.hex.as_str()
            } else {
                color.rgb.as_str()
            };

            let spans = vec![
                Span::styled("██ ", swatch_style),
                Span::styled(
                    format!("{:<22}", color.name),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<18}", subtitle), Style::default().fg(theme.text_muted)),
                Span::styled(category_marker(color), Style::default().fg(theme.accent)),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(format!(" Results ({}) ", state.results.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.surface))
                .style(Style::default().bg(theme.background)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    if !state.results.is_empty() {
        list_state.select(Some(state.selected.min(state.results.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

/// Short marker for the categories a result belongs to.
fn category_marker(color: &MergedColor) -> &'static str {
    let basic = color.categories.contains(&Category::Basic);
    let extended = color.categories.contains(&Category::Extended);
    match (basic, extended) {
        (true, true) => "basic+ext",
        (true, false) => "basic",
        (false, _) => "extended",
    }
}
