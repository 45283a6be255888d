use crate::app::App;
use crate::search::SearchSource;
use crate::session::ResultsPanel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub mod color_parser;
pub mod results;
pub mod theme;

use theme::ThemeTokens;

/// Rows the results panel may occupy at most, borders included.
const PANEL_MAX_ROWS: u16 = 12;

pub fn ui(f: &mut Frame, app: &mut App) {
    let tokens = ThemeTokens::from_theme(&app.config.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_search_bar(f, chunks[0], app, &tokens);
    render_page(f, chunks[1], app, &tokens);
    render_status_bar(f, chunks[2], app, &tokens);

    // The panel floats over the page body, directly under the bar.
    render_results_panel(f, chunks[0], chunks[1], app, &tokens);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &mut App, tokens: &ThemeTokens) {
    app.bar_area = area;

    let active = app.session.is_active();
    let border_color = if active {
        tokens.border_search
    } else {
        tokens.border_default
    };
    let title_style = if active {
        Style::default()
            .fg(tokens.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(tokens.muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(Span::styled(" Search ", title_style)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Clear affordance: small screens only, and only when there is text.
    let clear_hint = app.small_screen && app.session.has_text();
    let (input_area, hint_area) = if clear_hint && inner.width > 8 {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(8)])
            .split(inner);
        (split[0], Some(split[1]))
    } else {
        (inner, None)
    };

    if app.input_focused {
        app.input.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        app.input.set_cursor_style(Style::default());
    }
    app.input.set_cursor_line_style(Style::default());
    f.render_widget(&app.input, input_area);

    if let Some(hint_area) = hint_area {
        let hint = Paragraph::new(Line::from(Span::styled(
            "✕ ctrl+l",
            Style::default().fg(tokens.muted),
        )));
        f.render_widget(hint, hint_area);
    }
}

fn render_page(f: &mut Frame, area: Rect, app: &mut App, tokens: &ThemeTokens) {
    let title = if app.location.is_search_route() {
        let q = app.location.q.as_deref().unwrap_or("");
        format!(" SEARCH — \"{}\" · {} results ", q, app.page_items.len())
    } else {
        format!(" {} ", app.page_title(&app.location.pathname).to_uppercase())
    };
    let title = truncate_to_width(&title, area.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tokens.border_default))
        .title(Line::from(Span::styled(
            title,
            Style::default().fg(tokens.muted),
        )));

    let wrap_width = area.width.saturating_sub(6).max(20) as usize;
    let items: Vec<ListItem> = app
        .page_items
        .iter()
        .map(|item| {
            let mut lines = vec![Line::from(vec![
                Span::raw(item.name.clone()),
                Span::styled(
                    format!("  {}", item.kind.as_str()),
                    Style::default().fg(tokens.muted),
                ),
            ])];
            if !item.description.is_empty() {
                for wrapped in textwrap::wrap(&item.description, wrap_width) {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", wrapped),
                        Style::default().fg(tokens.muted),
                    )));
                }
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("")
        .highlight_style(
            Style::default()
                .bg(tokens.selection_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, area, &mut app.page_state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, tokens: &ThemeTokens) {
    let line = if let Some(toast) = app.toast_message.as_deref() {
        Line::from(Span::styled(
            toast.to_string(),
            Style::default().fg(tokens.accent),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" /{}", app.location.pathname),
                Style::default().fg(tokens.accent),
            ),
            Span::styled(
                "  / search · j/k move · Enter open · h home · q quit",
                Style::default().fg(tokens.muted),
            ),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_results_panel(
    f: &mut Frame,
    bar_area: Rect,
    page_area: Rect,
    app: &mut App,
    tokens: &ThemeTokens,
) {
    app.panel_area = Rect::default();
    let Some(panel) = app.session.results_panel(app.typeahead_enabled()) else {
        return;
    };

    let results = match &panel {
        ResultsPanel::Typeahead(query) => app.source.search(query),
        ResultsPanel::Recents => Vec::new(),
    };
    let row_count = match &panel {
        ResultsPanel::Typeahead(_) => results.len().max(1),
        ResultsPanel::Recents => app.recents.len().max(1),
    };

    let height = (row_count as u16 + 2)
        .min(PANEL_MAX_ROWS)
        .min(page_area.height);
    if height < 3 {
        return;
    }
    let area = Rect {
        x: bar_area.x,
        y: page_area.y,
        width: bar_area.width,
        height,
    };
    f.render_widget(Clear, area);
    app.panel_area = area;

    match panel {
        ResultsPanel::Typeahead(query) => {
            results::render_typeahead(f, area, &results, &query, tokens);
        }
        ResultsPanel::Recents => results::render_recents(f, area, &app.recents, tokens),
    }
}

/// Truncate to a display width, ellipsis included, so wide glyphs cannot
/// push a title past its block border.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(1);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn short_titles_pass_through() {
        assert_eq!(truncate_to_width("SEARCH", 20), "SEARCH");
    }

    #[test]
    fn long_titles_get_an_ellipsis_within_the_width() {
        let out = truncate_to_width("a very long page title", 10);
        assert!(out.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(out.as_str()) <= 10);
    }

    #[test]
    fn wide_glyphs_count_by_display_width() {
        // Each CJK glyph is two columns wide.
        let out = truncate_to_width("検索結果の一覧", 6);
        assert!(unicode_width::UnicodeWidthStr::width(out.as_str()) <= 6);
    }
}
