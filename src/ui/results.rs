use crate::models::{CatalogItem, RecentItem};
use crate::ui::theme::ThemeTokens;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use regex::Regex;

/// The typeahead branch: live matches for the trimmed query, with the
/// matched fragment highlighted in each name.
pub fn render_typeahead(
    f: &mut Frame,
    area: Rect,
    results: &[CatalogItem],
    query: &str,
    tokens: &ThemeTokens,
) {
    let title = crate::ui::truncate_to_width(
        &format!(" Results — \"{query}\" "),
        area.width.saturating_sub(4) as usize,
    );
    let block = results_block(title, tokens);

    if results.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No matches.",
            Style::default().fg(tokens.muted),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let pattern = Regex::new(&format!("(?i){}", regex::escape(query))).ok();
    let match_style = Style::default()
        .bg(tokens.highlight)
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = results
        .iter()
        .map(|item| {
            let mut spans = highlight_spans(
                &item.name,
                pattern.as_ref(),
                Style::default(),
                match_style,
            );
            spans.push(Span::styled(
                format!("  {}", item.kind.as_str()),
                Style::default().fg(tokens.muted),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// The recents branch: recently visited locations, newest first. Takes no
/// query; it renders whatever the recents store holds.
pub fn render_recents(f: &mut Frame, area: Rect, recents: &[RecentItem], tokens: &ThemeTokens) {
    let block = results_block(" Recently viewed ".to_string(), tokens);

    if recents.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing viewed yet.",
            Style::default().fg(tokens.muted),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = recents
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(item.name.clone()),
                Span::styled(
                    format!("  {}", item.visited_at),
                    Style::default().fg(tokens.muted),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn results_block(title: String, tokens: &ThemeTokens) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tokens.border_search))
        .title(Line::from(Span::styled(
            title,
            Style::default().fg(tokens.accent),
        )))
}

/// Split `text` into spans, styling every regex match with `match_style`.
fn highlight_spans(
    text: &str,
    pattern: Option<&Regex>,
    base_style: Style,
    match_style: Style,
) -> Vec<Span<'static>> {
    let Some(pattern) = pattern else {
        return vec![Span::styled(text.to_string(), base_style)];
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            spans.push(Span::styled(text[last..found.start()].to_string(), base_style));
        }
        spans.push(Span::styled(found.as_str().to_string(), match_style));
        last = found.end();
    }
    if last < text.len() {
        spans.push(Span::styled(text[last..].to_string(), base_style));
    }
    if spans.is_empty() {
        spans.push(Span::styled(text.to_string(), base_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_text(spans: &[Span<'_>]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn highlight_splits_around_matches() {
        let pattern = Regex::new("(?i)dash").unwrap();
        let spans = highlight_spans(
            "Revenue dashboard",
            Some(&pattern),
            Style::default(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        assert_eq!(spans_text(&spans), vec!["Revenue ", "dash", "board"]);
    }

    #[test]
    fn highlight_without_matches_keeps_the_text_whole() {
        let pattern = Regex::new("zzz").unwrap();
        let spans = highlight_spans(
            "People",
            Some(&pattern),
            Style::default(),
            Style::default(),
        );
        assert_eq!(spans_text(&spans), vec!["People"]);
    }

    #[test]
    fn highlight_is_case_insensitive_like_the_lookup() {
        let pattern = Regex::new("(?i)audit").unwrap();
        let spans = highlight_spans(
            "Audit log",
            Some(&pattern),
            Style::default(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        assert_eq!(spans_text(&spans), vec!["Audit", " log"]);
    }
}
