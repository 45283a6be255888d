use crate::config::Theme;
use crate::ui::color_parser::parse_color;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct ThemeTokens {
    pub border_default: Color,
    pub border_search: Color,
    pub highlight: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection_bg: Color,
}

impl ThemeTokens {
    pub fn from_theme(theme: &Theme) -> Self {
        ThemeTokens {
            border_default: parse_color(&theme.border_default),
            border_search: parse_color(&theme.border_search),
            highlight: parse_color(&theme.text_highlight),
            muted: parse_color(&theme.muted),
            accent: parse_color(&theme.accent),
            selection_bg: parse_color(&theme.selection_bg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_parses_cleanly() {
        let tokens = ThemeTokens::from_theme(&Theme::default());
        assert_eq!(tokens.border_search, Color::Cyan);
        assert_eq!(tokens.muted, Color::DarkGray);
        assert_eq!(tokens.highlight, Color::Rgb(50, 50, 50));
    }
}
