use ratatui::style::Color;

/// Parse a theme color string: a named color, an `r,g,b` triple, or a
/// `#rrggbb` hex value. Anything unparseable falls back to `Reset`.
pub fn parse_color(s: &str) -> Color {
    let s = s.trim().to_lowercase();

    if let Some(color) = named_color(&s) {
        return color;
    }
    if let Some(hex) = s.strip_prefix('#')
        && let Some(color) = parse_hex(hex)
    {
        return color;
    }
    if s.contains(',')
        && let Some(color) = parse_triple(&s)
    {
        return color;
    }
    Color::Reset
}

fn named_color(s: &str) -> Option<Color> {
    let color = match s {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn parse_triple(s: &str) -> Option<Color> {
    let mut parts = s.split(',');
    let r = parts.next()?.trim().parse().ok()?;
    let g = parts.next()?.trim().parse().ok()?;
    let b = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::Rgb(r, g, b))
}
