use ratatui::style::Color;

/// Parse a colour string: `#RRGGBB`, a 256-colour index (`"33"`), or one of
/// the basic ANSI names (`"red"`, `"lightcyan"`, ...).
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return from_hex(hex);
    }
    if let Ok(index) = value.parse::<u8>() {
        return Some(Color::Indexed(index));
    }

    let named = match value.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
        "black"        => Color::Black,
        "red"          => Color::Red,
        "green"        => Color::Green,
        "yellow"       => Color::Yellow,
        "blue"         => Color::Blue,
        "magenta"      => Color::Magenta,
        "cyan"         => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred"     => Color::LightRed,
        "lightgreen"   => Color::LightGreen,
        "lightyellow"  => Color::LightYellow,
        "lightblue"    => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan"    => Color::LightCyan,
        "white"        => Color::White,
        "reset" | "default" => Color::Reset,
        _ => return None,
    };
    Some(named)
}

fn from_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

    match hex.len() {
        6 => Some(Color::Rgb(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        3 => Some(Color::Rgb(
            byte(&hex[0..1])? * 17,
            byte(&hex[1..2])? * 17,
            byte(&hex[2..3])? * 17,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#0f0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn indexed_and_named() {
        assert_eq!(parse_color("33"), Some(Color::Indexed(33)));
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("light-green"), Some(Color::LightGreen));
        assert_eq!(parse_color("256"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }
}
