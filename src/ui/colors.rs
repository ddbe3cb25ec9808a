use ratatui::style::Color;

use crate::{
  config::UiTheme,
  session::Screen,
};

pub fn parse_color(s: &str) -> Option<Color> {
  let low = s.trim().to_ascii_lowercase();
  match low.as_str() {
    "black" => Some(Color::Black),
    "red" => Some(Color::Red),
    "green" => Some(Color::Green),
    "yellow" => Some(Color::Yellow),
    "blue" => Some(Color::Blue),
    "magenta" | "purple" => Some(Color::Magenta),
    "cyan" => Some(Color::Cyan),
    "gray" | "grey" => Some(Color::Gray),
    "darkgray" | "darkgrey" => Some(Color::DarkGray),
    "white" => Some(Color::White),
    _ => parse_hex_rgb(&low),
  }
}

fn parse_hex_rgb(s: &str) -> Option<Color> {
  let t = s.strip_prefix('#')?;
  if t.len() != 6 || !t.bytes().all(|b| b.is_ascii_hexdigit()) { return None; }
  let r = u8::from_str_radix(&t[0..2], 16).ok()?;
  let g = u8::from_str_radix(&t[2..4], 16).ok()?;
  let b = u8::from_str_radix(&t[4..6], 16).ok()?;
  Some(Color::Rgb(r, g, b))
}

/// Accent colour for a screen's list: green select, yellow add, red delete.
pub fn screen_color(screen: Screen, theme: &UiTheme) -> Color {
  let (configured, fallback) = match screen {
    Screen::Select => (theme.select_fg.as_deref(), Color::Green),
    Screen::Add => (theme.add_fg.as_deref(), Color::Yellow),
    Screen::Delete => (theme.delete_fg.as_deref(), Color::Red),
  };
  configured.and_then(parse_color).unwrap_or(fallback)
}

/// Configured colour or `fallback`.
pub fn themed(value: Option<&String>, fallback: Color) -> Color {
  value.and_then(|s| parse_color(s)).unwrap_or(fallback)
}
