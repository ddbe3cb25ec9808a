use favdirs::{
  config::UiTheme,
  session::Screen,
  ui::colors::{
    parse_color,
    screen_color,
  },
};
use ratatui::style::Color;

#[test]
fn parse_color_named_and_hex()
{
  assert_eq!(parse_color("red"), Some(Color::Red));
  assert_eq!(parse_color("Gray"), Some(Color::Gray));
  assert_eq!(parse_color("darkgrey"), Some(Color::DarkGray));
  assert_eq!(parse_color("#00ff00"), Some(Color::Rgb(0, 255, 0)));
  assert_eq!(parse_color("#ABCDEF"), Some(Color::Rgb(0xAB, 0xCD, 0xEF)));
  assert_eq!(parse_color("not-a-color"), None);
  assert_eq!(parse_color("#123"), None);
}

#[test]
fn parse_color_rejects_non_hex_six_byte_values()
{
  // six bytes, but not six ASCII characters
  assert_eq!(parse_color("#a\u{e9}\u{20ac}"), None);
  assert_eq!(parse_color("#\u{e9}\u{e9}\u{e9}"), None);
  assert_eq!(parse_color("#+f+f+f"), None);
  assert_eq!(parse_color("#12345g"), None);
}

#[test]
fn screen_colours_default_and_override()
{
  let theme = UiTheme::default();
  assert_eq!(screen_color(Screen::Select, &theme), Color::Green);
  assert_eq!(screen_color(Screen::Add, &theme), Color::Yellow);
  assert_eq!(screen_color(Screen::Delete, &theme), Color::Red);

  let theme = UiTheme {
    delete_fg: Some("magenta".into()),
    add_fg: Some("bogus".into()),
    ..UiTheme::default()
  };
  assert_eq!(screen_color(Screen::Delete, &theme), Color::Magenta);
  assert_eq!(screen_color(Screen::Add, &theme), Color::Yellow);
}
