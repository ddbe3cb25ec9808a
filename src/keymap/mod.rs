use std::fmt;

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyModifiers,
};

/// A key press reduced to what the session cares about.
///
/// Tokens use the same notation as the config file: `a`, `<C-a>`, `<M-a>`,
/// `<Esc>`, `<Enter>`, `<Tab>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key
{
  Char(char),
  Ctrl(char),
  Alt(char),
  Esc,
  Enter,
  Tab,
}

impl Key
{
  /// Convert a terminal key event. Returns `None` for keys with no token
  /// (arrows, function keys, ...).
  pub fn from_event(ev: &KeyEvent) -> Option<Self>
  {
    let ctrl = ev.modifiers.contains(KeyModifiers::CONTROL);
    let alt = ev.modifiers.contains(KeyModifiers::ALT);
    match ev.code
    {
      KeyCode::Char(ch) if ctrl => Some(Key::Ctrl(ch.to_ascii_lowercase())),
      KeyCode::Char(ch) if alt => Some(Key::Alt(ch)),
      KeyCode::Char(ch) => Some(Key::Char(ch)),
      KeyCode::Esc => Some(Key::Esc),
      KeyCode::Enter => Some(Key::Enter),
      KeyCode::Tab => Some(Key::Tab),
      _ => None,
    }
  }

  /// Parse a config token such as `<C-a>` or `x`.
  pub fn parse(token: &str) -> Option<Self>
  {
    let t = token.trim();
    if let Some(inner) = t.strip_prefix('<').and_then(|s| s.strip_suffix('>'))
    {
      if inner.eq_ignore_ascii_case("esc")
      {
        return Some(Key::Esc);
      }
      if inner.eq_ignore_ascii_case("enter") || inner.eq_ignore_ascii_case("cr")
      {
        return Some(Key::Enter);
      }
      if inner.eq_ignore_ascii_case("tab")
      {
        return Some(Key::Tab);
      }
      if let Some(rest) = inner.strip_prefix("C-")
      {
        return single_char(rest).map(|c| Key::Ctrl(c.to_ascii_lowercase()));
      }
      if let Some(rest) = inner.strip_prefix("M-")
      {
        return single_char(rest).map(Key::Alt);
      }
      return None;
    }
    single_char(t).map(Key::Char)
  }
}

fn single_char(s: &str) -> Option<char>
{
  let mut it = s.chars();
  let ch = it.next()?;
  if it.next().is_some()
  {
    return None;
  }
  Some(ch)
}

impl fmt::Display for Key
{
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result
  {
    match self
    {
      Key::Char(c) => write!(f, "{}", c),
      Key::Ctrl(c) => write!(f, "<C-{}>", c),
      Key::Alt(c) => write!(f, "<M-{}>", c),
      Key::Esc => f.write_str("<Esc>"),
      Key::Enter => f.write_str("<Enter>"),
      Key::Tab => f.write_str("<Tab>"),
    }
  }
}

/// Human label for the legend, e.g. `ctrl+a`.
pub fn describe(key: &Key) -> String
{
  match key
  {
    Key::Char(c) => c.to_string(),
    Key::Ctrl(c) => format!("ctrl+{}", c),
    Key::Alt(c) => format!("alt+{}", c),
    Key::Esc => "esc".to_string(),
    Key::Enter => "enter".to_string(),
    Key::Tab => "tab".to_string(),
  }
}
