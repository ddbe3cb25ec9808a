//! Text helpers for the bindings list.

use std::path::Path;

use ratatui::{
  style::{
    Color,
    Style,
  },
  text::{
    Line,
    Span,
  },
};
use unicode_width::{
  UnicodeWidthChar,
  UnicodeWidthStr,
};

use crate::core::LocationSet;

const NAME_COLUMN: usize = 20;
const ELLIPSIS: &str = "...";

/// Last component of `path`, or the path itself for `/`.
pub fn dir_name(path: &Path) -> String
{
  path
    .file_name()
    .map(|s| s.to_string_lossy().to_string())
    .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Shorten `s` to at most `max_w` columns, keeping the end and marking the
/// cut with `...`.
pub fn truncate_left(
  s: &str,
  max_w: usize,
) -> String
{
  if UnicodeWidthStr::width(s) <= max_w
  {
    return s.to_string();
  }
  if max_w <= ELLIPSIS.len()
  {
    return ELLIPSIS[..max_w].to_string();
  }
  let budget = max_w - ELLIPSIS.len();
  let mut tail: Vec<char> = Vec::new();
  let mut w = 0usize;
  for ch in s.chars().rev()
  {
    let cw = ch.width().unwrap_or(0);
    if w + cw > budget
    {
      break;
    }
    tail.push(ch);
    w += cw;
  }
  let mut out = String::from(ELLIPSIS);
  out.extend(tail.into_iter().rev());
  out
}

fn pad_to(
  s: &str,
  w: usize,
) -> String
{
  let cur = UnicodeWidthStr::width(s);
  let mut out = s.to_string();
  out.extend(std::iter::repeat_n(' ', w.saturating_sub(cur)));
  out
}

/// One `[k] name  path` line per binding, sorted by key.
pub fn location_lines(
  locations: &LocationSet,
  width: usize,
  accent: Color,
  path_fg: Color,
) -> Vec<Line<'static>>
{
  if locations.is_empty()
  {
    return vec![Line::from(Span::styled(
      "<no locations>",
      Style::default().fg(path_fg),
    ))];
  }
  let mut out = Vec::with_capacity(locations.len());
  for (key, path) in locations
  {
    let name = truncate_left(&dir_name(path), NAME_COLUMN);
    // "[k] " + name column + " "
    let prefix_w = 4 + NAME_COLUMN + 1;
    let shown = truncate_left(
      &path.to_string_lossy(),
      width.saturating_sub(prefix_w),
    );
    out.push(Line::from(vec![
      Span::raw("["),
      Span::styled(key.to_string(), Style::default().fg(accent)),
      Span::raw("] "),
      Span::styled(pad_to(&name, NAME_COLUMN), Style::default().fg(accent)),
      Span::raw(" "),
      Span::styled(shown, Style::default().fg(path_fg)),
    ]));
  }
  out
}
