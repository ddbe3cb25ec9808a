//! In-memory bindings and their flat text representation.
//!
//! The bindings artifact holds one `key=path` line per binding, sorted by
//! key. The key is always the first character of a line, so a path may
//! itself contain `=`; a path containing a newline cannot be represented.

use std::{
  collections::BTreeMap,
  path::{
    Path,
    PathBuf,
  },
};

/// All current bindings, ordered by key so serialization is stable.
pub type LocationSet = BTreeMap<char, PathBuf>;

/// Whether `ch` may be used as a binding key.
pub fn is_bindable_key(ch: char) -> bool
{
  !ch.is_control() && !ch.is_whitespace()
}

/// Whether `path` can be written as a binding and read back unchanged:
/// valid UTF-8 with no line breaks.
pub fn is_storable_path(path: &Path) -> bool
{
  path.to_str().is_some_and(|s| !s.contains(['\n', '\r']))
}

/// Parse a single `key=path` line.
///
/// Returns `None` for lines that do not follow the format; callers skip them.
pub fn parse_line(line: &str) -> Option<(char, PathBuf)>
{
  let line = line.strip_suffix('\r').unwrap_or(line);
  let mut chars = line.chars();
  let key = chars.next()?;
  if !is_bindable_key(key)
  {
    return None;
  }
  let path = chars.as_str().strip_prefix('=')?;
  if path.is_empty()
  {
    return None;
  }
  Some((key, PathBuf::from(path)))
}

/// Parse the whole bindings artifact, skipping malformed lines.
///
/// Lines are decoded one at a time, so a line that is not valid UTF-8 is
/// skipped like any other malformed line instead of discarding the rest.
pub fn parse_locations(bytes: &[u8]) -> LocationSet
{
  let mut out = LocationSet::new();
  for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate()
  {
    if raw.is_empty()
    {
      continue;
    }
    let Ok(line) = std::str::from_utf8(raw)
    else
    {
      crate::trace::log(format!(
        "[locations] skipping non-UTF-8 line {}",
        idx + 1
      ));
      continue;
    };
    match parse_line(line)
    {
      Some((key, path)) =>
      {
        out.insert(key, path);
      }
      None =>
      {
        crate::trace::log(format!(
          "[locations] skipping malformed line {}: {:?}",
          idx + 1,
          line
        ));
      }
    }
  }
  out
}

/// Serialize bindings as sorted `key=path\n` lines.
pub fn format_locations(locations: &LocationSet) -> String
{
  let mut out = String::new();
  for (key, path) in locations
  {
    out.push(*key);
    out.push('=');
    out.push_str(&path.to_string_lossy());
    out.push('\n');
  }
  out
}
