//! The three interaction modes and their key handling.

use std::path::Path;

use crate::core::{
  LocationSet,
  is_bindable_key,
  is_storable_path,
};

/// Closed set of screens. Each one only owns its help text; bindings and
/// the starting directory belong to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen
{
  Select,
  Add,
  Delete,
}

/// Result of one key on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction
{
  pub help:    String,
  pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome
{
  /// Nothing changed besides the help text.
  Unchanged,
  /// Bindings were mutated and must be persisted.
  Mutated,
  /// A bound directory was picked.
  Selected(std::path::PathBuf),
}

impl Screen
{
  pub fn title(self) -> &'static str
  {
    match self
    {
      Screen::Select => "Select directory",
      Screen::Add => "Add directory",
      Screen::Delete => "Delete directory",
    }
  }

  /// Help text shown when the screen is entered.
  pub fn initial_help(self) -> &'static str
  {
    match self
    {
      Screen::Select => "Select a location using the key in brackets.",
      Screen::Add => "Add current directory by pressing a key.",
      Screen::Delete => "Delete a directory binding.",
    }
  }

  pub fn handle(
    self,
    key: char,
    locations: &mut LocationSet,
    starting_dir: &Path,
  ) -> Reaction
  {
    match self
    {
      Screen::Select => select(key, locations),
      Screen::Add => add(key, locations, starting_dir),
      Screen::Delete => delete(key, locations),
    }
  }
}

fn select(
  key: char,
  locations: &LocationSet,
) -> Reaction
{
  match locations.get(&key)
  {
    Some(path) => Reaction {
      help:    format!("Moving to {}.", path.display()),
      outcome: Outcome::Selected(path.clone()),
    },
    None => unbound(key),
  }
}

fn add(
  key: char,
  locations: &mut LocationSet,
  starting_dir: &Path,
) -> Reaction
{
  if !is_bindable_key(key)
  {
    return Reaction {
      help:    format!("Key {:?} cannot be bound.", key),
      outcome: Outcome::Unchanged,
    };
  }
  if !is_storable_path(starting_dir)
  {
    return Reaction {
      help:    "Current directory name cannot be stored in bindings.".to_string(),
      outcome: Outcome::Unchanged,
    };
  }
  if locations.contains_key(&key)
  {
    return Reaction {
      help:    format!("Key {} is already bound to a directory.", key),
      outcome: Outcome::Unchanged,
    };
  }
  locations.insert(key, starting_dir.to_path_buf());
  Reaction {
    help:    format!("Directory bound to {}.", key),
    outcome: Outcome::Mutated,
  }
}

fn delete(
  key: char,
  locations: &mut LocationSet,
) -> Reaction
{
  if locations.remove(&key).is_some()
  {
    Reaction {
      help:    format!("Deleted directory from {}.", key),
      outcome: Outcome::Mutated,
    }
  }
  else
  {
    unbound(key)
  }
}

fn unbound(key: char) -> Reaction
{
  Reaction {
    help:    format!("No directory bound to {}.", key),
    outcome: Outcome::Unchanged,
  }
}

#[cfg(test)]
mod tests
{
  use std::path::PathBuf;

  use super::*;

  fn set(pairs: &[(char, &str)]) -> LocationSet
  {
    pairs.iter().map(|(k, p)| (*k, PathBuf::from(p))).collect()
  }

  #[test]
  fn select_is_read_only()
  {
    let mut locs = set(&[('a', "/x")]);
    let r = Screen::Select.handle('a', &mut locs, Path::new("/start"));
    assert_eq!(r.outcome, Outcome::Selected(PathBuf::from("/x")));
    assert_eq!(locs, set(&[('a', "/x")]));
  }

  #[test]
  fn add_rejects_whitespace_key()
  {
    let mut locs = LocationSet::new();
    let r = Screen::Add.handle(' ', &mut locs, Path::new("/start"));
    assert_eq!(r.outcome, Outcome::Unchanged);
    assert!(locs.is_empty());
  }

  #[test]
  fn add_refuses_directory_with_line_break()
  {
    let mut locs = LocationSet::new();
    let r = Screen::Add.handle('a', &mut locs, Path::new("/tmp/two\nlines"));
    assert_eq!(r.outcome, Outcome::Unchanged);
    assert_eq!(r.help, "Current directory name cannot be stored in bindings.");
    assert!(locs.is_empty());
  }

  #[test]
  fn delete_unbound_reports_absence()
  {
    let mut locs = set(&[('b', "/y")]);
    let r = Screen::Delete.handle('a', &mut locs, Path::new("/start"));
    assert_eq!(r.outcome, Outcome::Unchanged);
    assert_eq!(r.help, "No directory bound to a.");
    assert_eq!(locs.len(), 1);
  }
}
