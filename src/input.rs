//! Input handling for keyboard events.

use std::io;

use crossterm::event::{
  KeyEvent,
  KeyEventKind,
};

use crate::{
  app::App,
  keymap::Key,
};

/// Accept a terminal key event and route it through the [`App`].
///
/// Returns `Ok(true)` when the session has ended and the caller should exit.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  // Ignore key release/repeat events to avoid double-processing (esp. on
  // Windows)
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }
  match Key::from_event(&key)
  {
    Some(k) => app.handle_key(&k),
    None => Ok(false),
  }
}
