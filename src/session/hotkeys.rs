use crate::keymap::Key;

use super::Screen;

/// What a global hotkey asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction
{
  Cancel,
  Switch(Screen),
}

/// Global bindings evaluated before the active screen sees a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkeys
{
  pub cancel: Vec<Key>,
  pub add:    Key,
  pub delete: Key,
  pub select: Key,
}

impl Default for Hotkeys
{
  fn default() -> Self
  {
    Self {
      cancel: vec![Key::Esc, Key::Ctrl('c')],
      add:    Key::Ctrl('a'),
      delete: Key::Ctrl('d'),
      select: Key::Ctrl('s'),
    }
  }
}

impl Hotkeys
{
  pub fn lookup(
    &self,
    key: &Key,
  ) -> Option<GlobalAction>
  {
    if self.cancel.contains(key)
    {
      return Some(GlobalAction::Cancel);
    }
    if *key == self.add
    {
      return Some(GlobalAction::Switch(Screen::Add));
    }
    if *key == self.delete
    {
      return Some(GlobalAction::Switch(Screen::Delete));
    }
    if *key == self.select
    {
      return Some(GlobalAction::Switch(Screen::Select));
    }
    None
  }

  /// Hotkey that opens `screen`.
  pub fn switch_key(
    &self,
    screen: Screen,
  ) -> &Key
  {
    match screen
    {
      Screen::Select => &self.select,
      Screen::Add => &self.add,
      Screen::Delete => &self.delete,
    }
  }
}
