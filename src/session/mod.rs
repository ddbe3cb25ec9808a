//! Interactive session state machine.
//!
//! A [`Session`] owns the bindings snapshot, the active [`Screen`], the help
//! text and the directory the process started in. Key handling is pure with
//! respect to I/O: anything that has to reach disk is returned as an
//! [`Effect`] for the caller to run before the next key.

pub mod hotkeys;
pub mod screen;

use std::{
  fmt,
  path::{
    Path,
    PathBuf,
  },
};

pub use hotkeys::{
  GlobalAction,
  Hotkeys,
};
pub use screen::{
  Outcome,
  Reaction,
  Screen,
};

use crate::{
  core::LocationSet,
  keymap::Key,
};

/// Deferred persistence work produced by a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect
{
  /// Write this bindings snapshot to the bindings artifact.
  SaveLocations(LocationSet),
  /// Write the final selection. Emitted once, when the session ends.
  SaveSelected(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Session
{
  locations:    LocationSet,
  screen:       Screen,
  help:         String,
  starting_dir: PathBuf,
  hotkeys:      Hotkeys,
  result:       Option<PathBuf>,
}

impl Session
{
  pub fn new(
    locations: LocationSet,
    starting_dir: PathBuf,
    hotkeys: Hotkeys,
  ) -> Self
  {
    Self {
      locations,
      screen: Screen::Select,
      help: Screen::Select.initial_help().to_string(),
      starting_dir,
      hotkeys,
      result: None,
    }
  }

  pub fn locations(&self) -> &LocationSet
  {
    &self.locations
  }

  pub fn screen(&self) -> Screen
  {
    self.screen
  }

  pub fn help(&self) -> &str
  {
    &self.help
  }

  pub fn starting_dir(&self) -> &Path
  {
    &self.starting_dir
  }

  pub fn hotkeys(&self) -> &Hotkeys
  {
    &self.hotkeys
  }

  pub fn is_terminal(&self) -> bool
  {
    self.result.is_some()
  }

  /// The selected directory, set once the session is terminal.
  pub fn result(&self) -> Option<&Path>
  {
    self.result.as_deref()
  }

  /// Route one key. Global hotkeys win over the active screen. Keys arriving
  /// after the session ended are ignored.
  pub fn handle_key(
    &mut self,
    key: &Key,
  ) -> Option<Effect>
  {
    if self.is_terminal()
    {
      return None;
    }
    if let Some(action) = self.hotkeys.lookup(key)
    {
      crate::trace::log(format!("[session] global {} -> {:?}", key, action));
      return match action
      {
        GlobalAction::Cancel =>
        {
          let start = self.starting_dir.clone();
          Some(self.finish(start))
        }
        GlobalAction::Switch(screen) =>
        {
          self.switch_to(screen);
          None
        }
      };
    }
    let Key::Char(ch) = *key
    else
    {
      crate::trace::log(format!("[session] ignoring {}", key));
      return None;
    };
    let Reaction { help, outcome } =
      self.screen.handle(ch, &mut self.locations, &self.starting_dir);
    crate::trace::log(format!(
      "[session] {:?} '{}' -> {:?}",
      self.screen, ch, outcome
    ));
    self.help = help;
    match outcome
    {
      Outcome::Unchanged => None,
      Outcome::Mutated => Some(Effect::SaveLocations(self.locations.clone())),
      Outcome::Selected(path) => Some(self.finish(path)),
    }
  }

  pub fn switch_to(
    &mut self,
    screen: Screen,
  )
  {
    self.screen = screen;
    self.help = screen.initial_help().to_string();
  }

  /// Surface a failed bindings save. The in-memory set stays authoritative.
  pub fn report_save_error(
    &mut self,
    err: &dyn fmt::Display,
  )
  {
    self.help = format!("Failed to save locations: {}", err);
  }

  fn finish(
    &mut self,
    path: PathBuf,
  ) -> Effect
  {
    self.result = Some(path.clone());
    Effect::SaveSelected(path)
  }
}
