//! Application state shared by the TUI runtime, the CLI and tests.
//!
//! [`App`] wires a [`LocationStore`] to a [`Session`] and runs the effects the
//! session produces, one at a time, before the next key is accepted.

use std::{
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use crate::{
  config::Config,
  core::{
    LocationSet,
    LocationStore,
    is_bindable_key,
    is_storable_path,
  },
  keymap::Key,
  session::{
    Effect,
    Session,
  },
};

/// Mutable application state driving the interactive session.
pub struct App
{
  pub(crate) session:           Session,
  pub(crate) store:             LocationStore,
  pub(crate) config:            Config,
  pub(crate) force_full_redraw: bool,
}

impl App
{
  /// Build an app over `store`, loading bindings once. A missing bindings
  /// artifact starts the session with no bindings.
  pub fn new(
    store: LocationStore,
    config: Config,
    starting_dir: PathBuf,
  ) -> Self
  {
    let locations = store.load();
    crate::trace::log(format!(
      "[app] loaded {} binding(s) from {}; starting in {}",
      locations.len(),
      store.locations_file().display(),
      starting_dir.display()
    ));
    let session = Session::new(locations, starting_dir, config.keys.clone());
    Self { session, store, config, force_full_redraw: false }
  }

  pub fn session(&self) -> &Session
  {
    &self.session
  }

  pub fn store(&self) -> &LocationStore
  {
    &self.store
  }

  pub fn config(&self) -> &Config
  {
    &self.config
  }

  /// Feed one key through the session and run the resulting effect.
  ///
  /// Returns `Ok(true)` once the session is terminal. Errors only come from
  /// writing the final selection; failed binding saves are shown as help text.
  pub fn handle_key(
    &mut self,
    key: &Key,
  ) -> io::Result<bool>
  {
    if let Some(effect) = self.session.handle_key(key)
    {
      self.apply_effect(effect)?;
    }
    Ok(self.session.is_terminal())
  }

  pub(crate) fn apply_effect(
    &mut self,
    effect: Effect,
  ) -> io::Result<()>
  {
    match effect
    {
      Effect::SaveLocations(locations) =>
      {
        match self.store.save(&locations)
        {
          Ok(()) => crate::trace::log(format!(
            "[effect] saved {} binding(s)",
            locations.len()
          )),
          Err(e) =>
          {
            crate::trace::log(format!("[effect] save locations failed: {e}"));
            self.session.report_save_error(&e);
          }
        }
        Ok(())
      }
      Effect::SaveSelected(path) =>
      {
        crate::trace::log(format!("[effect] save selected {}", path.display()));
        self.store.save_selected(&path).map_err(|e| {
          io::Error::new(
            e.kind(),
            format!(
              "failed to write selection to {}: {}",
              self.store.selected_file().display(),
              e
            ),
          )
        })
      }
    }
  }
}

/// Resolve configuration and the state directory once at startup.
///
/// Config errors are reported and defaults are used; failing to resolve or
/// create the state directory is fatal.
pub fn load_settings() -> io::Result<(Config, LocationStore)>
{
  let config = match crate::config::discover_config_paths()
  {
    Ok(paths) => match crate::config::load_config(&paths)
    {
      Ok(cfg) => cfg,
      Err(e) =>
      {
        eprintln!("favdirs: config load error: {}", e);
        Config::default()
      }
    },
    Err(e) =>
    {
      crate::trace::log(format!("[config] discovery failed: {e}"));
      Config::default()
    }
  };
  let state_dir = crate::config::resolve_state_dir(config.state_dir.as_deref())?;
  fs::create_dir_all(&state_dir).map_err(|e| {
    io::Error::new(
      e.kind(),
      format!("cannot create state directory {}: {}", state_dir.display(), e),
    )
  })?;
  crate::trace::log(format!("[app] state dir {}", state_dir.display()));
  Ok((config, LocationStore::in_dir(&state_dir)))
}

/// Validate a key given on the command line.
pub fn parse_key_arg(arg: &str) -> io::Result<char>
{
  let mut chars = arg.chars();
  match (chars.next(), chars.next())
  {
    (Some(ch), None) if is_bindable_key(ch) => Ok(ch),
    _ => Err(io::Error::new(
      io::ErrorKind::InvalidInput,
      format!("keybind must be a single character, got '{}'", arg),
    )),
  }
}

/// Bind `dir` to `key` without a session, overwriting any existing binding,
/// and record `dir` as the selection.
pub fn add_location(
  store: &LocationStore,
  key: char,
  dir: &Path,
) -> io::Result<LocationSet>
{
  if !is_storable_path(dir)
  {
    return Err(io::Error::new(
      io::ErrorKind::InvalidData,
      format!(
        "directory {} is not valid UTF-8 or contains a line break",
        dir.display()
      ),
    ));
  }
  let mut locations = store.load();
  if let Some(old) = locations.insert(key, dir.to_path_buf())
  {
    crate::trace::log(format!(
      "[app] replacing binding {} ({})",
      key,
      old.display()
    ));
  }
  store.save(&locations)?;
  store.save_selected(dir)?;
  Ok(locations)
}

/// Text listing for `--list`.
pub fn list_locations_text(locations: &LocationSet) -> String
{
  let mut out = String::new();
  for (key, path) in locations
  {
    out.push_str(&format!("[{}] {}\n", key, path.display()));
  }
  if out.is_empty()
  {
    out.push_str("<no locations>\n");
  }
  out
}
