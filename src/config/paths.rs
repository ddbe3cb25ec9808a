use std::{
  env,
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
};

/// Resolved configuration locations for favdirs.
#[derive(Debug, Clone)]
pub struct ConfigPaths
{
  pub root:   PathBuf,
  pub entry:  PathBuf,
  pub exists: bool,
}

fn non_empty_var(key: &str) -> Option<String>
{
  env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Discover the effective configuration directory and entry point.
///
/// Checks `FAVDIRS_CONFIG_DIR`, then `XDG_CONFIG_HOME/favdirs`.
///
/// Platform-specific fallbacks:
/// - Unix: `~/.config/favdirs`
/// - Windows: `%LOCALAPPDATA%\\favdirs`, then `%APPDATA%\\favdirs`, then
///   `%USERPROFILE%\\.config\\favdirs`
pub fn discover_config_paths() -> io::Result<ConfigPaths>
{
  let root = if let Some(over) = non_empty_var("FAVDIRS_CONFIG_DIR")
  {
    PathBuf::from(over)
  }
  else if let Some(xdg) = non_empty_var("XDG_CONFIG_HOME")
  {
    Path::new(&xdg).join("favdirs")
  }
  else
  {
    #[cfg(windows)]
    {
      if let Some(local) = non_empty_var("LOCALAPPDATA")
      {
        Path::new(&local).join("favdirs")
      }
      else if let Some(app) = non_empty_var("APPDATA")
      {
        Path::new(&app).join("favdirs")
      }
      else
      {
        home_dir()?.join(".config").join("favdirs")
      }
    }
    #[cfg(not(windows))]
    {
      home_dir()?.join(".config").join("favdirs")
    }
  };

  let entry = root.join("init.lua");
  let exists = fs::metadata(&entry).map(|m| m.is_file()).unwrap_or(false);
  Ok(ConfigPaths { root, entry, exists })
}

/// The user's home directory from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> io::Result<PathBuf>
{
  #[cfg(windows)]
  let var = non_empty_var("USERPROFILE").or_else(|| non_empty_var("HOME"));
  #[cfg(not(windows))]
  let var = non_empty_var("HOME");
  var.map(PathBuf::from).ok_or_else(|| {
    io::Error::new(io::ErrorKind::NotFound, "cannot resolve home directory")
  })
}

/// Expand a leading `~` against the home directory.
pub fn expand_tilde(path: &str) -> io::Result<PathBuf>
{
  if path == "~"
  {
    return home_dir();
  }
  if let Some(rest) = path.strip_prefix("~/")
  {
    return Ok(home_dir()?.join(rest));
  }
  Ok(PathBuf::from(path))
}

/// Pick the state directory: `FAVDIRS_STATE_DIR`, then the configured
/// `state_dir`, then `~/.favdirs`.
pub fn resolve_state_dir(configured: Option<&Path>) -> io::Result<PathBuf>
{
  if let Some(dir) = non_empty_var("FAVDIRS_STATE_DIR")
  {
    return expand_tilde(&dir);
  }
  if let Some(dir) = configured
  {
    return Ok(dir.to_path_buf());
  }
  Ok(home_dir()?.join(".favdirs"))
}
