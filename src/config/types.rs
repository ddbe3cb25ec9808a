use std::path::PathBuf;

use crate::session::Hotkeys;

#[derive(Debug, Clone, Default, PartialEq)]
/// Top-level configuration composed from Lua input.
pub struct Config
{
  /// Directory holding the bindings and selection artifacts.
  pub state_dir: Option<PathBuf>,
  pub keys:      Hotkeys,
  pub ui:        UiConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig
{
  /// Upper bound for the width of the centered box.
  pub max_width: u16,
  pub theme:     UiTheme,
}

impl Default for UiConfig
{
  fn default() -> Self
  {
    Self { max_width: 70, theme: UiTheme::default() }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Theme colours for the UI. Fields are optional and fall back to defaults.
pub struct UiTheme
{
  pub select_fg: Option<String>,
  pub add_fg:    Option<String>,
  pub delete_fg: Option<String>,
  pub help_fg:   Option<String>,
  pub path_fg:   Option<String>,
  pub border_fg: Option<String>,
}
