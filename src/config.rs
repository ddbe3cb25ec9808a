//! Configuration discovery and Lua loading.
//!
//! Users configure favdirs through an optional `init.lua` that calls
//! `favdirs.config{...}`. The file runs in a sandboxed Lua state; the result
//! is a plain [`Config`] value and no Lua state outlives loading.

mod favdirs_api;
mod loader;
mod lua_engine;
mod paths;
mod require;
mod types;

pub(crate) use favdirs_api::install_favdirs_api;
pub use loader::{
  load_config,
  load_config_from_code,
};
pub use lua_engine::LuaEngine;
pub use paths::{
  ConfigPaths,
  discover_config_paths,
  expand_tilde,
  home_dir,
  resolve_state_dir,
};
pub(crate) use require::install_require;
pub use types::{
  Config,
  UiConfig,
  UiTheme,
};
