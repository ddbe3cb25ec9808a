use std::{
  cell::RefCell,
  fs,
  io,
  path::Path,
  rc::Rc,
};

use super::{
  Config,
  ConfigPaths,
  LuaEngine,
};

/// Execute the user's `init.lua` (if any) and return the resulting config.
pub fn load_config(paths: &ConfigPaths) -> io::Result<Config>
{
  if !paths.exists
  {
    crate::trace::log(format!(
      "[config] no init.lua at {}, using defaults",
      paths.entry.display()
    ));
    return Ok(Config::default());
  }
  let code = fs::read_to_string(&paths.entry)
    .map_err(|e| io_err(format!("read init.lua failed: {e}")))?;
  crate::trace::log(format!("[lua] exec user config: {}", paths.entry.display()));
  run_config(&code, &paths.entry.to_string_lossy(), &paths.root)
}

/// Evaluate configuration code directly; `root` anchors `require()`.
pub fn load_config_from_code(
  code: &str,
  root: Option<&Path>,
) -> io::Result<Config>
{
  let base = match root
  {
    Some(p) => p.to_path_buf(),
    None => std::env::current_dir()?,
  };
  run_config(code, "inline init.lua", &base)
}

fn run_config(
  code: &str,
  chunk_name: &str,
  root: &Path,
) -> io::Result<Config>
{
  let engine =
    LuaEngine::new().map_err(|e| io_err(format!("lua init failed: {e}")))?;
  let lua = engine.lua();
  let config_acc = Rc::new(RefCell::new(Config::default()));

  super::install_favdirs_api(lua, Rc::clone(&config_acc))?;
  super::install_require(lua, &root.join("lua"))
    .map_err(|e| io_err(format!("require install failed: {e}")))?;

  if let Err(e) = lua.load(code).set_name(chunk_name).exec()
  {
    crate::trace::log(format!("[lua] {} error: {}", chunk_name, e));
    return Err(io_err(format!("{chunk_name} execution failed: {e}")));
  }
  let cfg = config_acc.borrow().clone();
  Ok(cfg)
}

fn io_err(msg: String) -> io::Error
{
  io::Error::other(msg)
}
