use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};
use std::{
  cell::RefCell,
  io,
  rc::Rc,
};

use super::{
  Config,
  expand_tilde,
};
use crate::keymap::Key;

fn parse_key(token: &str) -> mlua::Result<Key>
{
  Key::parse(token).ok_or_else(|| {
    LuaError::RuntimeError(format!("invalid key token '{}'", token))
  })
}

fn read_theme(
  t: &Table,
  theme: &mut super::UiTheme,
)
{
  let slots: [(&str, &mut Option<String>); 6] = [
    ("select_fg", &mut theme.select_fg),
    ("add_fg", &mut theme.add_fg),
    ("delete_fg", &mut theme.delete_fg),
    ("help_fg", &mut theme.help_fg),
    ("path_fg", &mut theme.path_fg),
    ("border_fg", &mut theme.border_fg),
  ];
  for (name, slot) in slots
  {
    if let Ok(s) = t.get::<String>(name)
    {
      *slot = Some(s);
    }
  }
}

/// Apply a `favdirs.config{...}` table onto `cfg`.
fn apply_config_table(
  t: &Table,
  cfg: &mut Config,
) -> mlua::Result<()>
{
  if let Ok(dir) = t.get::<String>("state_dir")
  {
    let expanded =
      expand_tilde(&dir).map_err(|e| LuaError::RuntimeError(e.to_string()))?;
    cfg.state_dir = Some(expanded);
  }

  if let Ok(keys) = t.get::<Table>("keys")
  {
    if let Ok(s) = keys.get::<String>("add")
    {
      cfg.keys.add = parse_key(&s)?;
    }
    if let Ok(s) = keys.get::<String>("delete")
    {
      cfg.keys.delete = parse_key(&s)?;
    }
    if let Ok(s) = keys.get::<String>("select")
    {
      cfg.keys.select = parse_key(&s)?;
    }
    match keys.get::<Value>("cancel")?
    {
      Value::String(s) =>
      {
        cfg.keys.cancel = vec![parse_key(&s.to_str()?)?];
      }
      Value::Table(list) =>
      {
        let mut cancel = Vec::new();
        for tok in list.sequence_values::<String>()
        {
          cancel.push(parse_key(&tok?)?);
        }
        if cancel.is_empty()
        {
          return Err(LuaError::RuntimeError(
            "keys.cancel must name at least one key".to_string(),
          ));
        }
        cfg.keys.cancel = cancel;
      }
      _ =>
      {}
    }
  }

  if let Ok(ui) = t.get::<Table>("ui")
  {
    if let Ok(w) = ui.get::<u16>("max_width")
    {
      cfg.ui.max_width = w.max(20);
    }
    if let Ok(theme) = ui.get::<Table>("theme")
    {
      read_theme(&theme, &mut cfg.ui.theme);
    }
  }
  Ok(())
}

/// Install the `favdirs` global table into `lua`.
pub(crate) fn install_favdirs_api(
  lua: &Lua,
  config_acc: Rc<RefCell<Config>>,
) -> io::Result<()>
{
  let favdirs: Table =
    lua.create_table().map_err(|e| io::Error::other(e.to_string()))?;

  // favdirs.config(tbl): merge fields into the accumulator
  let config_fn = lua
    .create_function(move |_, tbl: Value| {
      let Value::Table(t) = tbl
      else
      {
        return Err(LuaError::RuntimeError(
          "favdirs.config expects a table".to_string(),
        ));
      };
      let mut cfg = config_acc
        .try_borrow_mut()
        .map_err(|e| LuaError::RuntimeError(e.to_string()))?;
      apply_config_table(&t, &mut cfg)?;
      Ok(true)
    })
    .map_err(|e| io::Error::other(e.to_string()))?;

  favdirs.set("config", config_fn).map_err(|e| io::Error::other(e.to_string()))?;
  lua
    .globals()
    .set("favdirs", favdirs)
    .map_err(|e| io::Error::other(e.to_string()))?;
  Ok(())
}
