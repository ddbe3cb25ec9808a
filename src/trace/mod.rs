//! Opt-in file logging.
//!
//! Enabled by `FAVDIRS_TRACE`. [`log`] only ever appends to the trace file;
//! the terminal is in raw mode while a session runs.

use std::{
  fs::OpenOptions,
  io::Write,
  path::PathBuf,
};

use chrono::Local;

fn enabled() -> bool
{
  std::env::var("FAVDIRS_TRACE")
    .map(|v| !v.is_empty() && v != "0")
    .unwrap_or(false)
}

pub fn log<S: AsRef<str>>(s: S)
{
  if !enabled()
  {
    return;
  }
  let line = format!(
    "{} {}\n",
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
    s.as_ref()
  );
  let _ = OpenOptions::new()
    .create(true)
    .append(true)
    .open(file_path())
    .and_then(|mut f| f.write_all(line.as_bytes()));
}

/// Install a panic hook that logs panic message, location, and backtrace
/// to the trace log and restores the terminal so the panic is visible.
pub fn install_panic_hook()
{
  std::panic::set_hook(Box::new(|info| {
    let msg = if let Some(s) = info.payload().downcast_ref::<&str>()
    {
      s.to_string()
    }
    else if let Some(s) = info.payload().downcast_ref::<String>()
    {
      s.clone()
    }
    else
    {
      String::from("<non-string panic payload>")
    };
    let loc = info
      .location()
      .map(|l| format!("{}:{}", l.file(), l.line()))
      .unwrap_or_else(|| "<unknown>".to_string());
    let bt = std::backtrace::Backtrace::force_capture();
    log(format!("[panic] {msg} @ {loc}"));
    log(format!("[panic] backtrace:\n{bt}"));
    let _ = crossterm::terminal::disable_raw_mode();
    let mut out = std::io::stdout();
    let _ =
      crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen);
    eprintln!("favdirs: panic: {msg} @ {loc}");
  }));
}

fn file_path() -> PathBuf
{
  if let Ok(fp) = std::env::var("FAVDIRS_TRACE_FILE")
    && !fp.is_empty()
  {
    return PathBuf::from(fp);
  }
  if let Ok(tmp) = std::env::var("TMPDIR")
    && !tmp.is_empty()
  {
    return PathBuf::from(tmp).join("favdirs-trace.log");
  }
  PathBuf::from("/tmp/favdirs-trace.log")
}
