use std::{
  env,
  path::PathBuf,
  process,
};

use favdirs::{
  App,
  app,
  runtime,
  trace,
};

fn print_version()
{
  println!("favdirs {}", env!("CARGO_PKG_VERSION"));
}

fn print_help()
{
  println!(
    "Usage: favdirs [OPTIONS] [KEY]\n\n\
     Options:\n\
       -h, --help            Show this help and exit\n\
       -V, --version         Show version and exit\n\
       -l, --list            Print the current bindings and exit\n\
           --config-dir DIR  Use DIR as the config root (sets FAVDIRS_CONFIG_DIR)\n\
           --trace[=FILE]    Enable tracing to FILE (default /tmp/favdirs-trace.log)\n\
     Arguments:\n\
       KEY                   Bind the current directory to KEY and exit\n\n\
     Without KEY an interactive session starts; the chosen directory is\n\
     written to the selection file for the shell integration to pick up.\n"
  );
}

fn usage_error(msg: &str) -> !
{
  eprintln!("favdirs: {}", msg);
  print_help();
  process::exit(2);
}

fn fatal(
  context: &str,
  err: &dyn std::error::Error,
) -> !
{
  trace::log(format!("[error] {context}: {err}"));
  eprintln!("favdirs: {}: {}", context, err);
  process::exit(1);
}

fn current_dir() -> PathBuf
{
  match env::current_dir()
  {
    Ok(dir) => dir,
    Err(e) => fatal("cannot read current directory", &e),
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  trace::install_panic_hook();

  // Minimal argument parsing (avoid external deps)
  let mut args = env::args().skip(1);
  let mut positional: Vec<String> = Vec::new();
  let mut list = false;
  while let Some(a) = args.next()
  {
    match a.as_str()
    {
      "-h" | "--help" =>
      {
        print_help();
        return Ok(());
      }
      "-V" | "--version" =>
      {
        print_version();
        return Ok(());
      }
      "-l" | "--list" => list = true,
      s if s == "--trace" || s.starts_with("--trace=") =>
      {
        unsafe { env::set_var("FAVDIRS_TRACE", "1") };
        if let Some((_, file)) = s.split_once('=')
          && !file.is_empty()
        {
          unsafe { env::set_var("FAVDIRS_TRACE_FILE", file) };
        }
      }
      "--config-dir" => match args.next()
      {
        Some(dir) => unsafe { env::set_var("FAVDIRS_CONFIG_DIR", &dir) },
        None => usage_error("--config-dir requires a DIR argument"),
      },
      s if s.starts_with("--config-dir=") =>
      {
        if let Some((_, dir)) = s.split_once('=')
        {
          unsafe { env::set_var("FAVDIRS_CONFIG_DIR", dir) };
        }
      }
      "--" =>
      {
        positional.extend(args.by_ref());
        break;
      }
      s if s.starts_with('-') && s.chars().count() > 1 =>
      {
        usage_error(&format!("unknown option: {}", s))
      }
      other => positional.push(other.to_string()),
    }
  }
  if positional.len() > 1
  {
    usage_error("expected at most one KEY argument");
  }

  trace::log("[main] starting favdirs");
  let (config, store) = match app::load_settings()
  {
    Ok(settings) => settings,
    Err(e) => fatal("startup failed", &e),
  };

  if list
  {
    print!("{}", app::list_locations_text(&store.load()));
    return Ok(());
  }

  if let Some(arg) = positional.first()
  {
    let key = match app::parse_key_arg(arg)
    {
      Ok(k) => k,
      Err(e) => usage_error(&e.to_string()),
    };
    let dir = current_dir();
    if let Err(e) = app::add_location(&store, key, &dir)
    {
      fatal("error adding location", &e);
    }
    println!("Added location successfully.");
    return Ok(());
  }

  let starting_dir = current_dir();
  let mut app = App::new(store, config, starting_dir.clone());
  if let Err(e) = runtime::run_app(&mut app)
  {
    trace::log(format!("[error] runtime::run_app: {e}"));
    return Err(e);
  }
  if let Some(selected) = app.session().result()
    && selected != starting_dir
  {
    eprintln!("Moving to {}...", selected.display());
  }
  Ok(())
}
