use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use crossterm::event::{
  Event,
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};
use favdirs::{
  App,
  config::Config,
  core::LocationStore,
  runtime_util::process_event,
  session::Screen,
};

fn press(code: KeyCode) -> Event
{
  Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> Event
{
  Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn app_in(
  dir: &Path,
  bindings: &str,
  start: &str,
) -> App
{
  fs::write(dir.join("locations"), bindings).unwrap();
  App::new(LocationStore::in_dir(dir), Config::default(), PathBuf::from(start))
}

mod session_scenarios
{
  use super::*;

  #[test]
  fn selecting_a_binding_writes_the_selection_artifact()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(
      tmp.path(),
      "a=/home/u/proj\nb=/home/u/docs\n",
      "/somewhere",
    );
    let done = process_event(&mut app, press(KeyCode::Char('a'))).unwrap();
    assert!(done);
    assert_eq!(app.session().result(), Some(Path::new("/home/u/proj")));
    assert_eq!(
      fs::read_to_string(tmp.path().join("select")).unwrap(),
      "/home/u/proj"
    );
  }

  #[test]
  fn adding_into_empty_store_persists_immediately()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(tmp.path(), "", "/tmp/work");
    assert!(!process_event(&mut app, ctrl('a')).unwrap());
    assert_eq!(app.session().screen(), Screen::Add);
    assert!(!process_event(&mut app, press(KeyCode::Char('z'))).unwrap());
    assert_eq!(
      fs::read_to_string(tmp.path().join("locations")).unwrap(),
      "z=/tmp/work\n"
    );
    assert_eq!(app.session().locations().len(), 1);
  }

  #[test]
  fn deleting_a_binding_persists_immediately()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(tmp.path(), "a=/x\nb=/y\n", "/start");
    process_event(&mut app, ctrl('d')).unwrap();
    process_event(&mut app, press(KeyCode::Char('a'))).unwrap();
    assert_eq!(
      fs::read_to_string(tmp.path().join("locations")).unwrap(),
      "b=/y\n"
    );
  }

  #[test]
  fn escape_selects_the_starting_directory()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(tmp.path(), "a=/x\n", "/start/here");
    process_event(&mut app, ctrl('a')).unwrap();
    assert!(process_event(&mut app, press(KeyCode::Esc)).unwrap());
    assert_eq!(
      fs::read_to_string(tmp.path().join("select")).unwrap(),
      "/start/here"
    );
    // nothing was edited, so the bindings artifact is untouched
    assert_eq!(
      fs::read_to_string(tmp.path().join("locations")).unwrap(),
      "a=/x\n"
    );
  }

  #[test]
  fn unbound_select_does_not_touch_selection_artifact()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(tmp.path(), "a=/x\n", "/start");
    assert!(!process_event(&mut app, press(KeyCode::Char('n'))).unwrap());
    assert!(!tmp.path().join("select").exists());
  }

  #[test]
  fn missing_bindings_artifact_starts_empty()
  {
    let tmp = tempfile::tempdir().unwrap();
    let app = App::new(
      LocationStore::in_dir(tmp.path()),
      Config::default(),
      PathBuf::from("/start"),
    );
    assert!(app.session().locations().is_empty());
  }

  #[test]
  fn release_events_and_resizes_are_ignored()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(tmp.path(), "a=/x\n", "/start");
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert!(!process_event(&mut app, Event::Key(release)).unwrap());
    assert!(!process_event(&mut app, Event::Resize(80, 24)).unwrap());
    assert!(!app.session().is_terminal());
  }
}

mod save_failures
{
  use super::*;

  #[test]
  fn failed_save_surfaces_as_help_and_session_continues()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(tmp.path(), "a=/x\n", "/start");
    fs::create_dir(tmp.path().join("locations.tmp")).unwrap();

    process_event(&mut app, ctrl('a')).unwrap();
    let done = process_event(&mut app, press(KeyCode::Char('b'))).unwrap();
    assert!(!done);
    assert!(
      app.session().help().starts_with("Failed to save locations:"),
      "help was: {}",
      app.session().help()
    );
    // in-memory state is authoritative, the file is unchanged
    assert_eq!(app.session().locations().len(), 2);
    assert_eq!(
      fs::read_to_string(tmp.path().join("locations")).unwrap(),
      "a=/x\n"
    );

    // retrying after the obstruction is gone succeeds
    fs::remove_dir(tmp.path().join("locations.tmp")).unwrap();
    process_event(&mut app, ctrl('d')).unwrap();
    process_event(&mut app, press(KeyCode::Char('b'))).unwrap();
    assert_eq!(app.session().help(), "Deleted directory from b.");
    assert_eq!(
      fs::read_to_string(tmp.path().join("locations")).unwrap(),
      "a=/x\n"
    );
  }

  #[test]
  fn failed_selection_write_is_an_error()
  {
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app_in(tmp.path(), "a=/x\n", "/start");
    fs::create_dir(tmp.path().join("select.tmp")).unwrap();
    let res = process_event(&mut app, press(KeyCode::Char('a')));
    assert!(res.is_err());
  }
}

mod non_interactive
{
  use super::*;
  use favdirs::app::{
    add_location,
    list_locations_text,
    parse_key_arg,
  };

  #[test]
  fn add_binds_directory_and_records_selection()
  {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocationStore::in_dir(tmp.path());
    fs::write(store.locations_file(), "a=/old\nb=/y\n").unwrap();
    let locs = add_location(&store, 'a', Path::new("/new/place")).unwrap();
    assert_eq!(locs.get(&'a'), Some(&PathBuf::from("/new/place")));
    assert_eq!(
      fs::read_to_string(store.locations_file()).unwrap(),
      "a=/new/place\nb=/y\n"
    );
    assert_eq!(
      fs::read_to_string(store.selected_file()).unwrap(),
      "/new/place"
    );
  }

  #[test]
  fn add_without_existing_artifact()
  {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocationStore::in_dir(tmp.path());
    add_location(&store, 'w', Path::new("/w")).unwrap();
    assert_eq!(fs::read_to_string(store.locations_file()).unwrap(), "w=/w\n");
  }

  #[test]
  fn add_keeps_bindings_around_an_undecodable_line()
  {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocationStore::in_dir(tmp.path());
    fs::write(
      store.locations_file(),
      b"a=/home/u/proj\nb=/home/u/docs\nc=/mnt/\xff\n",
    )
    .unwrap();
    add_location(&store, 'd', Path::new("/srv/d")).unwrap();
    assert_eq!(
      fs::read_to_string(store.locations_file()).unwrap(),
      "a=/home/u/proj\nb=/home/u/docs\nd=/srv/d\n"
    );
  }

  #[test]
  fn add_refuses_directory_that_cannot_be_stored()
  {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocationStore::in_dir(tmp.path());
    fs::write(store.locations_file(), "a=/x\n").unwrap();
    let err = add_location(&store, 'b', Path::new("/tmp/two\nlines")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert_eq!(fs::read_to_string(store.locations_file()).unwrap(), "a=/x\n");
    assert!(!store.selected_file().exists());
  }

  #[test]
  fn key_argument_must_be_one_character()
  {
    assert_eq!(parse_key_arg("a").unwrap(), 'a');
    assert_eq!(parse_key_arg("ü").unwrap(), 'ü');
    assert!(parse_key_arg("").is_err());
    assert!(parse_key_arg("ab").is_err());
    assert!(parse_key_arg(" ").is_err());
    assert_eq!(
      parse_key_arg("xy").unwrap_err().kind(),
      std::io::ErrorKind::InvalidInput
    );
  }

  #[test]
  fn list_text()
  {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocationStore::in_dir(tmp.path());
    assert_eq!(list_locations_text(&store.load()), "<no locations>\n");
    fs::write(store.locations_file(), "b=/y\na=/x\n").unwrap();
    assert_eq!(list_locations_text(&store.load()), "[a] /x\n[b] /y\n");
  }
}

#[cfg(unix)]
mod non_utf8_directories
{
  use std::{
    ffi::OsStr,
    os::unix::ffi::OsStrExt,
  };

  use super::*;

  #[test]
  fn add_screen_leaves_bindings_alone_and_cancel_keeps_raw_bytes()
  {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("locations"), "a=/x\n").unwrap();
    let start = PathBuf::from(OsStr::from_bytes(b"/tmp/caf\xe9"));
    let mut app =
      App::new(LocationStore::in_dir(tmp.path()), Config::default(), start);
    process_event(&mut app, ctrl('a')).unwrap();
    let done = process_event(&mut app, press(KeyCode::Char('b'))).unwrap();
    assert!(!done);
    assert_eq!(
      fs::read_to_string(tmp.path().join("locations")).unwrap(),
      "a=/x\n"
    );
    assert!(process_event(&mut app, press(KeyCode::Esc)).unwrap());
    assert_eq!(fs::read(tmp.path().join("select")).unwrap(), b"/tmp/caf\xe9");
  }
}
