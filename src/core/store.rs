//! Durable storage for bindings and the last selected directory.

use std::{
  fs,
  io::{
    self,
    Write,
  },
  path::{
    Path,
    PathBuf,
  },
};

use super::locations::{
  LocationSet,
  format_locations,
  parse_locations,
};

/// File name of the bindings artifact inside the state directory.
pub const LOCATIONS_FILE: &str = "locations";
/// File name of the selection artifact inside the state directory.
pub const SELECTED_FILE: &str = "select";

/// Reads and writes the two flat text artifacts.
///
/// Paths are resolved by the caller once at startup; the store never looks at
/// the environment.
#[derive(Debug, Clone)]
pub struct LocationStore
{
  locations_file: PathBuf,
  selected_file:  PathBuf,
}

impl LocationStore
{
  pub fn new(
    locations_file: PathBuf,
    selected_file: PathBuf,
  ) -> Self
  {
    Self { locations_file, selected_file }
  }

  /// Store rooted at `dir`, using the standard artifact names.
  pub fn in_dir(dir: &Path) -> Self
  {
    Self::new(dir.join(LOCATIONS_FILE), dir.join(SELECTED_FILE))
  }

  pub fn locations_file(&self) -> &Path
  {
    &self.locations_file
  }

  pub fn selected_file(&self) -> &Path
  {
    &self.selected_file
  }

  /// Load bindings. A missing or unreadable artifact yields an empty set.
  pub fn load(&self) -> LocationSet
  {
    match fs::read(&self.locations_file)
    {
      Ok(bytes) => parse_locations(&bytes),
      Err(e) =>
      {
        crate::trace::log(format!(
          "[store] no bindings loaded from {}: {}",
          self.locations_file.display(),
          e
        ));
        LocationSet::new()
      }
    }
  }

  /// Overwrite the bindings artifact with `locations`, sorted by key.
  pub fn save(
    &self,
    locations: &LocationSet,
  ) -> io::Result<()>
  {
    write_atomic(&self.locations_file, format_locations(locations).as_bytes())
  }

  /// Overwrite the selection artifact with the raw path bytes.
  pub fn save_selected(
    &self,
    path: &Path,
  ) -> io::Result<()>
  {
    write_atomic(&self.selected_file, path.as_os_str().as_encoded_bytes())
  }
}

// Write to a sibling temp file and rename over the target so readers never
// observe a partial artifact.
fn write_atomic(
  path: &Path,
  contents: &[u8],
) -> io::Result<()>
{
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent)?;
  }
  let mut tmp = path.to_path_buf();
  tmp.set_extension("tmp");
  let res = (|| -> io::Result<()> {
    let mut f = fs::File::create(&tmp)?;
    f.write_all(contents)?;
    f.flush()?;
    fs::rename(&tmp, path)
  })();
  if res.is_err()
  {
    let _ = fs::remove_file(&tmp);
  }
  res
}
