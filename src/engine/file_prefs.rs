use log::warn;
use serde_json::{from_str as from_json, to_string as to_json};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::Prefs;

#[derive(Debug, Error)]
pub enum PrefsError {
  #[error("could not read {path}: {source}")]
  Read { path: PathBuf, source: io::Error },
  #[error("could not parse {path}: {source}")]
  Parse {
    path: PathBuf,
    source: serde_json::Error,
  },
}

/// Flat preference file: one JSON object mapping keys to stored strings,
/// read as a whole at startup and rewritten as a whole on every save.
#[derive(Debug)]
pub struct FilePrefs {
  path: PathBuf,
  values: HashMap<String, String>,
}

impl FilePrefs {
  /// Opens the preference file, treating a missing file as an empty map. A
  /// file that exists but cannot be read or parsed is an error: writing over
  /// a half-read map would drop stored values.
  pub fn open(path: PathBuf) -> Result<Self, PrefsError> {
    let values = match fs::read_to_string(&path) {
      Ok(text) => from_json(&text).map_err(|source| PrefsError::Parse {
        path: path.clone(),
        source,
      })?,
      Err(source) if source.kind() == io::ErrorKind::NotFound => HashMap::new(),
      Err(source) => return Err(PrefsError::Read { path, source }),
    };
    Ok(Self { path, values })
  }
}

impl Prefs for FilePrefs {
  fn load(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  fn save(&mut self, key: &str, value: &str) {
    self.values.insert(key.into(), value.into());
    match to_json(&self.values) {
      Ok(text) => {
        if let Err(e) = fs::write(&self.path, text) {
          warn!("could not write {}: {e}", self.path.display());
        }
      }
      Err(e) => warn!("could not serialize preferences: {e}"),
    }
  }
}

#[cfg(test)]
mod test {
  use super::{FilePrefs, Prefs};
  use std::fs;

  #[test]
  fn missing_file_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = FilePrefs::open(dir.path().join("prefs.json")).unwrap();
    assert_eq!(prefs.load("TaskList"), None);
  }

  #[test]
  fn saved_values_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let mut prefs = FilePrefs::open(path.clone()).unwrap();
    prefs.save("TaskList", "[]");
    prefs.save("other", "x");
    let reopened = FilePrefs::open(path).unwrap();
    assert_eq!(reopened.load("TaskList").as_deref(), Some("[]"));
    assert_eq!(reopened.load("other").as_deref(), Some("x"));
  }

  #[test]
  fn save_replaces_the_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let mut prefs = FilePrefs::open(path.clone()).unwrap();
    prefs.save("TaskList", "[]");
    prefs.save("TaskList", "[1]");
    let reopened = FilePrefs::open(path).unwrap();
    assert_eq!(reopened.load("TaskList").as_deref(), Some("[1]"));
  }

  #[test]
  fn unparseable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "not a preference map").unwrap();
    assert!(FilePrefs::open(path).is_err());
  }
}
