use std::collections::HashMap;

use super::Prefs;

/// In-memory preference map, mostly for tests.
#[derive(Debug, Default)]
pub struct MemPrefs {
  values: HashMap<String, String>,
}

impl MemPrefs {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

impl Prefs for MemPrefs {
  fn load(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  fn save(&mut self, key: &str, value: &str) {
    self.values.insert(key.into(), value.into());
  }
}
