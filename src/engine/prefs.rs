/// Key-value persistence capability injected into the store.
///
/// `save` replaces any previous value under the key and is fire-and-forget:
/// implementations deal with their own write failures, callers never observe
/// them.
pub trait Prefs {
  fn load(&self, key: &str) -> Option<String>;
  fn save(&mut self, key: &str, value: &str);
}
