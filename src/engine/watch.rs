use std::fmt::{Debug, Error as FmtError, Formatter};

/// Invalidation fan-out for the rendering layer: listeners are told that
/// something changed and re-read the store's snapshot themselves. No
/// payload, no unsubscribe.
#[derive(Default)]
pub struct Notifier {
  listeners: Vec<Box<dyn FnMut()>>,
}

impl Debug for Notifier {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    formatter
      .debug_struct("Notifier")
      .field("listeners", &self.listeners.len())
      .finish()
  }
}

impl Notifier {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
    self.listeners.push(Box::new(listener));
  }

  pub fn notify(&mut self) {
    for listener in &mut self.listeners {
      listener();
    }
  }
}

#[cfg(test)]
mod test {
  use super::Notifier;
  use std::cell::Cell;
  use std::rc::Rc;

  #[test]
  fn every_listener_runs_on_notify() {
    let mut notifier = Notifier::new();
    let count = Rc::new(Cell::new(0));
    for _ in 0..2 {
      let count = Rc::clone(&count);
      notifier.subscribe(move || count.set(count.get() + 1));
    }
    notifier.notify();
    assert_eq!(count.get(), 2);
    notifier.notify();
    assert_eq!(count.get(), 4);
  }
}
