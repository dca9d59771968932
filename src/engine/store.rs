use log::{debug, warn};
use serde_json::{from_str as from_json, to_string as to_json};
use thiserror::Error;

use super::{Notifier, Prefs, TodoId, TodoItem};

/// Preference key the serialized task list is stored under.
pub const TASKS_KEY: &str = "TaskList";

/// The persisted task list could not be decoded. Fatal at startup: a corrupt
/// list cannot be partially salvaged, and starting over instead would throw
/// away the stored entries on the next write.
#[derive(Debug, Error)]
#[error("stored task list is not readable: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// State and persistence core of the to-do list.
///
/// Owns the ordered task collection, the pending "new task" text and the
/// edit session, and mirrors the whole collection to the injected [`Prefs`]
/// after every change to it. All operations run to completion on the calling
/// thread; the rendering layer drives them one at a time and re-reads the
/// snapshot whenever a subscribed listener fires.
///
/// Operations referring to an id that is no longer in the collection do
/// nothing, as does adding or renaming with blank text.
#[derive(Debug)]
pub struct TodoStore<P: Prefs> {
  prefs: P,
  items: Vec<TodoItem>,
  last_id: u64,
  pending_text: String,
  editing_id: Option<TodoId>,
  edit_draft: String,
  notifier: Notifier,
}

fn sample_items() -> Vec<TodoItem> {
  vec![
    TodoItem {
      id: TodoId(1),
      task_name: "Buy milk".into(),
      is_done: true,
    },
    TodoItem {
      id: TodoId(2),
      task_name: "Walk the dog".into(),
      is_done: false,
    },
    TodoItem {
      id: TodoId(3),
      task_name: "Learn ViewModels".into(),
      is_done: false,
    },
  ]
}

impl<P: Prefs> TodoStore<P> {
  /// Reads the stored task list from `prefs`, seeding a small sample list if
  /// nothing was ever stored. The id counter continues above the highest
  /// stored id, so restarting never hands out an id a stored entry already
  /// uses.
  pub fn new(prefs: P) -> Result<Self, DecodeError> {
    let (items, last_id) = match prefs.load(TASKS_KEY) {
      Some(stored) => {
        let items: Vec<TodoItem> = from_json(&stored)?;
        let last_id = items.iter().map(|item| item.id.0).max().unwrap_or(0);
        debug!("loaded {} stored tasks", items.len());
        (items, last_id)
      }
      None => {
        debug!("no stored tasks, seeding the sample list");
        (sample_items(), 3)
      }
    };
    Ok(Self {
      prefs,
      items,
      last_id,
      pending_text: String::new(),
      editing_id: None,
      edit_draft: String::new(),
      notifier: Notifier::new(),
    })
  }

  #[must_use]
  pub fn items(&self) -> &[TodoItem] {
    &self.items
  }

  #[must_use]
  pub fn pending_text(&self) -> &str {
    &self.pending_text
  }

  #[must_use]
  pub const fn editing_id(&self) -> Option<TodoId> {
    self.editing_id
  }

  #[must_use]
  pub fn edit_draft(&self) -> &str {
    &self.edit_draft
  }

  #[must_use]
  pub const fn prefs(&self) -> &P {
    &self.prefs
  }

  /// Registers an invalidation listener, fired once after every observable
  /// change.
  pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
    self.notifier.subscribe(listener);
  }

  pub fn set_pending_text(&mut self, text: String) {
    if self.pending_text != text {
      self.pending_text = text;
      self.notifier.notify();
    }
  }

  /// Appends a task for the pending text and clears the input. Blank input
  /// is ignored; anything else is stored exactly as typed.
  pub fn add_task(&mut self) {
    if self.pending_text.trim().is_empty() {
      return;
    }
    self.last_id += 1;
    let item = TodoItem {
      id: TodoId(self.last_id),
      task_name: std::mem::take(&mut self.pending_text),
      is_done: false,
    };
    self.items.push(item);
    self.persist();
    self.notifier.notify();
  }

  pub fn remove_task(&mut self, id: TodoId) {
    let before = self.items.len();
    self.items.retain(|item| item.id != id);
    if self.items.len() != before {
      self.persist();
      self.notifier.notify();
    }
  }

  /// Flips the done flag of the given task, keeping its position.
  pub fn toggle_done(&mut self, id: TodoId) {
    if let Some(index) = self.items.iter().position(|item| item.id == id) {
      let updated = TodoItem {
        is_done: !self.items[index].is_done,
        ..self.items[index].clone()
      };
      self.items[index] = updated;
      self.persist();
      self.notifier.notify();
    }
  }

  /// Starts renaming the given task, seeding the draft with its current
  /// name. An edit already in progress is dropped uncommitted.
  pub fn begin_edit(&mut self, id: TodoId) {
    if let Some(item) = self.items.iter().find(|item| item.id == id) {
      self.editing_id = Some(id);
      self.edit_draft = item.task_name.clone();
      self.notifier.notify();
    }
  }

  pub fn update_edit_draft(&mut self, text: String) {
    if self.editing_id.is_some() && self.edit_draft != text {
      self.edit_draft = text;
      self.notifier.notify();
    }
  }

  /// Applies the draft to the edited task. A blank draft keeps the old name,
  /// and the draft is not trimmed before storing; either way the edit
  /// session ends.
  pub fn commit_edit(&mut self) {
    let Some(id) = self.editing_id else {
      return;
    };
    self.editing_id = None;
    let draft = std::mem::take(&mut self.edit_draft);
    if !draft.trim().is_empty() {
      if let Some(index) = self.items.iter().position(|item| item.id == id) {
        let updated = TodoItem {
          task_name: draft,
          ..self.items[index].clone()
        };
        self.items[index] = updated;
        self.persist();
      }
    }
    self.notifier.notify();
  }

  fn persist(&mut self) {
    match to_json(&self.items) {
      Ok(serialized) => self.prefs.save(TASKS_KEY, &serialized),
      Err(e) => warn!("could not serialize the task list: {e}"),
    }
  }
}
