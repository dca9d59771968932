mod data;
mod file_prefs;
mod mem_prefs;
mod prefs;
mod store;
mod watch;

pub use data::{TodoId, TodoItem};
pub use file_prefs::{FilePrefs, PrefsError};
pub use mem_prefs::MemPrefs;
pub use prefs::Prefs;
pub use store::{DecodeError, TodoStore, TASKS_KEY};
pub use watch::Notifier;
