use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Error as FmtError, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Eq, Hash, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct TodoId(pub u64);

impl Display for TodoId {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    self.0.fmt(formatter)
  }
}

impl FromStr for TodoId {
  type Err = ParseIntError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse().map(Self)
  }
}

/// One entry of the to-do list. Entries are value records: an update
/// replaces the record with a copy at the same position, fields are never
/// mutated in place.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
  pub id: TodoId,
  pub task_name: String,
  pub is_done: bool,
}
