use serde::{Deserialize, Serialize};
use crate::item::Course;

/// Raw input of the add-dish form. `course` and `price` are kept as entered
/// and only interpreted by `OrderState::add_dish`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AddDishParam {
  pub name: String,
  pub description: String,
  pub course: String,
  pub price: String,
}

impl Default for AddDishParam {
  fn default() -> Self {
    AddDishParam {
      name: "".to_string(),
      description: "".to_string(),
      course: Course::Starters.name().to_string(),
      price: "".to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddAllOutcome {
  NothingAdded,
  Added(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
  NothingToClear,
  Cleared(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
  Enabled,
  Disabled,
  // would have left no course selected
  Refused,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_partial_json_fills_defaults() {
    let p: AddDishParam = serde_json::from_str(r#"{"name":"SOUP","price":"12.50"}"#).unwrap();
    assert_eq!("SOUP", p.name);
    assert_eq!("", p.description);
    assert_eq!("Starters", p.course);
    assert_eq!("12.50", p.price);
  }
}
