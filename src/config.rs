use serde::{Deserialize, Serialize};
use crate::item::Course;
use std::{
  fmt,
  fs,
  io,
  path::Path,
};

/// Where a newly added dish lands in the catalog.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
  Append,
  Prepend,
}

/// How a blank description is treated when adding a dish.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionPolicy {
  Required,
  Optional,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub insert_position: InsertPosition,
  pub description_policy: DescriptionPolicy,
  pub description_placeholder: String,
  pub currency_marker: String,
  pub initial_filters: Vec<Course>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      insert_position: InsertPosition::Append,
      description_policy: DescriptionPolicy::Optional,
      description_placeholder: "No description provided".to_string(),
      currency_marker: "R".to_string(),
      initial_filters: Course::ALL.to_vec(),
    }
  }
}

#[derive(Debug)]
pub enum ConfigError {
  Io(io::Error),
  Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
      ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ConfigError::Io(e) => Some(e),
      ConfigError::Parse(e) => Some(e),
    }
  }
}

impl From<io::Error> for ConfigError {
  fn from(e: io::Error) -> Self {
    ConfigError::Io(e)
  }
}

impl From<serde_json::Error> for ConfigError {
  fn from(e: serde_json::Error) -> Self {
    ConfigError::Parse(e)
  }
}

impl Config {
  pub fn from_json(s: &str) -> Result<Config, ConfigError> {
    Ok(serde_json::from_str(s)?)
  }

  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path.as_ref())?;
    let config = Config::from_json(&s)?;
    info!("Loaded config from {}: {:?}", path.as_ref().display(), config);
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default() {
    let c = Config::default();
    assert_eq!(InsertPosition::Append, c.insert_position);
    assert_eq!(DescriptionPolicy::Optional, c.description_policy);
    assert_eq!("R", c.currency_marker);
    assert_eq!(4, c.initial_filters.len());
  }

  #[test]
  fn test_partial_json() {
    let c = Config::from_json(r#"{"insert_position":"prepend","description_policy":"required"}"#).unwrap();
    assert_eq!(InsertPosition::Prepend, c.insert_position);
    assert_eq!(DescriptionPolicy::Required, c.description_policy);
    assert_eq!("R", c.currency_marker);
  }

  #[test]
  fn test_initial_filters_use_course_names() {
    let c = Config::from_json(r#"{"initial_filters":["Main Dishes","Beverages"]}"#).unwrap();
    assert_eq!(vec![Course::MainDishes, Course::Beverages], c.initial_filters);
  }

  #[test]
  fn test_bad_json() {
    match Config::from_json(r#"{"insert_position":"middle"}"#) {
      Err(ConfigError::Parse(_)) => {},
      x => panic!("expected parse error, got {:?}", x),
    }
  }

  #[test]
  fn test_missing_file() {
    match Config::from_file("/nonexistent/menu-order.json") {
      Err(ConfigError::Io(_)) => {},
      x => panic!("expected io error, got {:?}", x),
    }
  }
}
