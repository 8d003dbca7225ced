use serde::{Deserialize, Serialize};
use std::{
  fmt,
  ops::Add,
  str::FromStr,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Course {
  Starters,
  #[serde(rename = "Main Dishes")]
  MainDishes,
  Desserts,
  Beverages,
}

impl Course {
  pub const ALL: [Course; 4] = [
    Course::Starters,
    Course::MainDishes,
    Course::Desserts,
    Course::Beverages,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Course::Starters => "Starters",
      Course::MainDishes => "Main Dishes",
      Course::Desserts => "Desserts",
      Course::Beverages => "Beverages",
    }
  }

  pub fn emoji(&self) -> &'static str {
    match self {
      Course::Starters => "🍤",
      Course::MainDishes => "🍖",
      Course::Desserts => "🍰",
      Course::Beverages => "🥤",
    }
  }
}

impl fmt::Display for Course {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCourse(pub String);

impl fmt::Display for UnknownCourse {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Unknown course '{}'", self.0)
  }
}

impl std::error::Error for UnknownCourse {}

impl FromStr for Course {
  type Err = UnknownCourse;

  fn from_str(s: &str) -> Result<Course, UnknownCourse> {
    let key = s.trim().to_lowercase();
    match key.as_str() {
      "starters" | "starter" => Ok(Course::Starters),
      "main dishes" | "main dish" | "mains" | "main" => Ok(Course::MainDishes),
      "desserts" | "dessert" => Ok(Course::Desserts),
      "beverages" | "beverage" | "drinks" | "drink" => Ok(Course::Beverages),
      _ => Err(UnknownCourse(s.to_string())),
    }
  }
}

/// Amount in minor units (cents). Catalog prices are always positive, order
/// totals may be zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
  pub const ZERO: Price = Price(0);

  pub fn from_cents(cents: u64) -> Price {
    Price(cents)
  }

  pub fn cents(&self) -> u64 {
    self.0
  }

  pub fn units(&self) -> u64 {
    self.0 / 100
  }

  pub fn fraction(&self) -> u64 {
    self.0 % 100
  }

  pub fn is_positive(&self) -> bool {
    self.0 > 0
  }
}

impl Add for Price {
  type Output = Price;

  // saturates instead of wrapping, so a total never panics
  fn add(self, other: Price) -> Price {
    Price(self.0.saturating_add(other.0))
  }
}

impl std::iter::Sum for Price {
  fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
    iter.fold(Price::ZERO, |acc, x| acc + x)
  }
}

impl<'a> std::iter::Sum<&'a Price> for Price {
  fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
    iter.fold(Price::ZERO, |acc, x| acc + *x)
  }
}

impl fmt::Display for Price {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}.{:02}", self.units(), self.fraction())
  }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct MenuItem {
  pub id: String,
  pub name: String,
  pub description: String,
  pub course: Course,
  pub price: Price,
}

/// An order entry is a copy of the catalog entry taken when it was added.
pub type OrderItem = MenuItem;
