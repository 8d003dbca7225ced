use crate::{
  config::DescriptionPolicy,
  item::Price,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  MissingName,
  MissingDescription,
  InvalidPrice(String),
  PriceBelowMinimum(String),
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      ValidationError::MissingName => write!(f, "Please enter a dish name"),
      ValidationError::MissingDescription => write!(f, "Please enter a description"),
      ValidationError::InvalidPrice(s) => write!(f, "Please enter a valid price ('{}')", s),
      ValidationError::PriceBelowMinimum(s) => write!(
        f, "Price '{}' is below the minimum of {}", s, Price::from_cents(MIN_PRICE_CENTS),
      ),
    }
  }
}

impl std::error::Error for ValidationError {}

pub fn validate_name(name: &str) -> Result<String, ValidationError> {
  let name = name.trim();
  if name.is_empty() {
    return Err(ValidationError::MissingName)
  }
  Ok(name.to_string())
}

pub fn validate_description(
  description: &str,
  policy: DescriptionPolicy,
  placeholder: &str,
) -> Result<String, ValidationError> {
  let description = description.trim();
  if !description.is_empty() {
    return Ok(description.to_string())
  }
  match policy {
    DescriptionPolicy::Required => Err(ValidationError::MissingDescription),
    DescriptionPolicy::Optional => Ok(placeholder.to_string()),
  }
}

pub const MIN_PRICE_CENTS: u64 = 1;
/// 10 000 000 000.00 in currency units; keeps any realistic order total far from `u64::MAX`.
pub const MAX_PRICE_CENTS: u64 = 1_000_000_000_000;

/// Parses form text into a positive price, rounded to cents.
pub fn parse_price(text: &str) -> Result<Price, ValidationError> {
  let invalid = || ValidationError::InvalidPrice(text.to_string());
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return Err(invalid())
  }
  let amount: f64 = trimmed.parse().map_err(|_| invalid())?;
  if !amount.is_finite() || amount <= 0.0 {
    return Err(invalid())
  }
  let cents = (amount * 100.0).round();
  if cents < MIN_PRICE_CENTS as f64 {
    return Err(ValidationError::PriceBelowMinimum(text.to_string()))
  }
  if cents > MAX_PRICE_CENTS as f64 {
    return Err(invalid())
  }
  Ok(Price::from_cents(cents as u64))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validate_name() {
    assert_eq!(Ok("RAMEN".to_string()), validate_name("  RAMEN "));
    assert_eq!(Err(ValidationError::MissingName), validate_name(""));
    assert_eq!(Err(ValidationError::MissingName), validate_name(" \t "));
  }

  #[test]
  fn test_validate_description() {
    let p = "No description provided";
    assert_eq!(Ok("tasty".to_string()), validate_description(" tasty ", DescriptionPolicy::Required, p));
    assert_eq!(Err(ValidationError::MissingDescription), validate_description("  ", DescriptionPolicy::Required, p));
    assert_eq!(Ok(p.to_string()), validate_description("", DescriptionPolicy::Optional, p));
  }

  #[test]
  fn test_parse_price_accepts_positive_decimals() {
    assert_eq!(Ok(Price::from_cents(1000)), parse_price("10"));
    assert_eq!(Ok(Price::from_cents(24500)), parse_price("245.00"));
    assert_eq!(Ok(Price::from_cents(1250)), parse_price(" 12.5 "));
    assert_eq!(Ok(Price::from_cents(1)), parse_price("0.01"));
    assert_eq!(Ok(Price::from_cents(MAX_PRICE_CENTS)), parse_price("10000000000"));
  }

  #[test]
  fn test_parse_price_rejects_invalid_input() {
    for s in vec!["", "   ", "abc", "-5", "0", "0.00", "12abc", "NaN", "inf", "1e17", "10000000000.01"] {
      assert_eq!(Err(ValidationError::InvalidPrice(s.to_string())), parse_price(s), "input {:?}", s);
    }
  }

  #[test]
  fn test_parse_price_below_one_cent() {
    let e = parse_price("0.001").unwrap_err();
    assert_eq!(ValidationError::PriceBelowMinimum("0.001".to_string()), e);
    assert_eq!("Price '0.001' is below the minimum of 0.01", e.to_string());
  }
}
