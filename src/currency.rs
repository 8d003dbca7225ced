use crate::item::Price;

/// Renders `price` with exactly two decimals behind the currency marker.
pub fn format_amount(marker: &str, price: Price) -> String {
  format!("{}{}", marker, price)
}

#[test]
fn test_format_amount() {
  assert_eq!("R245.00", format_amount("R", Price::from_cents(24500)));
  assert_eq!("R0.00", format_amount("R", Price::ZERO));
  assert_eq!("$3.07", format_amount("$", Price::from_cents(307)));
}
