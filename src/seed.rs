use crate::item::{Course, MenuItem, Price};

fn dish(id: &str, name: &str, description: &str, course: Course, cents: u64) -> MenuItem {
  MenuItem {
    id: id.to_string(),
    name: name.to_string(),
    description: description.to_string(),
    course,
    price: Price::from_cents(cents),
  }
}

/// Catalog every session starts with.
pub fn seed_catalog() -> Vec<MenuItem> {
  vec![
    dish("1", "CHICKEN LIVERS", "Creamy peri-peri chicken livers served with fresh bread", Course::Starters, 8500),
    dish("2", "STEAK FILLET 300G", "Premium 300g steak fillet with mushroom sauce and veggies", Course::MainDishes, 24500),
    dish("3", "GOURMET BURGER", "Beef patty with caramelized onions and special sauce", Course::MainDishes, 12000),
    dish("4", "CHICKEN ALFREDO", "Creamy Alfredo pasta with grilled chicken strips", Course::MainDishes, 13500),
    dish("5", "VANILLA ICE CREAM NOUGAT", "Homemade vanilla ice cream with caramel nougat crunch", Course::Desserts, 6500),
    dish("6", "BERRY BLAST SMOOTHIE", "Mixed berries with yogurt and honey", Course::Beverages, 4500),
    dish("7", "TROPICAL SUNSET", "Orange, pineapple, and mango fusion", Course::Beverages, 4000),
    dish("8", "SPARKLING LEMONADE", "Fresh lemon with mint and sparkling water", Course::Beverages, 3500),
    dish("9", "ICED CARAMEL LATTE", "Espresso with caramel and cold milk", Course::Beverages, 5000),
    dish("10", "MOCHA MADNESS", "Chocolate and coffee perfection", Course::Beverages, 5500),
  ]
}
