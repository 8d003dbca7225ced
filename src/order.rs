use crate::item::{OrderItem, Price};

/// Entries chosen in the current session, in the order they were added.
/// Duplicates are kept as separate entries.
#[derive(Clone, Default)]
pub struct Order {
  items: Vec<OrderItem>,
}

impl Order {
  pub fn new() -> Order {
    Order {
      items: vec![],
    }
  }

  pub fn add(&mut self, item: OrderItem) {
    self.items.push(item);
  }

  // returns None, if no entry has the id
  pub fn remove_first(&mut self, id: &str) -> Option<OrderItem> {
    let pos = self.items.iter().position(|x| x.id == id)?;
    Some(self.items.remove(pos))
  }

  /// Returns the number of entries dropped.
  pub fn clear(&mut self) -> usize {
    let n = self.items.len();
    self.items.clear();
    n
  }

  pub fn contains(&self, id: &str) -> bool {
    self.items.iter().any(|x| x.id == id)
  }

  pub fn count_of(&self, id: &str) -> usize {
    self.items.iter().filter(|x| x.id == id).count()
  }

  pub fn total(&self) -> Price {
    self.items.iter().map(|x| x.price).sum()
  }

  pub fn get_all(&self) -> &[OrderItem] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}
