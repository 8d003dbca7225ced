use crate::{
  config::InsertPosition,
  filters::CourseFilter,
  item::{Course, MenuItem},
};

/// Menu items in display order. Items are only ever added.
pub struct Catalog {
  items: Vec<MenuItem>,
}

impl Catalog {
  pub fn new(items: Vec<MenuItem>) -> Catalog {
    Catalog {
      items,
    }
  }

  pub fn insert(&mut self, item: MenuItem, position: InsertPosition) {
    match position {
      InsertPosition::Append => self.items.push(item),
      InsertPosition::Prepend => self.items.insert(0, item),
    }
  }

  pub fn get(&self, id: &str) -> Option<&MenuItem> {
    self.items.iter().find(|x| x.id == id)
  }

  pub fn get_all(&self) -> &[MenuItem] {
    &self.items
  }

  pub fn by_course(&self, course: Course) -> Vec<MenuItem> {
    self.items.iter().filter(|x| x.course == course).cloned().collect()
  }

  pub fn filtered(&self, filter: &CourseFilter) -> Vec<MenuItem> {
    self.items.iter().filter(|x| filter.contains(x.course)).cloned().collect()
  }

  pub fn ids(&self) -> impl Iterator<Item = &str> {
    self.items.iter().map(|x| x.id.as_str())
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }
}
