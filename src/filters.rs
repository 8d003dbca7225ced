use crate::{
  api::ToggleOutcome,
  item::Course,
};
use std::collections::BTreeSet;

/// The set of courses currently selected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFilter {
  active: BTreeSet<Course>,
}

impl CourseFilter {
  pub fn all() -> CourseFilter {
    CourseFilter::of(&Course::ALL)
  }

  pub fn none() -> CourseFilter {
    CourseFilter {
      active: BTreeSet::new(),
    }
  }

  pub fn of(courses: &[Course]) -> CourseFilter {
    CourseFilter {
      active: courses.iter().cloned().collect(),
    }
  }

  pub fn contains(&self, course: Course) -> bool {
    self.active.contains(&course)
  }

  pub fn is_empty(&self) -> bool {
    self.active.is_empty()
  }

  pub fn len(&self) -> usize {
    self.active.len()
  }

  /// Active courses in display order.
  pub fn courses(&self) -> Vec<Course> {
    self.active.iter().cloned().collect()
  }

  /// Turning off the last active course is refused; use `clear` for that.
  pub fn toggle(&mut self, course: Course) -> ToggleOutcome {
    if self.active.contains(&course) {
      if self.active.len() == 1 {
        return ToggleOutcome::Refused
      }
      self.active.remove(&course);
      ToggleOutcome::Disabled
    } else {
      self.active.insert(course);
      ToggleOutcome::Enabled
    }
  }

  pub fn select_all(&mut self) {
    self.active = Course::ALL.iter().cloned().collect();
  }

  pub fn clear(&mut self) {
    self.active.clear();
  }
}

impl Default for CourseFilter {
  fn default() -> Self {
    CourseFilter::all()
  }
}
