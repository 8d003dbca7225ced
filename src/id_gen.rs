use crate::clock::Clock;
use std::sync::Arc;

/// Hands out timestamp-derived ids. Every id is strictly greater than the
/// previous one, so a stalled or rewound clock still yields unique ids.
pub struct IdGen {
  clock: Arc<dyn Clock>,
  last: i64,
}

impl IdGen {
  pub fn new(clock: Arc<dyn Clock>) -> IdGen {
    IdGen {
      clock,
      last: 0,
    }
  }

  /// Makes sure no future id collides with a numeric id already in use.
  pub fn reserve<'a, I>(&mut self, ids: I)
  where I: IntoIterator<Item = &'a str>
  {
    for id in ids {
      if let Ok(n) = id.parse::<i64>() {
        if n > self.last {
          self.last = n;
        }
      }
    }
  }

  pub fn next_id(&mut self) -> String {
    let now = self.clock.now_millis();
    let id = if now > self.last { now } else { self.last + 1 };
    self.last = id;
    id.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::clock::arbitrary_clock::ArbitraryClock;

  #[test]
  fn test_ids_follow_clock() {
    let clock = Arc::new(ArbitraryClock::at(1_700_000_000_000));
    let mut g = IdGen::new(clock.clone());
    assert_eq!("1700000000000", g.next_id());
    clock.advance(250);
    assert_eq!("1700000000250", g.next_id());
  }

  #[test]
  fn test_ids_are_unique_when_clock_stalls() {
    let clock = Arc::new(ArbitraryClock::at(42));
    let mut g = IdGen::new(clock.clone());
    assert_eq!("42", g.next_id());
    assert_eq!("43", g.next_id());
    clock.set(10); // clock went backwards
    assert_eq!("44", g.next_id());
  }

  #[test]
  fn test_reserve_skips_existing_ids() {
    let mut g = IdGen::new(Arc::new(ArbitraryClock::new()));
    g.reserve(vec!["1", "10", "abc", "7"]);
    assert_eq!("11", g.next_id());
  }
}
