use crate::clock::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that only moves when told to.
pub struct ArbitraryClock {
  pub now: AtomicI64,
}

impl Clock for ArbitraryClock {
  fn now_millis(&self) -> i64 { self.now.load(Ordering::Relaxed) }
}

impl ArbitraryClock {
  pub fn new() -> ArbitraryClock {
    ArbitraryClock::at(0)
  }

  pub fn at(millis: i64) -> ArbitraryClock {
    ArbitraryClock {
      now: AtomicI64::new(millis),
    }
  }

  pub fn set(&self, millis: i64) {
    self.now.store(millis, Ordering::Relaxed)
  }

  pub fn advance(&self, millis: i64) {
    self.now.fetch_add(millis, Ordering::Relaxed);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_and_advance() {
    let c = ArbitraryClock::new();
    assert_eq!(0, c.now_millis());
    c.set(1_000);
    assert_eq!(1_000, c.now_millis());
    c.advance(5);
    assert_eq!(1_005, c.now_millis());
  }
}
