use crate::clock::Clock;
use chrono::Utc;

/// Wall clock used outside of tests.
pub struct UtcClock();

impl Clock for UtcClock {
  fn now_millis(&self) -> i64 {
    Utc::now().timestamp_millis()
  }
}

#[test]
fn test_now_is_millis() {
  // 2020-01-01T00:00:00Z in milliseconds
  assert!(UtcClock().now_millis() > 1_577_836_800_000);
}
