pub mod utc_clock;
pub mod arbitrary_clock;

pub trait Clock: Send + Sync {
  /// Milliseconds since the unix epoch.
  fn now_millis(&self) -> i64;
}
