use super::*;

/// Source of keystroke timestamps, in milliseconds since the Unix epoch.
pub(crate) trait Clock {
  fn now_ms(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
  fn now_ms(&self) -> u64 {
    SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|elapsed| elapsed.as_millis() as u64)
      .unwrap_or(0)
  }
}
