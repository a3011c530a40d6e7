use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InputRecord {
  pub(crate) character: char,
  pub(crate) timestamp_ms: u64,
}

impl InputRecord {
  pub(crate) fn new(character: char, timestamp_ms: u64) -> Self {
    Self {
      character,
      timestamp_ms,
    }
  }
}

/// Snapshot of a session: errors so far, challenge length, and every
/// collected keystroke in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Summary {
  pub(crate) errors: usize,
  pub(crate) total: usize,
  pub(crate) collected: Vec<InputRecord>,
}

impl Summary {
  /// Milliseconds between the first and last collected keystroke.
  pub(crate) fn elapsed_ms(&self) -> Option<i64> {
    let first = self.collected.first()?;
    let last = self.collected.last()?;

    Some(last.timestamp_ms as i64 - first.timestamp_ms as i64)
  }

  pub(crate) fn report(&self) -> Result<Report, Error> {
    Report::from_summary(self)
  }
}
