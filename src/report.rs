use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Speed {
  Cpm(i64),
  /// No time passed between the first and last keystroke.
  Infinity,
}

impl Display for Speed {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Cpm(cpm) => write!(f, "{cpm}"),
      Self::Infinity => write!(f, "(infinity)"),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Report {
  pub(crate) error_rate: f64,
  pub(crate) errors: usize,
  pub(crate) speed: Speed,
}

impl Report {
  /// Error rate is measured against the keystrokes actually collected, not
  /// the challenge length. Speed counts correct characters per minute.
  pub(crate) fn from_summary(summary: &Summary) -> Result<Self, Error> {
    let elapsed_ms = summary.elapsed_ms().ok_or(Error::EmptyHistory)?;

    let collected = summary.collected.len();

    let seconds = elapsed_ms as f64 / 1000.0;

    let speed = if seconds != 0.0 {
      let correct = collected as f64 - summary.errors as f64;
      Speed::Cpm((60.0 * correct / seconds).round_ties_even() as i64)
    } else {
      Speed::Infinity
    };

    Ok(Self {
      error_rate: 100.0 * summary.errors as f64 / collected as f64,
      errors: summary.errors,
      speed,
    })
  }
}

impl Display for Report {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Errors {}({:.1}%) Avg. Speed {} CPM",
      self.errors, self.error_rate, self.speed
    )
  }
}

pub(crate) fn format_summary(summary: &Summary) -> Result<String, Error> {
  Ok(Report::from_summary(summary)?.to_string())
}
