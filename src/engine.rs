use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
  Ok,
  Error,
}

/// Receives one notification per keystroke that lands inside the challenge
/// text, synchronously and in submission order.
pub(crate) trait OutcomeSink {
  fn on_result(&mut self, outcome: Outcome, character: char);
}

impl<F: FnMut(Outcome, char)> OutcomeSink for F {
  fn on_result(&mut self, outcome: Outcome, character: char) {
    self(outcome, character)
  }
}

/// Records every notification in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Transcript(Vec<(Outcome, char)>);

impl Transcript {
  pub(crate) fn entries(&self) -> &[(Outcome, char)] {
    &self.0
  }
}

impl OutcomeSink for Transcript {
  fn on_result(&mut self, outcome: Outcome, character: char) {
    self.0.push((outcome, character));
  }
}

/// Validates keystrokes against the challenge text and collects a
/// timestamped history of everything submitted.
#[derive(Debug)]
pub(crate) struct Engine<C, S> {
  clock: C,
  errors: usize,
  expected: Vec<char>,
  history: Vec<InputRecord>,
  sink: S,
}

impl<C: Clock, S: OutcomeSink> Engine<C, S> {
  pub(crate) fn new(expected: &str, clock: C, sink: S) -> Self {
    Self {
      clock,
      errors: 0,
      expected: expected.chars().collect(),
      history: Vec::new(),
      sink,
    }
  }

  pub(crate) fn errors(&self) -> usize {
    self.errors
  }

  pub(crate) fn expected(&self) -> &[char] {
    &self.expected
  }

  pub(crate) fn is_complete(&self) -> bool {
    self.position() >= self.expected.len()
  }

  pub(crate) fn position(&self) -> usize {
    self.history.len()
  }

  pub(crate) fn sink(&self) -> &S {
    &self.sink
  }

  /// Keystrokes past the end of the challenge text are still collected but
  /// neither compared nor reported to the sink.
  pub(crate) fn submit(&mut self, character: char) {
    match self.expected.get(self.position()) {
      Some(&expected) => {
        let outcome = if character == expected {
          Outcome::Ok
        } else {
          self.errors += 1;

          log::debug!(
            "mismatch at {}: expected {expected:?}, got {character:?}",
            self.position()
          );

          Outcome::Error
        };

        self.sink.on_result(outcome, character);
      }
      None => log::debug!("over-typed {character:?} at {}", self.position()),
    }

    self
      .history
      .push(InputRecord::new(character, self.clock.now_ms()));
  }

  pub(crate) fn summary(&self) -> Summary {
    Summary {
      errors: self.errors,
      total: self.expected.len(),
      collected: self.history.clone(),
    }
  }
}
