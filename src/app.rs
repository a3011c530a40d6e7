use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum State {
  Completed,
  Continuing,
  Idle,
  Quit,
}

#[derive(Debug)]
pub(crate) struct App {
  engine: Engine<SystemClock, Transcript>,
  idle_timeout: Option<Duration>,
  last_input: Instant,
}

impl App {
  pub(crate) fn new(text: &str, idle_timeout: Option<Duration>) -> Self {
    Self {
      engine: Engine::new(text, SystemClock, Transcript::default()),
      idle_timeout,
      last_input: Instant::now(),
    }
  }

  fn display(&self) -> Result {
    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    print!("{}", self.engine.expected().iter().collect::<String>());

    command!(MoveTo(0, 1))?;

    for &(outcome, character) in self.engine.sink().entries() {
      match outcome {
        Outcome::Ok => print!("{character}"),
        Outcome::Error => {
          command!(SetForegroundColor(Color::Red))?;
          print!("{character}");
          command!(ResetColor)?;
        }
      }
    }

    if let Some(status) = self.status()? {
      command!(MoveTo(0, 3))?;
      print!("{status}");
      command!(MoveToColumn(0))?;
    }

    stdout().flush()?;

    Ok(())
  }

  fn handle_action(&mut self, action: Action) -> State {
    match action {
      Action::Escape => State::Quit,
      Action::NewLine => {
        log::info!("new line requested, ignoring");
        State::Continuing
      }
      Action::Insert(c) => {
        if self.engine.is_complete() {
          return State::Completed;
        }

        self.engine.submit(c);
        self.last_input = Instant::now();

        if self.engine.is_complete() {
          State::Completed
        } else {
          State::Continuing
        }
      }
    }
  }

  fn is_idle(&self) -> bool {
    self
      .idle_timeout
      .is_some_and(|timeout| self.last_input.elapsed() >= timeout)
  }

  pub(crate) fn run(&mut self) -> Result {
    log::info!(
      "starting session with {} characters",
      self.engine.expected().len()
    );

    terminal::enable_raw_mode()?;

    let state = self.event_loop();

    terminal::disable_raw_mode()?;

    let state = state?;

    log::info!(
      "session ended ({state:?}) after {} keystrokes, {} errors",
      self.engine.position(),
      self.engine.errors()
    );

    if state != State::Quit {
      command!(Clear(ClearType::All), MoveTo(0, 0))?;
    }

    let summary = self.engine.summary();

    log::debug!(
      "typed {:?}",
      summary
        .collected
        .iter()
        .map(|record| record.character)
        .collect::<String>()
    );

    if !summary.collected.is_empty() {
      println!("{}\n", format_summary(&summary)?);
    }

    Ok(())
  }

  fn event_loop(&mut self) -> Result<State> {
    loop {
      self.display()?;

      if self.is_idle() {
        return Ok(State::Idle);
      }

      if event::poll(Duration::from_millis(100))? {
        if let Some(action) = Action::from_event(event::read()?) {
          match self.handle_action(action) {
            State::Continuing => continue,
            state => return Ok(state),
          }
        }
      }
    }
  }

  /// Shown once there are at least two keystrokes to measure between.
  fn status(&self) -> Result<Option<String>> {
    if self.engine.position() < 2 {
      return Ok(None);
    }

    let summary = self.engine.summary();

    Ok(Some(format!(
      "{} [{}/{}]",
      summary.report()?,
      summary.collected.len(),
      summary.total
    )))
  }
}
