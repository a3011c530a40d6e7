use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
  Escape,
  Insert(char),
  NewLine,
}

impl Action {
  /// Only key presses count; releases and auto-repeats are dropped.
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
        KeyCode::Char(c) => Some(Self::Insert(c)),
        KeyCode::Enter => Some(Self::NewLine),
        KeyCode::Esc => Some(Self::Escape),
        _ => None,
      },
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crossterm::event::{KeyEvent, KeyEventState, KeyModifiers},
  };

  fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
      code,
      modifiers,
      kind,
      state: KeyEventState::NONE,
    })
  }

  fn press(code: KeyCode) -> Event {
    key(code, KeyModifiers::NONE, KeyEventKind::Press)
  }

  #[test]
  fn from_event_char() {
    assert_eq!(
      Action::from_event(press(KeyCode::Char('a'))),
      Some(Action::Insert('a'))
    );
  }

  #[test]
  fn from_event_shifted_char() {
    assert_eq!(
      Action::from_event(key(
        KeyCode::Char('A'),
        KeyModifiers::SHIFT,
        KeyEventKind::Press
      )),
      Some(Action::Insert('A'))
    );
  }

  #[test]
  fn from_event_escape() {
    assert_eq!(
      Action::from_event(press(KeyCode::Esc)),
      Some(Action::Escape)
    );
  }

  #[test]
  fn from_event_enter() {
    assert_eq!(
      Action::from_event(press(KeyCode::Enter)),
      Some(Action::NewLine)
    );
  }

  #[test]
  fn from_event_backspace_is_unsupported() {
    assert_eq!(Action::from_event(press(KeyCode::Backspace)), None);
  }

  #[test]
  fn from_event_repeat_and_release() {
    assert_eq!(
      Action::from_event(key(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Repeat
      )),
      None
    );

    assert_eq!(
      Action::from_event(key(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release
      )),
      None
    );
  }

  #[test]
  fn from_event_non_key_event() {
    assert_eq!(
      Action::from_event(Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
      })),
      None
    );
  }
}
