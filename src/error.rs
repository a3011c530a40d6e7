#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum Error {
  #[error("cannot summarize a session with no collected keystrokes")]
  EmptyHistory,
}
