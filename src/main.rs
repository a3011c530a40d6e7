use {
  action::Action,
  anyhow::{anyhow, bail},
  app::App,
  arguments::Arguments,
  clap::Parser,
  clock::{Clock, SystemClock},
  crossterm::{
    cursor::{MoveTo, MoveToColumn},
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
  },
  engine::{Engine, Outcome, Transcript},
  error::Error,
  rand::seq::SliceRandom,
  report::{Report, format_summary},
  std::{
    fmt::{self, Display, Formatter},
    io::{Write, stdout},
    process,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
  },
  summary::{InputRecord, Summary},
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod action;
mod app;
mod arguments;
mod clock;
mod engine;
mod error;
mod report;
mod summary;

const WORDS: &[&str] = &[
  "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on", "with",
  "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
  "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
  "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
  "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
  "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
  "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even",
  "new", "want", "because", "any", "these", "give", "day", "most", "us",
];

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .format_timestamp(None)
    .format_target(false)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
