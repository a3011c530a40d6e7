use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Type the challenge text and get your error rate and speed")]
pub(crate) struct Arguments {
  /// Type this text instead of randomly chosen words
  #[clap(long, short)]
  text: Option<String>,
  #[clap(long, short, default_value = "10")]
  word_count: usize,
  /// End the session after this many seconds without a keystroke
  #[clap(long, value_name = "SECONDS")]
  idle_timeout: Option<u64>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let text = match self.text {
      Some(text) => text,
      None => random_text(self.word_count)?,
    };

    if text.is_empty() {
      bail!("challenge text must not be empty");
    }

    App::new(&text, self.idle_timeout.map(Duration::from_secs)).run()
  }
}

fn random_text(word_count: usize) -> Result<String> {
  if word_count == 0 {
    bail!("word count must be at least one");
  }

  let mut generator = rand::thread_rng();

  let words = (0..word_count)
    .map(|_| WORDS.choose(&mut generator).copied())
    .collect::<Option<Vec<&str>>>()
    .ok_or_else(|| anyhow!("word list is empty"))?;

  Ok(words.join(" "))
}
