use std::{
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};
use glycobert_tokenizer::{GlycoBertTokenizer, TokenizerConfig};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .with_writer(io::stderr)
        .init();

    let cmd = Command::from_args();

    tracing::debug!(?cmd, "Starting");

    match cmd {
        Command::Vocab(vocab) => vocab.execute(),
        Command::Encode(encode) => encode.execute(),
        Command::Decode(decode) => decode.execute(),
    }
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Build a vocabulary file from a list of symbols (one per line).
    Vocab(Vocab),
    /// Encode glycan token strings into token ids and attention masks.
    Encode(Encode),
    /// Decode token ids (read as JSON from stdin) back into text.
    Decode(Decode),
}

#[derive(Debug, StructOpt)]
pub struct Vocab {
    /// A text file with one vocabulary symbol per line.
    #[structopt(long)]
    symbols: PathBuf,
    /// Where to write the vocabulary.
    #[structopt(short, long, default_value = "vocab.json")]
    output: PathBuf,
}

impl Vocab {
    fn execute(self) -> Result<(), Error> {
        glycobert_cli::build_vocabulary(&self.symbols, &self.output)?;
        Ok(())
    }
}

#[derive(Debug, StructOpt)]
pub struct Encode {
    /// The vocabulary file.
    #[structopt(long, default_value = "vocab.json")]
    vocab: PathBuf,
    /// Pad or truncate every encoded row to this many tokens.
    #[structopt(long, default_value = "512")]
    max_seq_length: usize,
    /// The texts to encode. Each line of stdin is encoded when none are
    /// given.
    texts: Vec<String>,
}

impl Encode {
    fn execute(self) -> Result<(), Error> {
        let config = TokenizerConfig {
            max_seq_length: self.max_seq_length,
        };
        let tokenizer = load_tokenizer(&self.vocab, &config)?;

        let texts = if self.texts.is_empty() {
            io::stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .context("Unable to read from stdin")?
        } else {
            self.texts
        };

        glycobert_cli::encode_texts(&tokenizer, &texts, io::stdout().lock())
    }
}

#[derive(Debug, StructOpt)]
pub struct Decode {
    /// The vocabulary file.
    #[structopt(long, default_value = "vocab.json")]
    vocab: PathBuf,
    /// Leave out every special token, not just padding.
    #[structopt(long)]
    skip_special_tokens: bool,
}

impl Decode {
    fn execute(self) -> Result<(), Error> {
        let tokenizer =
            load_tokenizer(&self.vocab, &TokenizerConfig::default())?;

        glycobert_cli::decode_ids(
            &tokenizer,
            io::stdin().lock(),
            io::stdout().lock(),
            self.skip_special_tokens,
        )
    }
}

fn load_tokenizer(
    path: &Path,
    config: &TokenizerConfig,
) -> Result<GlycoBertTokenizer, Error> {
    GlycoBertTokenizer::load_vocabulary(path, config.max_seq_length)
        .with_context(|| {
            format!("Unable to load the vocabulary from \"{}\"", path.display())
        })
}
