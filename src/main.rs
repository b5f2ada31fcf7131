//! Wordle Filter CLI
//!
//! Prints every corpus word consistent with the given slate, known letters
//! and excluded letters.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn, Level};
use wordle_filter::{
    filter_words, write_words, Constraint, Corpus, FilterError, DEFAULT_CORPUS_PATH,
    WORD_LENGTH,
};

const USAGE_TEXT: &str = include_str!("text/usage.txt");

/// Wordle Filter - list the words that fit what you know so far
#[derive(Parser, Debug)]
#[command(name = "wordle-filter")]
#[command(version, about, long_about = None)]
struct Args {
    /// SLATE EXTRA_LETTERS EXCLUDED_LETTERS, e.g. `__e__ y ""`
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    positionals: Vec<String>,

    /// word,frequency CSV file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args, slate: &str, extra: &str, excluded: &str) -> Result<(), FilterError> {
    let constraint = Constraint::parse(slate, extra, excluded)?;
    info!(pattern = %constraint, extra, excluded, "built constraint");

    let corpus = Corpus::from_path(&args.corpus, WORD_LENGTH)?;
    let words = filter_words(&corpus, &constraint);
    info!(matched = words.len(), candidates = corpus.len(), "filtered corpus");

    if corpus.is_empty() {
        warn!(path = %args.corpus.display(), "corpus has no usable words");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_words(&mut out, words)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            // Rejected arguments count as a usage error
            println!("{}", USAGE_TEXT);
            return ExitCode::SUCCESS;
        }
        Err(e) => e.exit(),
    };
    init_logging(args.log_level());

    let [slate, extra, excluded] = match args.positionals.as_slice() {
        [slate, extra, excluded] => [slate, extra, excluded],
        _ => {
            println!("{}", USAGE_TEXT);
            return ExitCode::SUCCESS;
        }
    };

    match run(&args, slate, extra, excluded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
