//! Wordle Suggest CLI
//!
//! Serves the suggestion engine over HTTP, answers one-off queries, or runs an
//! interactive session that accumulates feedback guess by guess.

use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_suggest::{
    server, suggest_words, ConstraintSet, FeedbackPattern, ServerConfig, WordCorpus, WORD_LENGTH,
};

const HELP_TEXT: &str = include_str!("text/help.txt");

#[derive(Parser, Debug)]
#[command(name = "wordle-suggest", version, about = "Suggest words that fit Wordle feedback.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve POST /suggest over HTTP
    Serve {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Port to listen on
        #[arg(long, env = "WORDLE_PORT", default_value_t = wordle_suggest::config::DEFAULT_PORT)]
        port: u16,
    },
    /// Print the words that fit the given constraints
    Suggest {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Letter confirmed at a position, as POS=LETTER (0-based)
        #[arg(long, value_parser = parse_green)]
        green: Vec<(usize, char)>,

        /// Letters present in the word at an unknown position
        #[arg(long)]
        yellow: Vec<String>,

        /// Letters absent from the word
        #[arg(long)]
        gray: Vec<String>,

        /// A previous guess and its feedback, as WORD:PATTERN (e.g. crane:gybbb)
        #[arg(long)]
        guess: Vec<String>,

        /// Print at most this many words
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Interactive session
    Interactive {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Args, Debug)]
struct CorpusArgs {
    /// List of candidate words. One word per line.
    #[arg(long, env = "WORDLE_WORD_LIST_PATH")]
    word_list_path: PathBuf,

    /// Number of letters per word
    #[arg(long, default_value_t = WORD_LENGTH)]
    word_length: usize,
}

impl CorpusArgs {
    fn load(&self) -> Result<WordCorpus, Box<dyn Error>> {
        Ok(WordCorpus::load(&self.word_list_path, self.word_length)?)
    }
}

fn parse_green(s: &str) -> Result<(usize, char), String> {
    let (pos, letter) = s
        .split_once('=')
        .ok_or_else(|| format!("expected POS=LETTER, got '{s}'"))?;
    let pos = pos
        .trim()
        .parse()
        .map_err(|_| format!("'{pos}' is not a position"))?;
    let mut letters = letter.trim().chars();
    match (letters.next(), letters.next()) {
        (Some(c), None) => Ok((pos, c)),
        _ => Err(format!("expected a single letter, got '{letter}'")),
    }
}

fn print_words(words: &[&str]) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word.to_uppercase());
    }
    println!();
}

fn print_constraints(constraints: &ConstraintSet) {
    let greens: Vec<String> = constraints
        .known_in_position
        .iter()
        .map(|(p, c)| format!("{p}={c}"))
        .collect();
    println!("  Green:  {}", greens.join(" "));
    println!(
        "  Yellow: {}",
        constraints.known_out_of_position.iter().collect::<String>()
    );
    println!("  Gray:   {}", constraints.known_bad.iter().collect::<String>());
}

fn run_suggest(
    corpus: &WordCorpus,
    constraints: &ConstraintSet,
    limit: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    constraints.validate(corpus.word_length())?;

    let words = suggest_words(corpus, constraints);
    if words.is_empty() {
        println!("{}", wordle_suggest::wire::NO_WORDS);
        return Ok(());
    }

    let shown = limit.unwrap_or(words.len()).min(words.len());
    for word in &words[..shown] {
        println!("{word}");
    }
    if shown < words.len() {
        eprintln!("... {} more", words.len() - shown);
    }
    Ok(())
}

fn run_interactive(corpus: &WordCorpus) -> Result<(), Box<dyn Error>> {
    println!("Loaded {} words.", corpus.len());
    println!("Type 'help' for commands.");
    println!();

    let word_length = corpus.word_length();
    let mut constraints = ConstraintSet::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        // Work on a copy so a rejected command leaves the session untouched.
        let mut next = constraints.clone();

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{HELP_TEXT}");
                continue;
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "reset" => {
                constraints = ConstraintSet::new();
                println!("Reset. {} words available.", corpus.len());
                continue;
            }
            "constraints" | "c" => {
                print_constraints(&constraints);
                continue;
            }
            "show" | "s" => {}
            "guess" | "g" => {
                if parts.len() < 3 {
                    println!("Usage: guess <word> <pattern>");
                    println!("Example: guess crane gybbb");
                    continue;
                }
                let word = parts[1].to_lowercase();
                let Some(pattern) = FeedbackPattern::parse(parts[2], word_length) else {
                    println!("Invalid pattern: {}", parts[2]);
                    println!("Use g=green, y=yellow, b=gray ({word_length} characters)");
                    continue;
                };
                if let Err(err) = next.record_guess(&word, &pattern) {
                    println!("{err}");
                    continue;
                }
                println!("{} {}", word.to_uppercase(), pattern);
            }
            "green" => match parts.get(1..3).map(|p| parse_green(&p.join("="))) {
                Some(Ok((pos, c))) => {
                    next.known_in_position.insert(pos, c);
                }
                Some(Err(err)) => {
                    println!("{err}");
                    continue;
                }
                None => {
                    println!("Usage: green <pos> <letter>");
                    continue;
                }
            },
            "yellow" => next
                .known_out_of_position
                .extend(parts[1..].iter().flat_map(|s| s.chars())),
            "gray" | "grey" => next
                .known_bad
                .extend(parts[1..].iter().flat_map(|s| s.chars())),
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
                continue;
            }
        }

        if let Err(err) = next.validate(word_length) {
            println!("{err}");
            continue;
        }
        constraints = next;

        let words = suggest_words(corpus, &constraints);
        println!();
        println!("Remaining possibilities: {}", words.len());
        if words.is_empty() {
            println!("{}", wordle_suggest::wire::NO_WORDS);
        } else if words.len() <= 50 {
            print_words(&words);
        }
        println!();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordle_suggest=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match Cli::parse().command {
        Command::Serve { corpus, port } => {
            let config = ServerConfig {
                port,
                word_list_path: corpus.word_list_path,
                word_length: corpus.word_length,
            };
            info!(port = config.port, "configured");
            server::serve(config).await
        }
        Command::Suggest {
            corpus,
            green,
            yellow,
            gray,
            guess,
            limit,
        } => {
            let word_corpus = corpus.load()?;
            let mut constraints = ConstraintSet::new();
            for entry in &guess {
                constraints.record_guess_str(entry, word_corpus.word_length())?;
            }
            constraints.known_in_position.extend(green);
            constraints
                .known_out_of_position
                .extend(yellow.iter().flat_map(|s| s.chars()));
            constraints
                .known_bad
                .extend(gray.iter().flat_map(|s| s.chars()));
            run_suggest(&word_corpus, &constraints, limit)
        }
        Command::Interactive { corpus } => run_interactive(&corpus.load()?),
    }
}
