//! Terminal flashcards and quizzes for term set files.
//!
//! Loads a set definition (`.toml` or `.json`) and studies it interactively
//! on stdin/stdout. Logs go to stderr.

mod flashcards;
mod quiz;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use studyset_engine::{Engine, QuestionKind, QuizOptions, SmallSetPolicy, TermSet};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Arguments
// ============================================================================

/// Study a term set with flashcards or a quiz.
#[derive(Parser, Debug)]
#[command(name = "studyset")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed for shuffles and quiz generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flip through the set as flashcards
    Flashcards {
        /// Set definition file (.toml or .json)
        file: PathBuf,

        /// Shuffle the deck before the first card
        #[arg(long, default_value_t = false)]
        shuffle: bool,
    },

    /// Take a generated quiz on the set
    Quiz {
        /// Set definition file (.toml or .json)
        file: PathBuf,

        /// Question kinds to draw from
        #[arg(long, value_enum, value_delimiter = ',', default_values_t = [KindArg::Fill, KindArg::Choice])]
        kinds: Vec<KindArg>,

        /// Allow multiple choice with fewer than four options on small sets
        #[arg(long, default_value_t = false)]
        allow_small_choice: bool,
    },

    /// Print a summary of the set as JSON
    Show {
        /// Set definition file (.toml or .json)
        file: PathBuf,
    },
}

/// Question kind as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    /// Free-text recall
    Fill,
    /// Multiple choice
    Choice,
}

impl From<KindArg> for QuestionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Fill => QuestionKind::Fill,
            KindArg::Choice => QuestionKind::MultipleChoice,
        }
    }
}

/// Set overview printed by `show`.
#[derive(Debug, Serialize)]
struct SetSummary<'a> {
    id: i64,
    name: &'a str,
    description: Option<&'a str>,
    public: bool,
    creator: Option<&'a str>,
    created_at: Option<&'a str>,
    terms: usize,
    distinct_terms: usize,
}

impl<'a> SetSummary<'a> {
    fn new(set: &'a TermSet) -> Self {
        Self {
            id: set.id,
            name: &set.name,
            description: set.description.as_deref(),
            public: set.public,
            creator: set.creator.as_ref().map(|c| c.username.as_str()),
            created_at: set.created_at.as_deref(),
            terms: set.len(),
            distinct_terms: set.distinct_term_count(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn engine_for(set: TermSet, seed: Option<u64>) -> studyset_engine::Result<Engine> {
    match seed {
        Some(seed) => Engine::with_seed(set, seed),
        None => Engine::new(set),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();

    match args.command {
        Command::Flashcards { file, shuffle } => {
            let set = TermSet::from_file(&file)?;
            info!(file = %file.display(), terms = set.len(), seed = ?args.seed, "starting flashcards");

            let mut engine = engine_for(set, args.seed)?;
            let mut deck = engine.flashcards()?;
            if shuffle {
                deck.shuffle(engine.rng());
            }

            flashcards::run(&mut deck, engine.rng(), stdin.lock(), stdout.lock())?;
        }
        Command::Quiz {
            file,
            kinds,
            allow_small_choice,
        } => {
            let set = TermSet::from_file(&file)?;
            info!(file = %file.display(), terms = set.len(), seed = ?args.seed, "starting quiz");

            let options = QuizOptions {
                kinds: kinds.into_iter().map(QuestionKind::from).collect(),
                small_sets: if allow_small_choice {
                    SmallSetPolicy::Degraded
                } else {
                    SmallSetPolicy::FillOnly
                },
            };

            let mut engine = engine_for(set, args.seed)?;
            let mut session = engine.quiz_with(options)?;
            quiz::run(&mut session, engine.rng(), stdin.lock(), stdout.lock())?;
        }
        Command::Show { file } => {
            let set = TermSet::from_file(&file)?;
            println!("{}", serde_json::to_string_pretty(&SetSummary::new(&set))?);
        }
    }

    Ok(())
}
