//! Study session engines for term sets.
//!
//! This crate runs the interactive parts of studying a [`TermSet`]: a circular,
//! shuffleable flashcard deck and a randomly generated quiz with live scoring.
//! Sessions are plain in-memory state machines; they never touch storage and
//! never modify the set they were built from.
//!
//! # Quick Start
//!
//! ```
//! use studyset_engine::{Engine, TermSet};
//!
//! # fn main() -> studyset_engine::Result<()> {
//! let set = TermSet::builder("Animals")
//!     .term("cat", "a feline")
//!     .term("dog", "a canine")
//!     .term("bird", "an avian")
//!     .term("fish", "an aquatic animal")
//!     .build()?;
//!
//! // Seeded for reproducible shuffles and quizzes.
//! let mut engine = Engine::with_seed(set, 7)?;
//!
//! let mut deck = engine.flashcards()?;
//! deck.next();
//! deck.flip();
//! println!("{}", deck.face());
//!
//! let quiz = engine.quiz()?;
//! println!("{} questions", quiz.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! Both session types are enabled by default:
//! - `flashcards` - Deck traversal with flip and shuffle
//! - `quiz` - Quiz generation and scoring

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;

pub mod shuffle;

#[cfg(feature = "flashcards")]
pub mod flashcards;

#[cfg(feature = "quiz")]
pub mod quiz;

pub use error::{Error, Result};

// Re-export model types for convenience
pub use studyset::{Creator, Term, TermSet, TermSetBuilder};

#[cfg(feature = "flashcards")]
pub use flashcards::{CardView, Deck, Direction, Side};

#[cfg(feature = "quiz")]
pub use quiz::{Answer, Question, QuestionKind, Quiz, QuizOptions, QuizReport, SmallSetPolicy};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Study engine for one term set.
///
/// The engine owns a validated [`TermSet`] and the random source every
/// session it creates draws from. Sessions are independent of each other and
/// of the engine once created.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use studyset_engine::{Engine, TermSet};
///
/// # fn main() -> studyset_engine::Result<()> {
/// let set = TermSet::builder("Colors").term("red", "rojo").build()?;
///
/// // Entropy-seeded
/// let engine = Engine::new(set.clone())?;
///
/// // Or with any random source
/// let engine = Engine::with_rng(set, StdRng::seed_from_u64(3))?;
/// assert_eq!(engine.set().name, "Colors");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    set: TermSet,
    rng: R,
}

impl Engine<StdRng> {
    /// Create an engine with an entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the set fails validation (for example, it has no
    /// terms).
    pub fn new(set: TermSet) -> Result<Self> {
        Self::with_rng(set, StdRng::from_entropy())
    }

    /// Create an engine whose random decisions are reproducible.
    pub fn with_seed(set: TermSet, seed: u64) -> Result<Self> {
        Self::with_rng(set, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine with a caller-supplied random source.
    pub fn with_rng(set: TermSet, rng: R) -> Result<Self> {
        set.validate()?;
        Ok(Self { set, rng })
    }

    /// The set being studied.
    pub fn set(&self) -> &TermSet {
        &self.set
    }

    /// The random source, for session operations that need one.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Start a flashcard deck in the set's authored order.
    #[cfg(feature = "flashcards")]
    pub fn flashcards(&self) -> Result<Deck> {
        Deck::new(&self.set.terms)
    }

    /// Generate a quiz with default options.
    #[cfg(feature = "quiz")]
    pub fn quiz(&mut self) -> Result<Quiz> {
        self.quiz_with(QuizOptions::default())
    }

    /// Generate a quiz with the given options.
    #[cfg(feature = "quiz")]
    pub fn quiz_with(&mut self, options: QuizOptions) -> Result<Quiz> {
        Quiz::generate(&self.set.terms, options, &mut self.rng)
    }
}
