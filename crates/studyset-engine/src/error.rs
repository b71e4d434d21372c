//! Error types for studyset-engine.
//!
//! Engine errors are caller contract violations: an empty set handed to a
//! session, an answer addressed to a question that does not exist, or an
//! answer of the wrong shape for its question. None of them are transient.
//!
//! # Example
//!
//! ```
//! use studyset_engine::{Answer, Error, Quiz, QuizOptions, Term};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let terms = vec![Term::new(1, "Paris", "capital of France")];
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut quiz = Quiz::generate(&terms, QuizOptions::default(), &mut rng).unwrap();
//!
//! match quiz.answer(5, Answer::text("Paris")) {
//!     Err(Error::QuestionIndexOutOfRange { index, len }) => {
//!         assert_eq!((index, len), (5, 1));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Result type for studyset-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during engine operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from loading or validating the term set.
    #[error(transparent)]
    Set(#[from] studyset::Error),

    /// A session was constructed from a set with no terms.
    #[error("cannot study an empty set")]
    EmptySet,

    /// An answer addressed a question that does not exist.
    #[error("question {index} out of range (quiz has {len} questions)")]
    QuestionIndexOutOfRange {
        /// The requested question index.
        index: usize,
        /// Number of questions in the quiz.
        len: usize,
    },

    /// A multiple-choice selection addressed an option that does not exist.
    #[error("choice {choice} out of range (question has {len} options)")]
    ChoiceOutOfRange {
        /// The requested option index.
        choice: usize,
        /// Number of options offered.
        len: usize,
    },

    /// The answer shape does not match the question kind.
    #[error("{answer} answer given to {question} question")]
    AnswerMismatch {
        /// Kind of question answered.
        question: &'static str,
        /// Kind of answer given.
        answer: &'static str,
    },

    /// A validation error occurred.
    #[error("validation error: {0}")]
    Validation(String),
}
