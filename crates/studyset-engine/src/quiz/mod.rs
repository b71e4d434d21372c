//! Quiz generation and scoring.
//!
//! A [`Quiz`] holds one generated battery of questions, one per term, with a
//! live count of correct answers. Answers can be changed freely; only a
//! change in a question's correctness moves the count.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use studyset_engine::quiz::{Answer, Question, Quiz, QuizOptions};
//! use studyset_engine::Term;
//!
//! let terms = vec![
//!     Term::new(1, "cat", "a feline"),
//!     Term::new(2, "dog", "a canine"),
//!     Term::new(3, "bird", "an avian"),
//!     Term::new(4, "fish", "an aquatic animal"),
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut quiz = Quiz::generate(&terms, QuizOptions::default(), &mut rng).unwrap();
//!
//! // Answer everything correctly.
//! for index in 0..quiz.len() {
//!     let answer = match quiz.question(index).unwrap() {
//!         Question::Fill { term } => Answer::text(term.term.clone()),
//!         Question::MultipleChoice { term, options } => {
//!             Answer::Choice(options.iter().position(|o| *o == term.term).unwrap())
//!         }
//!     };
//!     quiz.answer(index, answer).unwrap();
//! }
//!
//! assert_eq!(quiz.submit(), 4);
//!
//! quiz.regenerate(&mut rng).unwrap();
//! assert_eq!(quiz.correct_count(), 0);
//! assert_eq!(quiz.result(), None);
//! ```

mod generate;
mod score;

pub use generate::{
    Answer, DISTRACTOR_COUNT, MIN_CHOICE_TERMS, MIN_DEGRADED_CHOICE_TERMS, Question, QuestionKind,
    QuizOptions, SmallSetPolicy, generate_distractors, generate_questions,
};
pub use score::{CorrectnessChange, QuizItem, Scoreboard};

use rand::Rng;
use serde::Serialize;
use studyset::Term;
use tracing::debug;

use crate::{Error, Result};

/// Summary of a quiz's score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuizReport {
    /// Number of questions.
    pub total: usize,
    /// Questions currently answered correctly.
    pub correct: usize,
    /// Count captured at submit, if submitted.
    pub submitted: Option<usize>,
    /// `correct` as a percentage of `total`.
    pub percentage: f64,
}

/// One quiz session over a set of terms.
#[derive(Debug, Clone)]
pub struct Quiz {
    terms: Vec<Term>,
    options: QuizOptions,
    items: Vec<QuizItem>,
    score: Scoreboard,
}

impl Quiz {
    /// Generate a quiz over a copy of `terms`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySet`] for no terms, [`Error::Validation`] if `options`
    /// leave no usable question kind.
    pub fn generate<R>(terms: &[Term], options: QuizOptions, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let items = generate_items(terms, &options, rng)?;
        Ok(Self {
            terms: terms.to_vec(),
            options,
            items,
            score: Scoreboard::new(),
        })
    }

    /// Replace every question with a freshly generated battery and clear the
    /// score and result.
    pub fn regenerate<R>(&mut self, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        self.items = generate_items(&self.terms, &self.options, rng)?;
        self.score.reset();
        debug!(questions = self.items.len(), "quiz regenerated");
        Ok(())
    }

    /// Set the answer to question `index`.
    ///
    /// Returns the correctness change this caused, if any; the live count
    /// has already absorbed it.
    ///
    /// # Errors
    ///
    /// [`Error::QuestionIndexOutOfRange`] for a bad index, plus the answer
    /// errors of [`Question::is_correct`]. A failed answer changes nothing.
    pub fn answer(&mut self, index: usize, answer: Answer) -> Result<Option<CorrectnessChange>> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(Error::QuestionIndexOutOfRange { index, len })?;

        let change = item.respond(index, answer)?;
        if let Some(change) = change {
            self.score.apply(change);
            debug!(
                question = index,
                correct = change.correct,
                correct_count = self.score.correct_count(),
                "correctness changed"
            );
        }

        Ok(change)
    }

    /// Type an answer to a fill question.
    pub fn type_answer(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Option<CorrectnessChange>> {
        self.answer(index, Answer::Text(text.into()))
    }

    /// Select an option of a multiple-choice question, replacing any earlier
    /// selection.
    pub fn choose(&mut self, index: usize, choice: usize) -> Result<Option<CorrectnessChange>> {
        self.answer(index, Answer::Choice(choice))
    }

    /// Capture the live count as the result and return it.
    ///
    /// Answers stay editable afterwards; later edits move the live count but
    /// not the captured result.
    pub fn submit(&mut self) -> usize {
        let result = self.score.submit();
        debug!(result, total = self.items.len(), "quiz submitted");
        result
    }

    /// Questions currently answered correctly.
    pub fn correct_count(&self) -> usize {
        self.score.correct_count()
    }

    /// The count captured by the last submit.
    pub fn result(&self) -> Option<usize> {
        self.score.result()
    }

    /// Question `index`.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.items.get(index).map(QuizItem::question)
    }

    /// Questions in presentation order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.items.iter().map(QuizItem::question)
    }

    /// Questions with their current answers.
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Generation options.
    pub fn options(&self) -> &QuizOptions {
        &self.options
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a quiz cannot be generated from no terms.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Summarize the score.
    pub fn report(&self) -> QuizReport {
        let total = self.len();
        let correct = self.correct_count();
        let percentage = if total > 0 {
            correct as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        QuizReport {
            total,
            correct,
            submitted: self.result(),
            percentage,
        }
    }
}

fn generate_items<R>(terms: &[Term], options: &QuizOptions, rng: &mut R) -> Result<Vec<QuizItem>>
where
    R: Rng + ?Sized,
{
    Ok(generate_questions(terms, options, rng)?
        .into_iter()
        .map(QuizItem::new)
        .collect())
}
