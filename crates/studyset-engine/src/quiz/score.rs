//! Live quiz scoring.
//!
//! Each [`QuizItem`] remembers whether its current answer is correct and
//! reports a [`CorrectnessChange`] only when that flips. The [`Scoreboard`]
//! is a plain additive reducer over those changes, so the count stays exact
//! as long as items only report transitions.

use serde::Serialize;

use super::generate::{Answer, Question};
use crate::Result;

/// A question's answer moved between incorrect and correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorrectnessChange {
    /// Index of the question in the quiz.
    pub question: usize,
    /// Whether the question is now answered correctly.
    pub correct: bool,
}

/// A question together with the user's current answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    question: Question,
    answer: Option<Answer>,
    correct: bool,
}

impl QuizItem {
    pub(crate) fn new(question: Question) -> Self {
        Self {
            question,
            answer: None,
            correct: false,
        }
    }

    /// The question.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// The current answer, if any.
    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    /// Whether the current answer is correct.
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Replace the current answer.
    ///
    /// Returns a change only when correctness flips. A rejected answer leaves
    /// the item untouched.
    pub(crate) fn respond(
        &mut self,
        index: usize,
        answer: Answer,
    ) -> Result<Option<CorrectnessChange>> {
        let correct = self.question.is_correct(&answer)?;
        self.answer = Some(answer);

        if correct == self.correct {
            return Ok(None);
        }

        self.correct = correct;
        Ok(Some(CorrectnessChange {
            question: index,
            correct,
        }))
    }
}

/// Running count of correct answers plus the snapshot taken at submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    correct: usize,
    result: Option<usize>,
}

impl Scoreboard {
    /// An empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one correctness change into the count.
    ///
    /// No deduplication happens here; callers must only report transitions.
    /// An incorrect change with nothing counted leaves the count at zero.
    pub fn apply(&mut self, change: CorrectnessChange) {
        if change.correct {
            self.correct += 1;
        } else {
            self.correct = self.correct.saturating_sub(1);
        }
    }

    /// Questions currently answered correctly.
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Snapshot the current count as the result.
    pub fn submit(&mut self) -> usize {
        self.result = Some(self.correct);
        self.correct
    }

    /// The count captured by the last submit.
    pub fn result(&self) -> Option<usize> {
        self.result
    }

    /// Clear the count and the result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
