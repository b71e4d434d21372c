//! Question synthesis and distractor sampling.

use rand::Rng;
use serde::Serialize;
use studyset::{Term, distinct_term_count};
use tracing::{debug, warn};

use crate::shuffle::shuffled;
use crate::{Error, Result};

/// Distinct term strings a set needs for full multiple-choice questions.
pub const MIN_CHOICE_TERMS: usize = 4;

/// Wrong answers offered alongside the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Distinct term strings a set needs for short multiple-choice questions
/// under [`SmallSetPolicy::Degraded`].
pub const MIN_DEGRADED_CHOICE_TERMS: usize = 2;

/// Kind of quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free-text recall of the term.
    Fill,
    /// Pick the term from a list of options.
    MultipleChoice,
}

impl QuestionKind {
    /// Every question kind.
    pub const ALL: [QuestionKind; 2] = [QuestionKind::Fill, QuestionKind::MultipleChoice];

    /// Short name for messages.
    pub fn name(self) -> &'static str {
        match self {
            QuestionKind::Fill => "fill",
            QuestionKind::MultipleChoice => "multiple choice",
        }
    }
}

/// What to do when a set is too small for four-option multiple choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmallSetPolicy {
    /// Generate only fill questions.
    #[default]
    FillOnly,
    /// Keep multiple choice with fewer than four options, as long as the set
    /// has at least [`MIN_DEGRADED_CHOICE_TERMS`] distinct terms.
    Degraded,
}

/// Options for quiz generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOptions {
    /// Kinds to draw from; each question picks one uniformly from this list.
    pub kinds: Vec<QuestionKind>,
    /// Behavior for sets with fewer than [`MIN_CHOICE_TERMS`] distinct terms.
    pub small_sets: SmallSetPolicy,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            kinds: QuestionKind::ALL.to_vec(),
            small_sets: SmallSetPolicy::default(),
        }
    }
}

impl QuizOptions {
    /// Options drawing only from the given kinds.
    pub fn with_kinds(kinds: impl IntoIterator<Item = QuestionKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Kinds to sample from for a set with `distinct_terms` distinct term
    /// strings.
    fn effective_kinds(&self, distinct_terms: usize) -> Result<Vec<QuestionKind>> {
        if self.kinds.is_empty() {
            return Err(Error::Validation("no question kinds selected".to_string()));
        }

        if distinct_terms >= MIN_CHOICE_TERMS
            || !self.kinds.contains(&QuestionKind::MultipleChoice)
        {
            return Ok(self.kinds.clone());
        }

        if self.small_sets == SmallSetPolicy::Degraded
            && distinct_terms >= MIN_DEGRADED_CHOICE_TERMS
        {
            warn!(
                distinct_terms,
                "set too small for full multiple choice, options will be short"
            );
            return Ok(self.kinds.clone());
        }

        let needed = match self.small_sets {
            SmallSetPolicy::FillOnly => MIN_CHOICE_TERMS,
            SmallSetPolicy::Degraded => MIN_DEGRADED_CHOICE_TERMS,
        };
        let kinds: Vec<_> = self
            .kinds
            .iter()
            .copied()
            .filter(|k| *k != QuestionKind::MultipleChoice)
            .collect();
        if kinds.is_empty() {
            return Err(Error::Validation(format!(
                "multiple choice needs at least {} distinct terms, set has {}",
                needed, distinct_terms
            )));
        }
        debug!(distinct_terms, "set too small for multiple choice, using fill only");
        Ok(kinds)
    }
}

/// A user's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Typed text for a fill question.
    Text(String),
    /// Index of the selected option for a multiple-choice question.
    Choice(usize),
}

impl Answer {
    /// A typed answer.
    pub fn text(text: impl Into<String>) -> Self {
        Answer::Text(text.into())
    }

    fn name(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Choice(_) => "choice",
        }
    }
}

/// One generated quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Recall the term for its definition.
    Fill {
        /// The term being asked about.
        term: Term,
    },
    /// Pick the term for its definition.
    MultipleChoice {
        /// The term being asked about.
        term: Term,
        /// Options in presentation order; exactly one equals `term.term`.
        options: Vec<String>,
    },
}

impl Question {
    /// The term being asked about.
    pub fn term(&self) -> &Term {
        match self {
            Question::Fill { term } | Question::MultipleChoice { term, .. } => term,
        }
    }

    /// Kind of this question.
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::Fill { .. } => QuestionKind::Fill,
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
        }
    }

    /// The definition shown as the question.
    pub fn prompt(&self) -> &str {
        &self.term().definition
    }

    /// Options for a multiple-choice question, `None` for fill.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Question::Fill { .. } => None,
            Question::MultipleChoice { options, .. } => Some(options.as_slice()),
        }
    }

    /// Whether `answer` is correct.
    ///
    /// Fill answers must equal the term exactly (case-sensitive, untrimmed).
    /// Choices are correct when the selected option equals the term.
    ///
    /// # Errors
    ///
    /// [`Error::AnswerMismatch`] if the answer shape does not fit the
    /// question, [`Error::ChoiceOutOfRange`] for a choice past the options.
    pub fn is_correct(&self, answer: &Answer) -> Result<bool> {
        match (self, answer) {
            (Question::Fill { term }, Answer::Text(text)) => Ok(*text == term.term),
            (Question::MultipleChoice { term, options }, Answer::Choice(choice)) => options
                .get(*choice)
                .map(|option| *option == term.term)
                .ok_or(Error::ChoiceOutOfRange {
                    choice: *choice,
                    len: options.len(),
                }),
            _ => Err(Error::AnswerMismatch {
                question: self.kind().name(),
                answer: answer.name(),
            }),
        }
    }
}

/// Generate one question per term, in a fresh random order.
///
/// Each question's kind is drawn uniformly from the options' kinds.
/// Multiple-choice options come from [`generate_distractors`].
///
/// # Errors
///
/// [`Error::EmptySet`] for no terms, [`Error::Validation`] if no usable
/// question kind remains.
pub fn generate_questions<R>(
    terms: &[Term],
    options: &QuizOptions,
    rng: &mut R,
) -> Result<Vec<Question>>
where
    R: Rng + ?Sized,
{
    if terms.is_empty() {
        return Err(Error::EmptySet);
    }

    let kinds = options.effective_kinds(distinct_term_count(terms))?;

    let questions: Vec<Question> = shuffled(terms, rng)
        .into_iter()
        .map(|term| match kinds[rng.gen_range(0..kinds.len())] {
            QuestionKind::Fill => Question::Fill { term },
            QuestionKind::MultipleChoice => {
                let options = generate_distractors(terms, &term.term, rng);
                Question::MultipleChoice { term, options }
            }
        })
        .collect();

    debug!(
        questions = questions.len(),
        multiple_choice = questions
            .iter()
            .filter(|q| q.kind() == QuestionKind::MultipleChoice)
            .count(),
        "generated quiz"
    );

    Ok(questions)
}

/// Build the option list for a multiple-choice question.
///
/// Scans a fresh shuffle of `terms` for up to [`DISTRACTOR_COUNT`] distinct
/// term strings different from `correct`, then puts `correct` at a uniformly
/// random slot, moving the option that held that slot to the end.
///
/// With at least [`MIN_CHOICE_TERMS`] distinct term strings the result has
/// exactly four unique options. Smaller sets yield a shorter list.
pub fn generate_distractors<R>(terms: &[Term], correct: &str, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut options: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    for term in shuffled(terms, rng) {
        if options.len() == DISTRACTOR_COUNT {
            break;
        }
        if term.term != correct && !options.contains(&term.term) {
            options.push(term.term);
        }
    }

    let slot = rng.gen_range(0..=options.len());
    if slot < options.len() {
        let displaced = std::mem::replace(&mut options[slot], correct.to_string());
        options.push(displaced);
    } else {
        options.push(correct.to_string());
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn animals() -> Vec<Term> {
        vec![
            Term::new(1, "cat", "a feline"),
            Term::new(2, "dog", "a canine"),
            Term::new(3, "bird", "an avian"),
            Term::new(4, "fish", "an aquatic animal"),
        ]
    }

    fn many_terms(n: i64) -> Vec<Term> {
        (1..=n)
            .map(|i| Term::new(i, format!("term{}", i), format!("def{}", i)))
            .collect()
    }

    #[test]
    fn test_distractors_four_unique_options() {
        let terms = many_terms(12);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let options = generate_distractors(&terms, "term3", &mut rng);
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| *o == "term3").count(), 1);
            let unique: HashSet<_> = options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_distractors_for_cat() {
        let terms = animals();
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..50 {
            let options = generate_distractors(&terms, "cat", &mut rng);
            let mut sorted = options.clone();
            sorted.sort();
            assert_eq!(sorted, vec!["bird", "cat", "dog", "fish"]);
        }
    }

    #[test]
    fn test_correct_answer_lands_in_every_slot() {
        let terms = many_terms(8);
        let mut rng = StdRng::seed_from_u64(21);
        let mut slots = [0usize; 4];

        for _ in 0..400 {
            let options = generate_distractors(&terms, "term1", &mut rng);
            let slot = options.iter().position(|o| o == "term1").unwrap();
            slots[slot] += 1;
        }

        for count in slots {
            assert!(count > 50, "slot counts {:?}", slots);
        }
    }

    #[test]
    fn test_distractors_skip_repeated_text() {
        let terms = vec![
            Term::new(1, "cat", "a feline"),
            Term::new(2, "cat", "a house cat"),
            Term::new(3, "dog", "a canine"),
            Term::new(4, "dog", "a hound"),
            Term::new(5, "bird", "an avian"),
            Term::new(6, "fish", "an aquatic animal"),
        ];
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..50 {
            let options = generate_distractors(&terms, "cat", &mut rng);
            assert_eq!(options.len(), 4);
            let unique: HashSet<_> = options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_distractors_small_set_has_no_holes() {
        let terms = vec![Term::new(1, "yes", "affirmative"), Term::new(2, "no", "negative")];
        let mut rng = StdRng::seed_from_u64(1);

        let options = generate_distractors(&terms, "yes", &mut rng);
        assert_eq!(options.len(), 2);
        assert!(options.contains(&"yes".to_string()));
        assert!(options.contains(&"no".to_string()));
    }

    #[test]
    fn test_questions_cover_every_term_once() {
        let terms = animals();
        let mut rng = StdRng::seed_from_u64(99);

        let questions = generate_questions(&terms, &QuizOptions::default(), &mut rng).unwrap();
        assert_eq!(questions.len(), 4);

        let mut ids: Vec<_> = questions.iter().map(|q| q.term().id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        for question in &questions {
            if let Some(options) = question.options() {
                assert_eq!(options.len(), 4);
                assert_eq!(
                    options.iter().filter(|o| **o == question.term().term).count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_both_kinds_generated() {
        let terms = many_terms(40);
        let mut rng = StdRng::seed_from_u64(4);

        let questions = generate_questions(&terms, &QuizOptions::default(), &mut rng).unwrap();
        let kinds: HashSet<_> = questions.iter().map(|q| q.kind()).collect();
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn test_fill_only_kinds() {
        let terms = many_terms(10);
        let mut rng = StdRng::seed_from_u64(4);

        let options = QuizOptions::with_kinds([QuestionKind::Fill]);
        let questions = generate_questions(&terms, &options, &mut rng).unwrap();
        assert!(questions.iter().all(|q| q.kind() == QuestionKind::Fill));
    }

    #[test]
    fn test_small_set_falls_back_to_fill() {
        let terms = many_terms(3);
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..20 {
            let questions =
                generate_questions(&terms, &QuizOptions::default(), &mut rng).unwrap();
            assert!(questions.iter().all(|q| q.kind() == QuestionKind::Fill));
        }
    }

    #[test]
    fn test_small_set_choice_only_rejected() {
        let terms = many_terms(2);
        let mut rng = StdRng::seed_from_u64(6);

        let options = QuizOptions::with_kinds([QuestionKind::MultipleChoice]);
        assert!(matches!(
            generate_questions(&terms, &options, &mut rng),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_small_set_degraded_choice() {
        let terms = many_terms(3);
        let mut rng = StdRng::seed_from_u64(6);

        let options = QuizOptions {
            kinds: vec![QuestionKind::MultipleChoice],
            small_sets: SmallSetPolicy::Degraded,
        };
        let questions = generate_questions(&terms, &options, &mut rng).unwrap();
        for question in questions {
            let options = question.options().unwrap();
            assert_eq!(options.len(), 3);
            assert!(options.contains(&question.term().term));
        }
    }

    #[test]
    fn test_degraded_choice_needs_two_distinct_terms() {
        let terms = vec![Term::new(1, "x", "first"), Term::new(2, "x", "second")];
        let mut rng = StdRng::seed_from_u64(6);

        let both = QuizOptions {
            kinds: QuestionKind::ALL.to_vec(),
            small_sets: SmallSetPolicy::Degraded,
        };
        let questions = generate_questions(&terms, &both, &mut rng).unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.options().is_none()));

        let choice_only = QuizOptions {
            kinds: vec![QuestionKind::MultipleChoice],
            small_sets: SmallSetPolicy::Degraded,
        };
        assert!(matches!(
            generate_questions(&terms, &choice_only, &mut rng),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_no_kinds_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let options = QuizOptions::with_kinds([]);
        assert!(matches!(
            generate_questions(&animals(), &options, &mut rng),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_empty_terms_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_questions(&[], &QuizOptions::default(), &mut rng),
            Err(Error::EmptySet)
        ));
    }

    #[test]
    fn test_fill_correctness_is_exact() {
        let question = Question::Fill {
            term: Term::new(1, "Paris", "capital of France"),
        };

        assert!(question.is_correct(&Answer::text("Paris")).unwrap());
        assert!(!question.is_correct(&Answer::text("paris")).unwrap());
        assert!(!question.is_correct(&Answer::text("Paris ")).unwrap());
        assert!(!question.is_correct(&Answer::text("Pari")).unwrap());
        assert_eq!(question.prompt(), "capital of France");
    }

    #[test]
    fn test_choice_correctness() {
        let question = Question::MultipleChoice {
            term: Term::new(1, "cat", "a feline"),
            options: vec!["dog".into(), "cat".into(), "bird".into(), "fish".into()],
        };

        assert!(question.is_correct(&Answer::Choice(1)).unwrap());
        assert!(!question.is_correct(&Answer::Choice(0)).unwrap());
        assert!(matches!(
            question.is_correct(&Answer::Choice(4)),
            Err(Error::ChoiceOutOfRange { choice: 4, len: 4 })
        ));
        assert!(matches!(
            question.is_correct(&Answer::text("cat")),
            Err(Error::AnswerMismatch { .. })
        ));
    }
}
