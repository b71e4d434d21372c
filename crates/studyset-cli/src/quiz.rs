//! Interactive quiz loop.
//!
//! Questions are asked in order. Each input line is the answer; `:r` starts a
//! new quiz and `:q` quits. Once every question is answered the score is
//! submitted and printed.

use std::error::Error;
use std::io::{BufRead, Write};

use rand::Rng;
use studyset_engine::{Question, Quiz};
use tracing::debug;

const QUIT: &str = ":q";
const REGENERATE: &str = ":r";

/// What the loop does after a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Answered,
    Regenerate,
    Quit,
}

fn render<W: Write>(
    question: &Question,
    index: usize,
    total: usize,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "Question {} / {}: {}", index + 1, total, question.prompt())?;
    if let Some(options) = question.options() {
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "  {}) {}", i + 1, option)?;
        }
    }
    write!(out, "> ")?;
    out.flush()
}

/// Parse a 1-based option number.
fn parse_choice(line: &str, len: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn ask<I, W>(
    quiz: &mut Quiz,
    index: usize,
    lines: &mut I,
    out: &mut W,
) -> Result<Flow, Box<dyn Error>>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    let Some(question) = quiz.question(index).cloned() else {
        return Ok(Flow::Quit);
    };
    render(&question, index, quiz.len(), out)?;

    loop {
        let Some(line) = lines.next().transpose()? else {
            return Ok(Flow::Quit);
        };

        match line.as_str() {
            QUIT => return Ok(Flow::Quit),
            REGENERATE => return Ok(Flow::Regenerate),
            _ => {}
        }

        match question.options() {
            None => {
                quiz.type_answer(index, line)?;
                return Ok(Flow::Answered);
            }
            Some(options) => match parse_choice(&line, options.len()) {
                Some(choice) => {
                    quiz.choose(index, choice)?;
                    return Ok(Flow::Answered);
                }
                None => {
                    debug!(input = %line, "invalid choice");
                    write!(out, "Pick 1-{}\n> ", options.len())?;
                    out.flush()?;
                }
            },
        }
    }
}

fn print_report<W: Write>(quiz: &Quiz, out: &mut W) -> std::io::Result<()> {
    let report = quiz.report();
    writeln!(
        out,
        "Score: {} / {} ({:.0}%)",
        report.correct, report.total, report.percentage
    )?;

    for (index, item) in quiz.items().iter().enumerate() {
        if !item.is_correct() {
            let term = item.question().term();
            writeln!(out, "  {}. {} -> {}", index + 1, term.definition, term.term)?;
        }
    }

    Ok(())
}

/// Run `quiz` from line-based input until quit or end of input.
pub fn run<R, I, W>(
    quiz: &mut Quiz,
    rng: &mut R,
    input: I,
    mut out: W,
) -> Result<(), Box<dyn Error>>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "Type each answer. {} new quiz, {} quit.", REGENERATE, QUIT)?;

    'session: loop {
        for index in 0..quiz.len() {
            match ask(quiz, index, &mut lines, &mut out)? {
                Flow::Answered => {}
                Flow::Regenerate => {
                    quiz.regenerate(rng)?;
                    writeln!(out, "New quiz.")?;
                    continue 'session;
                }
                Flow::Quit => break 'session,
            }
        }

        quiz.submit();
        print_report(quiz, &mut out)?;

        write!(out, "{} for a new quiz, anything else quits.\n> ", REGENERATE)?;
        out.flush()?;
        match lines.next().transpose()? {
            Some(line) if line == REGENERATE => {
                quiz.regenerate(rng)?;
                writeln!(out, "New quiz.")?;
            }
            _ => break,
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use studyset_engine::{QuestionKind, QuizOptions, Term};

    fn capitals() -> Vec<Term> {
        vec![
            Term::new(1, "Paris", "capital of France"),
            Term::new(2, "Rome", "capital of Italy"),
            Term::new(3, "Madrid", "capital of Spain"),
            Term::new(4, "Berlin", "capital of Germany"),
        ]
    }

    fn quiz_with(kinds: &[QuestionKind]) -> Quiz {
        let mut rng = StdRng::seed_from_u64(12);
        Quiz::generate(
            &capitals(),
            QuizOptions::with_kinds(kinds.to_vec()),
            &mut rng,
        )
        .unwrap()
    }

    fn run_script(quiz: &mut Quiz, script: &str) -> String {
        let mut rng = StdRng::seed_from_u64(0);
        let mut out = Vec::new();
        run(quiz, &mut rng, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 4), Some(0));
        assert_eq!(parse_choice(" 4 ", 4), Some(3));
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("b", 4), None);
    }

    #[test]
    fn test_fill_quiz_all_correct() {
        let mut quiz = quiz_with(&[QuestionKind::Fill]);
        let script: String = quiz
            .questions()
            .map(|q| format!("{}\n", q.term().term))
            .collect();

        let output = run_script(&mut quiz, &script);

        assert_eq!(quiz.result(), Some(4));
        assert!(output.contains("Score: 4 / 4 (100%)"));
    }

    #[test]
    fn test_fill_answers_are_exact() {
        let mut quiz = quiz_with(&[QuestionKind::Fill]);
        let script: String = quiz
            .questions()
            .map(|q| format!("{}\n", q.term().term.to_lowercase()))
            .collect();

        let output = run_script(&mut quiz, &script);

        assert_eq!(quiz.result(), Some(0));
        assert!(output.contains("capital of France -> Paris"));
    }

    #[test]
    fn test_choice_quiz_retries_invalid_input() {
        let mut quiz = quiz_with(&[QuestionKind::MultipleChoice]);
        let mut script = String::new();
        for question in quiz.questions() {
            let options = question.options().unwrap();
            let right = options.iter().position(|o| *o == question.term().term).unwrap();
            script.push_str("nine\n");
            script.push_str(&format!("{}\n", right + 1));
        }

        let output = run_script(&mut quiz, &script);

        assert_eq!(quiz.result(), Some(4));
        assert_eq!(output.matches("Pick 1-4").count(), 4);
    }

    #[test]
    fn test_quit_mid_quiz() {
        let mut quiz = quiz_with(&[QuestionKind::Fill]);
        run_script(&mut quiz, ":q\n");
        assert_eq!(quiz.result(), None);
    }

    #[test]
    fn test_regenerate_mid_quiz() {
        let mut quiz = quiz_with(&[QuestionKind::Fill]);
        let first = quiz.question(0).unwrap().term().term.clone();

        let output = run_script(&mut quiz, &format!("{}\n:r\n", first));

        assert!(output.contains("New quiz."));
        assert_eq!(quiz.correct_count(), 0);
        assert_eq!(quiz.result(), None);
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut quiz = quiz_with(&[QuestionKind::Fill]);
        let output = run_script(&mut quiz, "");
        assert!(output.contains("Question 1 / 4"));
        assert_eq!(quiz.result(), None);
    }
}
