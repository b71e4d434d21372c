//! Interactive flashcard loop.

use std::io::{self, BufRead, Write};

use rand::Rng;
use studyset_engine::{Deck, Direction, Side};
use tracing::debug;

const HELP: &str = "[n]ext  [p]revious  [f]lip  [s]huffle  [q]uit";

/// A keyboard command for the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Next,
    Previous,
    Flip,
    Shuffle,
    Quit,
}

impl Key {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" | "n" | "next" => Some(Key::Next),
            "p" | "prev" | "previous" => Some(Key::Previous),
            "f" | "flip" => Some(Key::Flip),
            "s" | "shuffle" => Some(Key::Shuffle),
            "q" | "quit" => Some(Key::Quit),
            _ => None,
        }
    }
}

fn render<W: Write>(deck: &Deck, out: &mut W) -> io::Result<()> {
    let view = deck.view();
    let arrow = match view.direction {
        Direction::Forward => ">",
        Direction::Backward => "<",
    };
    let side = match view.side {
        Side::Term => "term",
        Side::Definition => "definition",
    };
    writeln!(
        out,
        "{} {} / {} ({})\n    {}",
        arrow, view.number, view.total, side, view.text
    )
}

/// Drive `deck` from line-based input until quit or end of input.
pub fn run<R, I, W>(deck: &mut Deck, rng: &mut R, input: I, mut out: W) -> io::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    render(deck, &mut out)?;

    for line in input.lines() {
        let line = line?;
        match Key::parse(&line) {
            Some(Key::Next) => deck.next(),
            Some(Key::Previous) => deck.previous(),
            Some(Key::Flip) => deck.flip(),
            Some(Key::Shuffle) => {
                deck.shuffle(rng);
                writeln!(out, "Shuffled.")?;
            }
            Some(Key::Quit) => break,
            None => {
                debug!(input = %line, "unknown flashcard command");
                writeln!(out, "{}", HELP)?;
                continue;
            }
        }
        render(deck, &mut out)?;
    }

    out.flush()
}
