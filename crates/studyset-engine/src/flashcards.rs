//! Flashcard deck traversal.
//!
//! A [`Deck`] is a circular, two-sided walk over a copy of a set's terms. The
//! deck keeps an unbounded signed position and derives the shown card by
//! Euclidean modulo, so stepping backwards past the first card wraps to the
//! last one and the position doubles as a stable animation key.
//!
//! # Example
//!
//! ```
//! use studyset_engine::flashcards::{Deck, Side};
//! use studyset_engine::Term;
//!
//! let terms = vec![
//!     Term::new(1, "A", "first"),
//!     Term::new(2, "B", "second"),
//!     Term::new(3, "C", "third"),
//! ];
//! let mut deck = Deck::new(&terms).unwrap();
//!
//! deck.previous();
//! deck.previous();
//! assert_eq!(deck.current().term, "B");
//!
//! deck.flip();
//! assert_eq!(deck.side(), Side::Definition);
//! assert_eq!(deck.face(), "second");
//!
//! deck.next();
//! assert_eq!(deck.side(), Side::Term);
//! ```

use rand::Rng;
use serde::Serialize;
use studyset::Term;
use tracing::debug;

use crate::shuffle::shuffle;
use crate::{Error, Result};

/// Horizontal distance a card travels while entering or leaving.
pub const TRANSITION_DISTANCE: f32 = 250.0;

/// Direction of the most recent navigation.
///
/// Only the transition layer reads this; it has no effect on which card is
/// shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Moved to the next card.
    #[default]
    Forward,
    /// Moved to the previous card.
    Backward,
}

impl Direction {
    /// Horizontal offset the incoming card starts from.
    pub fn enter_offset(self, distance: f32) -> f32 {
        match self {
            Direction::Forward => -distance,
            Direction::Backward => distance,
        }
    }

    /// Horizontal offset the outgoing card leaves towards.
    pub fn exit_offset(self, distance: f32) -> f32 {
        -self.enter_offset(distance)
    }
}

/// The face of a card currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The term face.
    #[default]
    Term,
    /// The definition face.
    Definition,
}

/// Snapshot of the card on screen, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// 1-based card number.
    pub number: usize,
    /// Cards in the deck.
    pub total: usize,
    /// Face shown.
    pub side: Side,
    /// Text on the face shown.
    pub text: String,
    /// Direction of the last navigation.
    pub direction: Direction,
    /// Unwrapped position; changes on every navigation, even when the shown
    /// card is the same.
    pub key: i64,
}

/// A circular, shuffleable flashcard deck.
#[derive(Debug, Clone)]
pub struct Deck {
    order: Vec<Term>,
    position: i64,
    direction: Direction,
    flipped: bool,
}

impl Deck {
    /// Create a deck over a copy of `terms`, showing the first term face up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySet`] if `terms` is empty.
    pub fn new(terms: &[Term]) -> Result<Self> {
        if terms.is_empty() {
            return Err(Error::EmptySet);
        }

        Ok(Self {
            order: terms.to_vec(),
            position: 0,
            direction: Direction::Forward,
            flipped: false,
        })
    }

    /// Advance to the next card.
    pub fn next(&mut self) {
        self.position += 1;
        self.direction = Direction::Forward;
        self.flipped = false;
        debug!(position = self.position, index = self.index(), "next card");
    }

    /// Step back to the previous card.
    pub fn previous(&mut self) {
        self.position -= 1;
        self.direction = Direction::Backward;
        self.flipped = false;
        debug!(position = self.position, index = self.index(), "previous card");
    }

    /// Turn the current card over.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Replace the deck order with a random permutation of the current order.
    ///
    /// The position is kept, so the card shown afterwards is whichever term
    /// the permutation placed at the current index.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        shuffle(&mut self.order, rng);
        debug!(
            position = self.position,
            current = self.current().id,
            "deck shuffled"
        );
    }

    /// Index of the shown card in [`order()`](Self::order), always in
    /// `[0, len)`.
    pub fn index(&self) -> usize {
        // `order` is never empty and fits in i64, so the cast is lossless.
        self.position.rem_euclid(self.order.len() as i64) as usize
    }

    /// The shown term.
    pub fn current(&self) -> &Term {
        &self.order[self.index()]
    }

    /// Text on the face shown.
    pub fn face(&self) -> &str {
        let term = self.current();
        match self.side() {
            Side::Term => &term.term,
            Side::Definition => &term.definition,
        }
    }

    /// Face shown.
    pub fn side(&self) -> Side {
        if self.flipped {
            Side::Definition
        } else {
            Side::Term
        }
    }

    /// Whether the definition face is shown.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Unwrapped position.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Direction of the last navigation.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current deck order.
    pub fn order(&self) -> &[Term] {
        &self.order
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false; a deck cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot the shown card.
    pub fn view(&self) -> CardView {
        CardView {
            number: self.index() + 1,
            total: self.len(),
            side: self.side(),
            text: self.face().to_string(),
            direction: self.direction,
            key: self.position,
        }
    }
}
