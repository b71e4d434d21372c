//! Term set model for flashcard study sessions.
//!
//! A [`TermSet`] is an ordered collection of term/definition pairs. This crate
//! defines the model and loads set definitions from TOML or JSON files; the
//! study engines in `studyset-engine` consume the loaded set.
//!
//! # Usage
//!
//! ```no_run
//! use studyset::TermSet;
//!
//! let set = TermSet::from_file("animals.toml").unwrap();
//! println!("{} ({} terms)", set.name, set.len());
//! ```
//!
//! Sets can also be built in code:
//!
//! ```
//! use studyset::TermSet;
//!
//! # fn main() -> studyset::Result<()> {
//! let set = TermSet::builder("Animals")
//!     .term("cat", "a feline")
//!     .term("dog", "a canine")
//!     .build()?;
//! assert_eq!(set.distinct_term_count(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod set;

pub use error::{Error, Result};
pub use set::{Creator, Term, TermSet, TermSetBuilder, distinct_term_count};
