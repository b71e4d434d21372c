//! Term set model and set definition files.
//!
//! # Example TOML
//!
//! ```toml
//! id = 7
//! name = "Animals"
//! description = "Common household animals"
//! public = true
//!
//! [creator]
//! id = "5b0c"
//! username = "ada"
//!
//! [[terms]]
//! id = 1
//! term = "cat"
//! definition = "a feline"
//!
//! [[terms]]
//! id = 2
//! term = "dog"
//! definition = "a canine"
//! ```
//!
//! The JSON form carries the same structure as a single object.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};

/// A single term/definition pair.
///
/// Terms are identified by `id`; two terms with equal text are still distinct
/// cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Term ID, unique within its set.
    pub id: i64,

    /// The term side of the card (also the expected quiz answer).
    pub term: String,

    /// The definition side of the card (also the quiz prompt).
    pub definition: String,
}

impl Term {
    /// Create a term.
    pub fn new(id: i64, term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// The user who created a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// User ID.
    pub id: String,

    /// Display name.
    pub username: String,

    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A studyable set of terms.
///
/// A `TermSet` is a read-only snapshot: study sessions copy its terms and never
/// write back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSet {
    /// Set ID.
    #[serde(default)]
    pub id: i64,

    /// Set name.
    pub name: String,

    /// Set description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the set is visible to other users.
    #[serde(default)]
    pub public: bool,

    /// The set's creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,

    /// Creation timestamp as provided by the data layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Terms in their authored order.
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl TermSet {
    /// Start building a set programmatically.
    pub fn builder(name: impl Into<String>) -> TermSetBuilder {
        TermSetBuilder::new(name)
    }

    /// Load a set from a `.toml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// fails to parse, or fails [`validate()`](Self::validate).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::parse_toml(&std::fs::read_to_string(path)?),
            "json" => Self::parse_json(&std::fs::read_to_string(path)?),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a set from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let set: TermSet = toml::from_str(content)?;
        set.validate()?;
        Ok(set)
    }

    /// Parse a set from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        let set: TermSet = serde_json::from_str(content)?;
        set.validate()?;
        Ok(set)
    }

    /// Check that the set can back a study session.
    ///
    /// A set must have a non-blank name, at least one term, and unique term
    /// ids.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidDefinition("set name is blank".to_string()));
        }

        if self.terms.is_empty() {
            return Err(Error::EmptySet(self.name.clone()));
        }

        let mut seen = HashSet::with_capacity(self.terms.len());
        for term in &self.terms {
            if !seen.insert(term.id) {
                return Err(Error::DuplicateTermId {
                    set: self.name.clone(),
                    id: term.id,
                });
            }
        }

        Ok(())
    }

    /// Number of terms in the set.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get a term by id.
    pub fn term(&self, id: i64) -> Option<&Term> {
        self.terms.iter().find(|t| t.id == id)
    }

    /// Number of distinct term strings in the set.
    ///
    /// Multiple-choice questions need at least four to offer three distinct
    /// wrong answers.
    pub fn distinct_term_count(&self) -> usize {
        distinct_term_count(&self.terms)
    }
}

/// Count the distinct `term` strings in a slice of terms.
pub fn distinct_term_count(terms: &[Term]) -> usize {
    terms
        .iter()
        .map(|t| t.term.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Builder for [`TermSet`].
///
/// Term ids are assigned sequentially starting at 1.
///
/// # Example
///
/// ```
/// use studyset::TermSet;
///
/// let set = TermSet::builder("Capitals")
///     .term("Paris", "capital of France")
///     .term("Rome", "capital of Italy")
///     .build()
///     .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.terms[1].id, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TermSetBuilder {
    set: TermSet,
}

impl TermSetBuilder {
    /// Create a builder for a set with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            set: TermSet {
                id: 0,
                name: name.into(),
                description: None,
                public: false,
                creator: None,
                created_at: None,
                terms: Vec::new(),
            },
        }
    }

    /// Set the set ID.
    pub fn id(mut self, id: i64) -> Self {
        self.set.id = id;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.set.description = Some(description.into());
        self
    }

    /// Mark the set public or private.
    pub fn public(mut self, public: bool) -> Self {
        self.set.public = public;
        self
    }

    /// Set the creator.
    pub fn creator(mut self, creator: Creator) -> Self {
        self.set.creator = Some(creator);
        self
    }

    /// Append a term.
    pub fn term(mut self, term: impl Into<String>, definition: impl Into<String>) -> Self {
        let id = self.set.terms.len() as i64 + 1;
        self.set.terms.push(Term::new(id, term, definition));
        self
    }

    /// Finish the set, validating it.
    pub fn build(self) -> Result<TermSet> {
        self.set.validate()?;
        Ok(self.set)
    }
}
