//! Common test utilities for studyset-engine session tests.

use studyset_engine::{Engine, Term, TermSet};

/// The four-animal set used across scenarios.
pub fn animals_set() -> TermSet {
    TermSet::builder("Animals")
        .term("cat", "a feline")
        .term("dog", "a canine")
        .term("bird", "an avian")
        .term("fish", "an aquatic animal")
        .build()
        .unwrap()
}

/// A set of `n` terms with distinct text.
#[allow(dead_code)]
pub fn numbered_set(n: usize) -> TermSet {
    (1..=n)
        .fold(TermSet::builder("Numbered"), |builder, i| {
            builder.term(format!("term{}", i), format!("definition {}", i))
        })
        .build()
        .unwrap()
}

/// Create a seeded engine for a set.
pub fn seeded_engine(set: TermSet, seed: u64) -> Engine {
    Engine::with_seed(set, seed).unwrap()
}

/// Ids of terms in order.
#[allow(dead_code)]
pub fn ids(terms: &[Term]) -> Vec<i64> {
    terms.iter().map(|t| t.id).collect()
}
