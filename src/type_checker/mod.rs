//! Type inference over the typed data model.
//!
//! The checker infers a type for every expression against a small
//! structural lattice. List types can be partially known: a list may be
//! statically empty, statically non-empty with a known element type, or
//! possibly empty. List-type unification reconciles two such types into
//! the most specific common one.
//!
//! Type checking is an independent pass over the program: its results are
//! diagnostics, and callers decide whether they block emission.

pub mod type_checker;
pub mod types;

#[cfg(test)]
pub mod tests;
