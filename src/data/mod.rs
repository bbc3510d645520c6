//! Core data structures shared by the reasoning engines.
//!
//! Terms, atoms, literals, clauses and rules are plain values with structural
//! equality; the insert-only stores in [`store`] hold the growing clause and
//! fact sets.

pub mod clause;
pub mod literal;
pub mod rule;
pub mod store;
pub mod term;

pub use clause::Clause;
pub use literal::{Atom, Literal};
pub use rule::Rule;
pub use store::{AppendSet, ClauseSet, FactSet};
pub use term::{Constant, Term, Variable};
