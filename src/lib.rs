//! Symbolic reasoning over a shared first-order term model.
//!
//! The crate provides unification with occurs check, a resolution refutation
//! prover, a forward chainer for positive Horn rules and a propositional
//! entailment checker based on truth-table enumeration.  Every engine runs
//! standalone on an in-memory knowledge base and returns a plain value.

pub mod config;
pub mod data;
pub mod demo;
pub mod error;
pub mod inference;
pub mod propositional;

pub use config::{FlagSet, ParameterSet, ParameterValue, Statistics};
pub use data::{
    AppendSet, Atom, Clause, ClauseSet, Constant, FactSet, Literal, Rule, Term, Variable,
};
pub use demo::{catalog, Demo, DemoInput, DemoKind, DemoResult, DemoRunner, DemoSummary};
pub use error::{LogicError, Result};
pub use inference::{
    binary_resolve, binary_resolvents, chain, match_premises, prove, reports_to_json,
    resolve_pair, unify, unify_args, unify_atoms, ChainConfig, ChainOutcome, ConfigBuilder,
    ForwardChainer, OutputFormatter, ProofResult, Prover, ProverConfig, Report, Resolvent,
    Substitution, UnificationCase, UnificationError, Unifier,
};
pub use propositional::{
    assignments, entails, truth_table, Expr, Model, Operator, TruthRow, TruthTable,
    MAX_SYMBOLS,
};
