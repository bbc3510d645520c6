//! Inference engines.
//!
//! This module contains unification, binary resolution with the refutation
//! prover built on it, and the forward chainer, together with the config
//! builder and report formatting shared by drivers.

mod builder;
mod forward;
mod output;
mod prover;
mod resolution;
mod unify;

pub use builder::ConfigBuilder;
pub use forward::{chain, match_premises, ChainConfig, ChainOutcome, ForwardChainer};
pub use output::{reports_to_json, OutputFormatter, Report, UnificationCase};
pub use prover::{prove, ProofResult, Prover, ProverConfig};
pub use resolution::{binary_resolve, binary_resolvents, resolve_pair, Resolvent};
pub use unify::{unify, unify_args, unify_atoms, Substitution, UnificationError, Unifier};
