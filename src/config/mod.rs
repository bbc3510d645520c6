//! Configuration containers: boolean flags, named parameters and run
//! statistics.
//!
//! The engines take typed configs (`ProverConfig`, `ChainConfig`); these
//! string-keyed containers are what drivers fill in from the command line
//! before handing them to [`crate::inference::ConfigBuilder`].

mod flags;
mod params;
mod stats;

pub use flags::{FlagSet, FLAGS, TRACE};
pub use params::{
    ParameterSet, ParameterValue, CHAIN_MAX_ROUNDS, MAX_CLAUSES, MAX_ROUNDS,
    PARAMETERS,
};
pub use stats::Statistics;
