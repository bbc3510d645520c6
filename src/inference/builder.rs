//! Builder mapping flags and parameters onto engine configurations.

use tracing::warn;

use crate::config::{
    FlagSet, ParameterSet, FLAGS, MAX_CLAUSES, MAX_ROUNDS, PARAMETERS, TRACE,
};
use crate::inference::{ChainConfig, ForwardChainer, Prover, ProverConfig};

/// Build engine configurations from string-keyed settings.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    prover: ProverConfig,
    chain: ChainConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with `flags` and `params` already applied.
    pub fn from_settings(flags: &FlagSet, params: &ParameterSet) -> Self {
        let mut builder = Self::new();
        builder.apply_flags(flags);
        builder.apply_parameters(params);
        builder
    }

    /// Copy recognised flags into the configs; unknown names are reported.
    pub fn apply_flags(&mut self, flags: &FlagSet) {
        for name in flags.iter().filter(|name| !FLAGS.contains(name)) {
            warn!(flag = name, "unknown flag, ignoring");
        }
        self.chain.trace = flags.is_enabled(TRACE);
    }

    /// Copy recognised integer parameters into the configs.
    ///
    /// A recognised name holding text is reported and left at its default.
    pub fn apply_parameters(&mut self, params: &ParameterSet) {
        for name in PARAMETERS {
            let Some(value) = params.get(name) else {
                continue;
            };
            let Some(count) = params.get_count(name) else {
                warn!(parameter = name, %value, "expected an integer, ignoring");
                continue;
            };
            match name {
                MAX_ROUNDS => self.prover.max_rounds = count,
                MAX_CLAUSES => self.prover.max_clauses = count,
                _ => self.chain.max_rounds = count,
            }
        }
    }

    pub fn prover_config(&self) -> &ProverConfig {
        &self.prover
    }

    pub fn chain_config(&self) -> &ChainConfig {
        &self.chain
    }

    pub fn build_prover(&self) -> Prover {
        Prover::with_config(self.prover.clone())
    }

    pub fn build_chainer(&self) -> ForwardChainer {
        ForwardChainer::with_config(self.chain.clone())
    }
}
