//! Saturation-based refutation prover.
//!
//! The negated query is added to a working copy of the knowledge base, then
//! every pair of clauses is resolved pass after pass until the empty clause
//! appears (proof) or a pass adds nothing new (saturation).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::Statistics;
use crate::data::{Clause, ClauseSet, Literal};
use crate::inference::resolve_pair;

/// Result of a proof search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofResult {
    /// The empty clause was derived
    Proof {
        rounds: usize,
        /// Total resolvents generated during search
        clauses_generated: usize,
        /// Resolvents that were new and got added
        clauses_kept: usize,
    },
    /// A full pass produced nothing new
    Saturated {
        rounds: usize,
        clauses_generated: usize,
        clauses_kept: usize,
    },
    /// Search exceeded a configured limit
    ResourceLimit {
        rounds: usize,
        clauses_generated: usize,
        clauses_kept: usize,
        limit_type: String,
    },
}

impl ProofResult {
    pub fn is_proof(&self) -> bool {
        matches!(self, ProofResult::Proof { .. })
    }

    pub fn rounds(&self) -> usize {
        match self {
            ProofResult::Proof { rounds, .. }
            | ProofResult::Saturated { rounds, .. }
            | ProofResult::ResourceLimit { rounds, .. } => *rounds,
        }
    }

    pub fn clauses_generated(&self) -> usize {
        match self {
            ProofResult::Proof { clauses_generated, .. }
            | ProofResult::Saturated { clauses_generated, .. }
            | ProofResult::ResourceLimit { clauses_generated, .. } => *clauses_generated,
        }
    }

    pub fn clauses_kept(&self) -> usize {
        match self {
            ProofResult::Proof { clauses_kept, .. }
            | ProofResult::Saturated { clauses_kept, .. }
            | ProofResult::ResourceLimit { clauses_kept, .. } => *clauses_kept,
        }
    }
}

/// Configuration for the prover.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverConfig {
    /// Maximum number of resolution passes (0 = unlimited)
    pub max_rounds: usize,
    /// Maximum size of the working clause set (0 = unlimited)
    pub max_clauses: usize,
}

/// Resolution refutation prover.
#[derive(Clone, Debug, Default)]
pub struct Prover {
    config: ProverConfig,
    /// Working set of the last search
    clauses: ClauseSet,
    stats: Statistics,
}

#[derive(Default)]
struct Counters {
    rounds: usize,
    generated: usize,
    kept: usize,
}

impl Counters {
    fn proof(&self) -> ProofResult {
        ProofResult::Proof {
            rounds: self.rounds,
            clauses_generated: self.generated,
            clauses_kept: self.kept,
        }
    }

    fn saturated(&self) -> ProofResult {
        ProofResult::Saturated {
            rounds: self.rounds,
            clauses_generated: self.generated,
            clauses_kept: self.kept,
        }
    }

    fn limit(&self, limit_type: &str) -> ProofResult {
        ProofResult::ResourceLimit {
            rounds: self.rounds,
            clauses_generated: self.generated,
            clauses_kept: self.kept,
            limit_type: limit_type.to_string(),
        }
    }
}

impl Prover {
    /// Create a new prover with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProverConfig::default())
    }

    /// Create a new prover with custom configuration.
    pub fn with_config(config: ProverConfig) -> Self {
        Self { config, clauses: ClauseSet::new(), stats: Statistics::new() }
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Clause set reached by the last call to [`Prover::refute`].
    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Try to refute `kb ∪ {¬query}`.
    ///
    /// `kb` is copied; tautologies in it are skipped.
    pub fn refute(&mut self, kb: &[Clause], query: &Literal) -> ProofResult {
        let mut clauses: ClauseSet =
            kb.iter().filter(|c| !c.is_tautology()).cloned().collect();
        clauses.insert(Clause::unit(query.negated()));
        debug!(clauses = clauses.len(), %query, "starting refutation");

        let mut counters = Counters::default();
        let result = self.saturate(&mut clauses, &mut counters);

        self.stats.set("rounds", counters.rounds as u64);
        self.stats.set("clauses_generated", counters.generated as u64);
        self.stats.set("clauses_kept", counters.kept as u64);
        self.clauses = clauses;
        result
    }

    fn saturate(&self, clauses: &mut ClauseSet, counters: &mut Counters) -> ProofResult {
        if clauses.iter().any(Clause::is_empty) {
            return counters.proof();
        }

        loop {
            if self.config.max_rounds > 0 && counters.rounds >= self.config.max_rounds {
                debug!(rounds = counters.rounds, "round limit reached");
                return counters.limit("max_rounds");
            }
            counters.rounds += 1;

            // Pairs are drawn from the clauses present when the pass starts
            let snapshot = clauses.len();
            let mut pending = ClauseSet::new();
            for i in 0..snapshot {
                for j in (i + 1)..snapshot {
                    let (Some(left), Some(right)) = (clauses.get(i), clauses.get(j)) else {
                        continue;
                    };
                    for resolvent in resolve_pair(left, right) {
                        counters.generated += 1;
                        if resolvent.is_empty() {
                            debug!(round = counters.rounds, %left, %right, "empty clause derived");
                            return counters.proof();
                        }
                        if !clauses.contains(&resolvent) && pending.insert(resolvent.clone()) {
                            trace!(%resolvent, "new resolvent");
                        }
                    }
                }
            }

            if pending.is_empty() {
                debug!(round = counters.rounds, clauses = clauses.len(), "saturated");
                return counters.saturated();
            }

            counters.kept += pending.len();
            clauses.extend(pending);
            debug!(round = counters.rounds, clauses = clauses.len(), "pass complete");

            if self.config.max_clauses > 0 && clauses.len() > self.config.max_clauses {
                debug!(clauses = clauses.len(), "clause limit reached");
                return counters.limit("max_clauses");
            }
        }
    }
}

/// Does `kb` entail `query`?  Runs an unbounded [`Prover`].
pub fn prove(kb: &[Clause], query: &Literal) -> bool {
    Prover::new().refute(kb, query).is_proof()
}
