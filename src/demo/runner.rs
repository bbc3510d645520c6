use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::demo::{Demo, DemoInput, DemoKind};
use crate::error::Result;
use crate::inference::{unify, ConfigBuilder, Report, Substitution, UnificationCase};
use crate::propositional::{entails, truth_table};

/// Result of running one demonstration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoResult {
    pub name: String,
    pub kind: DemoKind,
    pub expected: bool,
    pub report: Report,
}

impl DemoResult {
    pub fn answer(&self) -> bool {
        self.report.answer()
    }

    pub fn success(&self) -> bool {
        self.answer() == self.expected
    }
}

/// Aggregated outcome of a batch of demonstrations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoSummary {
    pub results: Vec<DemoResult>,
    pub successes: usize,
    pub failures: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoGroupSummary {
    pub kind: DemoKind,
    pub successes: usize,
    pub failures: usize,
}

impl DemoSummary {
    pub fn from_results(results: Vec<DemoResult>) -> Self {
        let successes = results.iter().filter(|r| r.success()).count();
        let failures = results.len() - successes;
        Self { results, successes, failures }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn iter_failures(&self) -> impl Iterator<Item = &DemoResult> {
        self.results.iter().filter(|result| !result.success())
    }

    pub fn by_kind(&self) -> Vec<DemoGroupSummary> {
        let mut grouped: BTreeMap<DemoKind, DemoGroupSummary> = BTreeMap::new();
        for result in &self.results {
            let entry = grouped.entry(result.kind).or_insert(DemoGroupSummary {
                kind: result.kind,
                successes: 0,
                failures: 0,
            });
            if result.success() {
                entry.successes += 1;
            } else {
                entry.failures += 1;
            }
        }
        grouped.into_values().collect()
    }

    pub fn render_table(&self) -> String {
        let groups = self.by_kind();
        if groups.is_empty() {
            return String::from("(no demonstrations)");
        }
        let mut lines = vec![format!("{:<12} {:>7} {:>7}", "Engine", "Success", "Failure")];
        for summary in groups {
            lines.push(format!(
                "{:<12} {:>7} {:>7}",
                summary.kind.as_str(),
                summary.successes,
                summary.failures
            ));
        }
        lines.join("\n")
    }
}

/// Runs demonstrations with engine configs taken from a [`ConfigBuilder`].
#[derive(Clone, Debug, Default)]
pub struct DemoRunner {
    builder: ConfigBuilder,
}

impl DemoRunner {
    pub fn new(builder: ConfigBuilder) -> Self {
        Self { builder }
    }

    pub fn run(&self, demo: &Demo) -> Result<DemoResult> {
        debug!(demo = %demo.name, kind = %demo.kind(), "running demonstration");
        let report = match &demo.input {
            DemoInput::Unify(pairs) => Report::Unification {
                cases: pairs
                    .iter()
                    .map(|(left, right, expected)| {
                        let outcome = unify(left, right, &Substitution::new());
                        UnificationCase {
                            left: left.clone(),
                            right: right.clone(),
                            expected: *expected,
                            failure: outcome.as_ref().err().map(|e| e.to_string()),
                            unifier: outcome.ok(),
                        }
                    })
                    .collect(),
            },
            DemoInput::Resolution { kb, query } => {
                let mut prover = self.builder.build_prover();
                let result = prover.refute(kb, query);
                Report::Resolution {
                    query: query.clone(),
                    result,
                    stats: prover.stats().clone(),
                }
            }
            DemoInput::Chain { facts, rules, query } => {
                let mut chainer = self.builder.build_chainer();
                let outcome = chainer.run(facts, rules, query.as_ref());
                Report::Chain {
                    query: query.clone(),
                    outcome,
                    stats: chainer.stats().clone(),
                }
            }
            DemoInput::Entails { kb, query } => Report::Entailment {
                kb: kb.clone(),
                query: query.clone(),
                entails: entails(kb, query)?,
                table: truth_table(kb, query)?,
            },
        };

        let result = DemoResult {
            name: demo.name.clone(),
            kind: demo.kind(),
            expected: demo.expected,
            report,
        };
        if !result.success() {
            warn!(demo = %result.name, expected = result.expected, "unexpected answer");
        }
        Ok(result)
    }

    /// Run every demonstration, stopping at the first malformed one.
    pub fn run_all<'a>(&self, demos: impl IntoIterator<Item = &'a Demo>) -> Result<DemoSummary> {
        let results = demos
            .into_iter()
            .map(|demo| self.run(demo))
            .collect::<Result<Vec<_>>>()?;
        Ok(DemoSummary::from_results(results))
    }
}
