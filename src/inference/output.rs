//! Report values and their text/JSON rendering.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::config::Statistics;
use crate::data::{Atom, Literal, Term};
use crate::inference::{ChainOutcome, ProofResult, Substitution};
use crate::propositional::{Expr, TruthTable};

/// One unification attempt and its outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnificationCase {
    pub left: Term,
    pub right: Term,
    /// Whether the pair is expected to unify
    pub expected: bool,
    pub unifier: Option<Substitution>,
    pub failure: Option<String>,
}

impl UnificationCase {
    pub fn passed(&self) -> bool {
        self.unifier.is_some() == self.expected
    }
}

/// Result of one engine run, ready to print.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Unification {
        cases: Vec<UnificationCase>,
    },
    Resolution {
        query: Literal,
        result: ProofResult,
        stats: Statistics,
    },
    Chain {
        query: Option<Atom>,
        outcome: ChainOutcome,
        stats: Statistics,
    },
    Entailment {
        kb: Expr,
        query: Expr,
        entails: bool,
        table: TruthTable,
    },
}

impl Report {
    /// The boolean answer of the run.
    pub fn answer(&self) -> bool {
        match self {
            Report::Unification { cases } => cases.iter().all(UnificationCase::passed),
            Report::Resolution { result, .. } => result.is_proof(),
            Report::Chain { outcome, .. } => outcome.proved,
            Report::Entailment { entails, .. } => *entails,
        }
    }
}

/// Format reports as plain text.
#[derive(Clone, Debug, Default)]
pub struct OutputFormatter {
    /// Buffer for output
    output: String,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn write_banner(&mut self) -> fmt::Result {
        writeln!(self.output, "----- symlogic {} -----", env!("CARGO_PKG_VERSION"))
    }

    pub fn write_heading(&mut self, title: &str) -> fmt::Result {
        writeln!(self.output)?;
        writeln!(self.output, "=== {} ===", title)
    }

    pub fn write_report(&mut self, report: &Report) -> fmt::Result {
        match report {
            Report::Unification { cases } => self.write_unification(cases),
            Report::Resolution { query, result, stats } => {
                writeln!(self.output, "Proving {} by refutation", query)?;
                self.write_proof_result(result)?;
                self.write_statistics(stats)
            }
            Report::Chain { query, outcome, stats } => {
                self.write_chain(query.as_ref(), outcome)?;
                self.write_statistics(stats)
            }
            Report::Entailment { kb, query, entails, table } => {
                writeln!(self.output, "KB    = {}", kb)?;
                writeln!(self.output, "Query = {}", query)?;
                writeln!(self.output)?;
                write!(self.output, "{}", table)?;
                writeln!(self.output)?;
                writeln!(self.output, "KB entails query: {}", entails)
            }
        }
    }

    fn write_unification(&mut self, cases: &[UnificationCase]) -> fmt::Result {
        for case in cases {
            write!(self.output, "{} ≐ {}: ", case.left, case.right)?;
            match (&case.unifier, &case.failure) {
                (Some(unifier), _) => writeln!(self.output, "{}", unifier)?,
                (None, Some(reason)) => writeln!(self.output, "FAIL ({})", reason)?,
                (None, None) => writeln!(self.output, "FAIL")?,
            }
        }
        Ok(())
    }

    pub fn write_proof_result(&mut self, result: &ProofResult) -> fmt::Result {
        match result {
            ProofResult::Proof { rounds, .. } => {
                writeln!(self.output, "Empty clause derived after {} pass(es).", rounds)?;
            }
            ProofResult::Saturated { rounds, .. } => {
                writeln!(self.output, "Saturated after {} pass(es) without a proof.", rounds)?;
            }
            ProofResult::ResourceLimit { limit_type, .. } => {
                writeln!(self.output, "Search stopped by {} limit.", limit_type)?;
            }
        }
        writeln!(self.output, "Result: {}", verdict(result.is_proof()))
    }

    fn write_chain(&mut self, query: Option<&Atom>, outcome: &ChainOutcome) -> fmt::Result {
        writeln!(self.output, "Derived facts:")?;
        let mut facts: Vec<String> = outcome.derived.iter().map(|f| f.to_string()).collect();
        facts.sort();
        for fact in facts {
            writeln!(self.output, "  {}", fact)?;
        }
        if outcome.limit_reached {
            writeln!(self.output, "Stopped by round limit after {} round(s).", outcome.rounds)?;
        }
        match query {
            Some(query) => writeln!(self.output, "Query: {}", query)?,
            None => writeln!(self.output, "Query: (none, closure only)")?,
        }
        writeln!(self.output, "Result: {}", verdict(outcome.proved))
    }

    /// Counters in name order, one per line.
    pub fn write_statistics(&mut self, stats: &Statistics) -> fmt::Result {
        if stats.is_empty() {
            return Ok(());
        }
        writeln!(self.output, "-------------- statistics -------------")?;
        for (name, value) in stats.iter() {
            writeln!(self.output, "{:<26} {:>8}", name, value)?;
        }
        Ok(())
    }
}

fn verdict(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Pretty-printed JSON array of reports.
pub fn reports_to_json(reports: &[Report]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FactSet;

    #[test]
    fn format_proof_result() {
        let mut formatter = OutputFormatter::new();
        let result = ProofResult::Proof { rounds: 3, clauses_generated: 40, clauses_kept: 12 };
        formatter.write_proof_result(&result).unwrap();
        let output = formatter.output();
        assert!(output.contains("after 3 pass(es)"));
        assert!(output.contains("Result: TRUE"));
    }

    #[test]
    fn format_limit_result() {
        let mut formatter = OutputFormatter::new();
        let result = ProofResult::ResourceLimit {
            rounds: 1,
            clauses_generated: 5,
            clauses_kept: 5,
            limit_type: "max_rounds".into(),
        };
        formatter.write_proof_result(&result).unwrap();
        assert!(formatter.output().contains("stopped by max_rounds limit"));
        assert!(formatter.output().contains("Result: FALSE"));
    }

    #[test]
    fn format_statistics() {
        let mut formatter = OutputFormatter::new();
        let mut stats = Statistics::new();
        stats.set("clauses_generated", 4909);
        stats.set("rounds", 4);
        formatter.write_statistics(&stats).unwrap();
        let output = formatter.output();
        assert!(output.contains("clauses_generated"));
        assert!(output.contains("4909"));
        let generated = output.find("clauses_generated").unwrap();
        let rounds = output.find("rounds").unwrap();
        assert!(generated < rounds);
    }

    #[test]
    fn chain_report_lists_sorted_facts() {
        let derived: FactSet = vec![
            Atom::new("Q", vec![Term::constant("A")]),
            Atom::new("P", vec![Term::constant("A")]),
        ]
        .into_iter()
        .collect();
        let outcome = ChainOutcome {
            derived,
            proved: true,
            rounds: 1,
            new_facts: 1,
            limit_reached: false,
        };
        let report = Report::Chain { query: None, outcome, stats: Statistics::new() };
        let mut formatter = OutputFormatter::new();
        formatter.write_report(&report).unwrap();
        let output = formatter.into_output();
        let p = output.find("P(A)").unwrap();
        let q = output.find("Q(A)").unwrap();
        assert!(p < q);
        assert!(output.contains("closure only"));
    }

    #[test]
    fn unification_case_passes_on_expected_outcome() {
        let case = UnificationCase {
            left: Term::variable("x"),
            right: Term::compound("f", vec![Term::variable("x")]),
            expected: false,
            unifier: None,
            failure: Some("occurs check".into()),
        };
        assert!(case.passed());
        assert!(Report::Unification { cases: vec![case] }.answer());
    }

    #[test]
    fn json_carries_report_kind() {
        let report = Report::Resolution {
            query: Literal::positive(Atom::new("P", vec![Term::constant("A")])),
            result: ProofResult::Saturated { rounds: 1, clauses_generated: 0, clauses_kept: 0 },
            stats: Statistics::new(),
        };
        let json = reports_to_json(&[report.clone()]).unwrap();
        assert!(json.contains("\"kind\": \"resolution\""));
        let back: Vec<Report> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![report]);
    }
}
