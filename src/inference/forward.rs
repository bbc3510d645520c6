//! Forward chaining over positive Horn rules.
//!
//! Each round matches every rule's premises against the facts known at the
//! start of the round, applies the resulting substitutions to the conclusion
//! and merges the atoms that were not known yet.  The run stops at a fixpoint,
//! as soon as the query becomes known, or at the configured round limit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::Statistics;
use crate::data::{Atom, FactSet, Rule};
use crate::inference::{unify_args, Substitution};

/// Configuration for the forward chainer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Maximum number of rounds (0 = unlimited)
    pub max_rounds: usize,
    /// Log each rule application at info level
    pub trace: bool,
}

/// Outcome of a forward-chaining run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainOutcome {
    /// Initial facts plus everything derived
    pub derived: FactSet,
    /// Query reached, or closure reached when there is no query
    pub proved: bool,
    pub rounds: usize,
    /// Number of facts added on top of the initial ones
    pub new_facts: usize,
    /// The run was cut off by `max_rounds`
    pub limit_reached: bool,
}

/// Facts grouped by predicate symbol.
struct FactIndex<'a> {
    by_predicate: HashMap<&'a str, Vec<&'a Atom>>,
}

impl<'a> FactIndex<'a> {
    fn build(facts: &'a FactSet) -> Self {
        let mut by_predicate: HashMap<&str, Vec<&Atom>> = HashMap::new();
        for fact in facts {
            by_predicate.entry(fact.predicate.as_str()).or_default().push(fact);
        }
        Self { by_predicate }
    }

    /// Facts with the premise's predicate and arity, in insertion order.
    fn candidates<'s>(&'s self, premise: &'s Atom) -> impl Iterator<Item = &'a Atom> + 's {
        self.by_predicate
            .get(premise.predicate.as_str())
            .into_iter()
            .flatten()
            .copied()
            .filter(move |fact| fact.same_relation(premise))
    }
}

/// Every substitution satisfying all `premises` at once against `facts`.
///
/// Premises are matched left to right, each under the bindings made by the
/// ones before it.  Results come out in the order of the facts used.
pub fn match_premises(premises: &[Atom], facts: &FactSet) -> Vec<Substitution> {
    match_indexed(premises, &FactIndex::build(facts))
}

fn match_indexed(premises: &[Atom], index: &FactIndex<'_>) -> Vec<Substitution> {
    let mut results = Vec::new();
    let mut stack = vec![(0usize, Substitution::new())];

    while let Some((depth, subst)) = stack.pop() {
        let Some(premise) = premises.get(depth) else {
            results.push(subst);
            continue;
        };
        let frontier = stack.len();
        for fact in index.candidates(premise) {
            if let Ok(next) = unify_args(&premise.args, &fact.args, &subst) {
                trace!(%premise, %fact, "premise matched");
                stack.push((depth + 1, next));
            }
        }
        // First candidate on top, so it is explored first
        stack[frontier..].reverse();
    }

    results
}

/// Forward-chaining engine.
#[derive(Clone, Debug, Default)]
pub struct ForwardChainer {
    config: ChainConfig,
    stats: Statistics,
}

impl ForwardChainer {
    pub fn new() -> Self {
        Self::with_config(ChainConfig::default())
    }

    pub fn with_config(config: ChainConfig) -> Self {
        Self { config, stats: Statistics::new() }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Derive facts from `facts` with `rules` until fixpoint or `query`.
    pub fn run(&mut self, facts: &[Atom], rules: &[Rule], query: Option<&Atom>) -> ChainOutcome {
        let mut derived: FactSet = facts.iter().cloned().collect();
        let initial = derived.len();
        let mut rounds = 0;
        let mut limit_reached = false;

        let proved = loop {
            if self.config.max_rounds > 0 && rounds >= self.config.max_rounds {
                debug!(rounds, "round limit reached");
                limit_reached = true;
                break query.is_some_and(|q| derived.contains(q));
            }
            rounds += 1;

            let staged = self.round(&derived, rules);
            if staged.is_empty() {
                debug!(rounds, facts = derived.len(), "fixpoint reached");
                break query.map_or(true, |q| derived.contains(q));
            }

            self.stats.increment_by("facts_derived", staged.len() as u64);
            derived.extend(staged);
            debug!(round = rounds, facts = derived.len(), "round complete");

            if query.is_some_and(|q| derived.contains(q)) {
                break true;
            }
        };

        self.stats.set("rounds", rounds as u64);
        ChainOutcome {
            new_facts: derived.len() - initial,
            derived,
            proved,
            rounds,
            limit_reached,
        }
    }

    /// Atoms derivable in one round that are not in `derived` yet.
    fn round(&mut self, derived: &FactSet, rules: &[Rule]) -> FactSet {
        let index = FactIndex::build(derived);
        let mut staged = FactSet::new();
        for rule in rules {
            for subst in match_indexed(&rule.premises, &index) {
                self.stats.increment("rule_applications");
                let inferred = subst.apply_to_atom(&rule.conclusion);
                if derived.contains(&inferred) {
                    continue;
                }
                if self.config.trace {
                    info!(%rule, %subst, %inferred, "applying rule");
                }
                staged.insert(inferred);
            }
        }
        staged
    }
}

/// Run an unbounded [`ForwardChainer`].
pub fn chain(facts: &[Atom], rules: &[Rule], query: Option<&Atom>) -> ChainOutcome {
    ForwardChainer::new().run(facts, rules, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Term;

    fn atom(pred: &str, args: &[&str]) -> Atom {
        let args = args.iter().map(|name| Term::symbol(name).unwrap()).collect();
        Atom::new(pred, args)
    }

    fn criminal_facts() -> Vec<Atom> {
        vec![
            atom("American", &["Robert"]),
            atom("Weapons", &["T1"]),
            atom("Sells", &["Robert", "T1", "A"]),
            atom("Hostile", &["A"]),
        ]
    }

    fn criminal_rule() -> Rule {
        Rule::new(
            vec![
                atom("American", &["p"]),
                atom("Weapons", &["q"]),
                atom("Sells", &["p", "q", "r"]),
                atom("Hostile", &["r"]),
            ],
            atom("Criminal", &["p"]),
        )
    }

    #[test]
    fn derives_criminal() {
        let query = atom("Criminal", &["Robert"]);
        let outcome = chain(&criminal_facts(), &[criminal_rule()], Some(&query));
        assert!(outcome.proved);
        assert!(outcome.derived.contains(&query));
        assert_eq!(outcome.new_facts, 1);
        assert_eq!(outcome.rounds, 1);
        assert!(!outcome.limit_reached);
    }

    #[test]
    fn underivable_query_fails_at_fixpoint() {
        let query = atom("Criminal", &["Nono"]);
        let outcome = chain(&criminal_facts(), &[criminal_rule()], Some(&query));
        assert!(!outcome.proved);
        assert_eq!(outcome.derived.len(), 5);
        assert_eq!(outcome.rounds, 2);
    }

    #[test]
    fn query_among_initial_facts_is_proved() {
        let query = atom("Hostile", &["A"]);
        assert!(chain(&criminal_facts(), &[], Some(&query)).proved);
    }

    #[test]
    fn no_query_reports_closure() {
        let outcome = chain(&criminal_facts(), &[criminal_rule()], None);
        assert!(outcome.proved);
        assert!(outcome.derived.contains(&atom("Criminal", &["Robert"])));

        let nothing = chain(&criminal_facts(), &[], None);
        assert!(nothing.proved);
        assert_eq!(nothing.new_facts, 0);
    }

    #[test]
    fn shared_variables_must_agree() {
        let mut facts = criminal_facts();
        facts.push(atom("American", &["West"]));
        let outcome = chain(&facts, &[criminal_rule()], None);
        assert!(!outcome.derived.contains(&atom("Criminal", &["West"])));
    }

    #[test]
    fn matches_come_out_left_to_right() {
        let facts: FactSet = vec![
            atom("P", &["A"]),
            atom("P", &["B"]),
            atom("Q", &["C"]),
            atom("Q", &["D"]),
        ]
        .into_iter()
        .collect();
        let premises = vec![atom("P", &["x"]), atom("Q", &["y"])];
        let pairs: Vec<String> = match_premises(&premises, &facts)
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            pairs,
            vec![
                "{x ↦ A, y ↦ C}",
                "{x ↦ A, y ↦ D}",
                "{x ↦ B, y ↦ C}",
                "{x ↦ B, y ↦ D}",
            ]
        );
    }

    #[test]
    fn empty_premises_match_once() {
        let facts = FactSet::new();
        assert_eq!(match_premises(&[], &facts), vec![Substitution::new()]);
        let rule = Rule::new(vec![], atom("Axiom", &["A"]));
        let outcome = chain(&[], &[rule], None);
        assert!(outcome.derived.contains(&atom("Axiom", &["A"])));
    }

    #[test]
    fn chains_across_rounds() {
        let rules = vec![
            Rule::new(vec![atom("P", &["x"])], atom("Q", &["x"])),
            Rule::new(vec![atom("Q", &["x"])], atom("R", &["x"])),
        ];
        let outcome = chain(&[atom("P", &["A"])], &rules, Some(&atom("R", &["A"])));
        assert!(outcome.proved);
        assert_eq!(outcome.rounds, 2);
    }

    #[test]
    fn round_limit_stops_early() {
        let rules = vec![
            Rule::new(vec![atom("P", &["x"])], atom("Q", &["x"])),
            Rule::new(vec![atom("Q", &["x"])], atom("R", &["x"])),
        ];
        let config = ChainConfig { max_rounds: 1, ..ChainConfig::default() };
        let mut chainer = ForwardChainer::with_config(config);
        let outcome = chainer.run(&[atom("P", &["A"])], &rules, Some(&atom("R", &["A"])));
        assert!(outcome.limit_reached);
        assert!(!outcome.proved);
        assert!(outcome.derived.contains(&atom("Q", &["A"])));
        assert_eq!(chainer.stats().get("rounds"), Some(1));
    }

    #[test]
    fn rerunning_on_output_adds_nothing() {
        let first = chain(&criminal_facts(), &[criminal_rule()], None);
        let facts: Vec<Atom> = first.derived.iter().cloned().collect();
        let second = chain(&facts, &[criminal_rule()], None);
        assert_eq!(second.new_facts, 0);
        assert_eq!(second.rounds, 1);
    }

    #[test]
    fn input_facts_are_not_mutated() {
        let facts = criminal_facts();
        let snapshot = facts.clone();
        chain(&facts, &[criminal_rule()], None);
        assert_eq!(facts, snapshot);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const CONSTANTS: [&str; 3] = ["A", "B", "C"];
        const PREDICATES: [&str; 3] = ["P", "Q", "R"];

        fn catalog() -> Vec<Rule> {
            vec![
                Rule::new(vec![atom("P", &["x"])], atom("Q", &["x"])),
                Rule::new(vec![atom("Q", &["x"]), atom("R", &["x"])], atom("S", &["x"])),
                Rule::new(vec![atom("S", &["x"])], atom("P", &["x"])),
                Rule::new(vec![atom("P", &["x"]), atom("Q", &["y"])], atom("T", &["x", "y"])),
                Rule::new(vec![atom("T", &["x", "x"])], atom("R", &["x"])),
            ]
        }

        fn arb_facts() -> impl Strategy<Value = Vec<Atom>> {
            prop::collection::vec((0..PREDICATES.len(), 0..CONSTANTS.len()), 0..6).prop_map(
                |pairs| {
                    pairs
                        .into_iter()
                        .map(|(p, c)| atom(PREDICATES[p], &[CONSTANTS[c]]))
                        .collect()
                },
            )
        }

        fn select(mask: &[bool]) -> Vec<Rule> {
            catalog()
                .into_iter()
                .zip(mask)
                .filter(|(_, keep)| **keep)
                .map(|(rule, _)| rule)
                .collect()
        }

        fn arb_reordered_facts() -> impl Strategy<Value = (Vec<Atom>, Vec<Atom>)> {
            arb_facts().prop_flat_map(|facts| {
                let shuffled = Just(facts.clone()).prop_shuffle();
                (Just(facts), shuffled)
            })
        }

        proptest! {
            #[test]
            fn closure_ignores_fact_and_rule_order(
                (facts, shuffled_facts) in arb_reordered_facts(),
                shuffled_rules in Just(catalog()).prop_shuffle(),
            ) {
                let query = atom("S", &["A"]);
                let reference = chain(&facts, &catalog(), Some(&query));
                let reordered = chain(&shuffled_facts, &shuffled_rules, Some(&query));
                prop_assert_eq!(reference.proved, reordered.proved);

                let reference = chain(&facts, &catalog(), None);
                let reordered = chain(&shuffled_facts, &shuffled_rules, None);
                prop_assert!(reference.derived.is_subset(&reordered.derived));
                prop_assert!(reordered.derived.is_subset(&reference.derived));
                prop_assert_eq!(reference.new_facts, reordered.new_facts);
            }

            #[test]
            fn closure_is_a_fixpoint(
                facts in arb_facts(),
                mask in prop::collection::vec(any::<bool>(), 5),
            ) {
                let rules = select(&mask);
                let first = chain(&facts, &rules, None);
                prop_assert!(first.proved);
                let closure: Vec<Atom> = first.derived.iter().cloned().collect();
                let second = chain(&closure, &rules, None);
                prop_assert_eq!(second.new_facts, 0);
            }

            #[test]
            fn more_rules_derive_more_facts(
                facts in arb_facts(),
                small in prop::collection::vec(any::<bool>(), 5),
                extra in prop::collection::vec(any::<bool>(), 5),
            ) {
                let large: Vec<bool> =
                    small.iter().zip(&extra).map(|(a, b)| *a || *b).collect();
                let from_small = chain(&facts, &select(&small), None);
                let from_large = chain(&facts, &select(&large), None);
                prop_assert!(from_small.derived.is_subset(&from_large.derived));
            }
        }
    }
}
