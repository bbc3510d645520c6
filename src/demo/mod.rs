//! Built-in demonstrations: hard-coded knowledge bases with known answers.
//!
//! Each [`Demo`] names one engine run and the answer it must produce; the
//! [`DemoRunner`] executes them and collects a [`DemoSummary`] that doubles as
//! a self-check of the engines.

mod runner;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::{Atom, Clause, Literal, Rule, Term};
use crate::propositional::Expr;

pub use runner::{DemoGroupSummary, DemoResult, DemoRunner, DemoSummary};

/// Engine exercised by a demonstration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    Unify,
    Resolution,
    Chain,
    Entails,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] =
        [DemoKind::Unify, DemoKind::Resolution, DemoKind::Chain, DemoKind::Entails];

    pub fn as_str(self) -> &'static str {
        match self {
            DemoKind::Unify => "unify",
            DemoKind::Resolution => "resolution",
            DemoKind::Chain => "chain",
            DemoKind::Entails => "entails",
        }
    }
}

impl FromStr for DemoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown demo `{}`", s))
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input of a demonstration.
#[derive(Clone, Debug, PartialEq)]
pub enum DemoInput {
    /// Term pairs with whether each should unify
    Unify(Vec<(Term, Term, bool)>),
    Resolution { kb: Vec<Clause>, query: Literal },
    Chain { facts: Vec<Atom>, rules: Vec<Rule>, query: Option<Atom> },
    Entails { kb: Expr, query: Expr },
}

/// A named demonstration with its expected answer.
#[derive(Clone, Debug, PartialEq)]
pub struct Demo {
    pub name: String,
    pub input: DemoInput,
    pub expected: bool,
}

impl Demo {
    pub fn new(name: impl Into<String>, input: DemoInput, expected: bool) -> Self {
        Self { name: name.into(), input, expected }
    }

    pub fn kind(&self) -> DemoKind {
        match self.input {
            DemoInput::Unify(_) => DemoKind::Unify,
            DemoInput::Resolution { .. } => DemoKind::Resolution,
            DemoInput::Chain { .. } => DemoKind::Chain,
            DemoInput::Entails { .. } => DemoKind::Entails,
        }
    }
}

fn var(name: &str) -> Term {
    Term::variable(name)
}

fn cst(name: &str) -> Term {
    Term::constant(name)
}

fn atom(pred: &str, args: Vec<Term>) -> Atom {
    Atom::new(pred, args)
}

fn pos(pred: &str, args: Vec<Term>) -> Literal {
    Literal::positive(atom(pred, args))
}

fn neg(pred: &str, args: Vec<Term>) -> Literal {
    Literal::negative(atom(pred, args))
}

/// Term pairs covering binding, clashes and the occurs check.
pub fn unification_pairs() -> Vec<(Term, Term, bool)> {
    let f = |args| Term::compound("f", args);
    vec![
        (f(vec![var("x"), cst("B")]), f(vec![cst("A"), var("y")]), true),
        (
            f(vec![var("x"), cst("B")]),
            Term::compound("g", vec![cst("A"), var("y")]),
            false,
        ),
        (var("x"), f(vec![var("x")]), false),
        (
            Term::compound("Knows", vec![cst("John"), var("x")]),
            Term::compound("Knows", vec![var("y"), Term::compound("Mother", vec![var("y")])]),
            true,
        ),
        (f(vec![var("x"), var("x")]), f(vec![cst("A"), cst("B")]), false),
        (cst("A"), cst("A"), true),
    ]
}

/// "John likes all food" knowledge base in clause form.
pub fn peanuts_kb() -> Vec<Clause> {
    let (x, y) = (var("x"), var("y"));
    vec![
        Clause::new(vec![neg("Food", vec![x.clone()]), pos("Likes", vec![cst("John"), x.clone()])]),
        Clause::unit(pos("Food", vec![cst("Apple")])),
        Clause::unit(pos("Food", vec![cst("Vegetable")])),
        Clause::new(vec![
            neg("Eats", vec![x.clone(), y.clone()]),
            pos("Killed", vec![x.clone()]),
            pos("Food", vec![y.clone()]),
        ]),
        Clause::unit(pos("Eats", vec![cst("Anil"), cst("Peanuts")])),
        Clause::unit(pos("Alive", vec![cst("Anil")])),
        Clause::new(vec![
            neg("Eats", vec![cst("Anil"), y.clone()]),
            pos("Eats", vec![cst("Harry"), y]),
        ]),
        Clause::new(vec![neg("Alive", vec![x.clone()]), neg("Killed", vec![x.clone()])]),
        Clause::new(vec![pos("Killed", vec![x.clone()]), pos("Alive", vec![x])]),
    ]
}

/// Every man is mortal; Marcus is a man.
pub fn mortal_kb() -> Vec<Clause> {
    vec![
        Clause::unit(pos("Man", vec![cst("Marcus")])),
        Clause::new(vec![neg("Man", vec![var("x")]), pos("Mortal", vec![var("x")])]),
    ]
}

/// Facts of the "Robert is a criminal" example.
pub fn criminal_facts() -> Vec<Atom> {
    vec![
        atom("American", vec![cst("Robert")]),
        atom("Weapons", vec![cst("T1")]),
        atom("Sells", vec![cst("Robert"), cst("T1"), cst("A")]),
        atom("Hostile", vec![cst("A")]),
    ]
}

/// American(p) ∧ Weapons(q) ∧ Sells(p, q, r) ∧ Hostile(r) ⇒ Criminal(p)
pub fn criminal_rules() -> Vec<Rule> {
    let (p, q, r) = (var("p"), var("q"), var("r"));
    vec![Rule::new(
        vec![
            atom("American", vec![p.clone()]),
            atom("Weapons", vec![q.clone()]),
            atom("Sells", vec![p.clone(), q, r.clone()]),
            atom("Hostile", vec![r]),
        ],
        atom("Criminal", vec![p]),
    )]
}

/// (A ∨ C) ∧ (B ∨ ¬C)
pub fn entailment_kb() -> Expr {
    Expr::and(
        Expr::or(Expr::symbol("A"), Expr::symbol("C")),
        Expr::or(Expr::symbol("B"), Expr::negate(Expr::symbol("C"))),
    )
}

/// The full catalog, in presentation order.
pub fn catalog() -> Vec<Demo> {
    vec![
        Demo::new("unify-basics", DemoInput::Unify(unification_pairs()), true),
        Demo::new(
            "resolution-peanuts",
            DemoInput::Resolution {
                kb: peanuts_kb(),
                query: pos("Likes", vec![cst("John"), cst("Peanuts")]),
            },
            true,
        ),
        Demo::new(
            "resolution-mortal",
            DemoInput::Resolution { kb: mortal_kb(), query: pos("Mortal", vec![cst("Marcus")]) },
            true,
        ),
        Demo::new(
            "resolution-mortal-unknown",
            DemoInput::Resolution { kb: mortal_kb(), query: pos("Mortal", vec![cst("Caesar")]) },
            false,
        ),
        Demo::new(
            "chain-criminal",
            DemoInput::Chain {
                facts: criminal_facts(),
                rules: criminal_rules(),
                query: Some(atom("Criminal", vec![cst("Robert")])),
            },
            true,
        ),
        Demo::new(
            "chain-criminal-closure",
            DemoInput::Chain { facts: criminal_facts(), rules: criminal_rules(), query: None },
            true,
        ),
        Demo::new(
            "chain-innocent",
            DemoInput::Chain {
                facts: criminal_facts(),
                rules: criminal_rules(),
                query: Some(atom("Criminal", vec![cst("Nono")])),
            },
            false,
        ),
        Demo::new(
            "entails-example",
            DemoInput::Entails {
                kb: entailment_kb(),
                query: Expr::or(Expr::symbol("A"), Expr::symbol("B")),
            },
            true,
        ),
        Demo::new(
            "entails-disjunction",
            DemoInput::Entails {
                kb: Expr::or(Expr::symbol("A"), Expr::symbol("B")),
                query: Expr::symbol("A"),
            },
            false,
        ),
    ]
}
