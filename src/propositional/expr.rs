//! Propositional expressions and their evaluation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LogicError, Result};

/// A total assignment of truth values to symbols.
pub type Model = BTreeMap<String, bool>;

/// Connective tags accepted by [`Expr::operator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
}

impl Operator {
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or | Operator::Implies => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Implies => "implies",
        }
    }
}

impl FromStr for Operator {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "not" => Ok(Operator::Not),
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            "implies" => Ok(Operator::Implies),
            other => Err(LogicError::UnknownOperator { op: other.to_string() }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A propositional formula over named symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// Propositional symbol
    Symbol(String),
    /// Negation
    Not(Box<Expr>),
    /// Conjunction
    And(Box<Expr>, Box<Expr>),
    /// Disjunction
    Or(Box<Expr>, Box<Expr>),
    /// Material implication
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn negate(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Expr, right: Expr) -> Self {
        Expr::Implies(Box::new(left), Box::new(right))
    }

    /// Build a node from an operator tag and its operands.
    ///
    /// Fails on an unknown tag or when the operand count does not match the
    /// operator's arity.
    pub fn operator(tag: &str, operands: Vec<Expr>) -> Result<Self> {
        let op: Operator = tag.parse()?;
        let found = operands.len();
        let mut operands = operands.into_iter().map(Box::new);
        match (op, operands.next(), operands.next(), operands.next()) {
            (Operator::Not, Some(inner), None, None) => Ok(Expr::Not(inner)),
            (Operator::And, Some(l), Some(r), None) => Ok(Expr::And(l, r)),
            (Operator::Or, Some(l), Some(r), None) => Ok(Expr::Or(l, r)),
            (Operator::Implies, Some(l), Some(r), None) => Ok(Expr::Implies(l, r)),
            (op, ..) => Err(LogicError::OperatorArity {
                op: tag.to_string(),
                expected: op.arity(),
                found,
            }),
        }
    }

    /// Distinct symbols, in lexicographic order.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        self.collect_symbols(&mut found);
        found
    }

    pub fn collect_symbols(&self, found: &mut BTreeSet<String>) {
        match self {
            Expr::Symbol(name) => {
                found.insert(name.clone());
            }
            Expr::Not(inner) => inner.collect_symbols(found),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) => {
                l.collect_symbols(found);
                r.collect_symbols(found);
            }
        }
    }

    /// Truth value under `model`.
    ///
    /// Both operands of a binary connective are always evaluated, so a symbol
    /// missing from the model is reported wherever it appears.
    pub fn evaluate(&self, model: &Model) -> Result<bool> {
        match self {
            Expr::Symbol(name) => model
                .get(name)
                .copied()
                .ok_or_else(|| LogicError::UnboundSymbol { symbol: name.clone() }),
            Expr::Not(inner) => Ok(!inner.evaluate(model)?),
            Expr::And(l, r) => {
                let (a, b) = (l.evaluate(model)?, r.evaluate(model)?);
                Ok(a && b)
            }
            Expr::Or(l, r) => {
                let (a, b) = (l.evaluate(model)?, r.evaluate(model)?);
                Ok(a || b)
            }
            Expr::Implies(l, r) => {
                let (a, b) = (l.evaluate(model)?, r.evaluate(model)?);
                Ok(!a || b)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(name) => f.write_str(name),
            Expr::Not(inner) => write!(f, "¬{}", inner),
            Expr::And(l, r) => write!(f, "({} ∧ {})", l, r),
            Expr::Or(l, r) => write!(f, "({} ∨ {})", l, r),
            Expr::Implies(l, r) => write!(f, "({} → {})", l, r),
        }
    }
}
