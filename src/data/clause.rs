use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::literal::Literal;

/// A disjunction of literals, stored as a set.
///
/// The ordered set gives every clause a canonical form, so two clauses with
/// the same literals compare and hash equal no matter how they were built.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Clause {
    pub literals: BTreeSet<Literal>,
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self { literals: literals.into_iter().collect() }
    }

    /// The empty clause, i.e. a contradiction.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn unit(literal: Literal) -> Self {
        Self::new([literal])
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Contains some literal together with its exact complement.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .filter(|lit| lit.sign)
            .any(|lit| self.literals.contains(&lit.negated()))
    }

    /// Copy of this clause without `literal`.
    pub fn without(&self, literal: &Literal) -> Clause {
        Clause::new(self.literals.iter().filter(|l| *l != literal).cloned())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "□");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
