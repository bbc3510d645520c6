use std::fmt;

use serde::{Deserialize, Serialize};

use super::term::{write_args, Term};

/// A predicate symbol applied to an ordered tuple of argument terms.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Atom {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Self { predicate: predicate.into(), args }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Same predicate symbol and arity.
    pub fn same_relation(&self, other: &Atom) -> bool {
        self.predicate == other.predicate && self.arity() == other.arity()
    }

    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }
}

/// Representation of a clause literal: an atom with a polarity.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Literal {
    pub sign: bool,
    pub atom: Atom,
}

impl Literal {
    pub fn new(sign: bool, atom: Atom) -> Self {
        Self { sign, atom }
    }

    pub fn positive(atom: Atom) -> Self {
        Self::new(true, atom)
    }

    pub fn negative(atom: Atom) -> Self {
        Self::new(false, atom)
    }

    pub fn negated(&self) -> Self {
        Self::new(!self.sign, self.atom.clone())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate)?;
        write_args(f, &self.args)?;
        write!(f, ")")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.sign {
            write!(f, "¬")?;
        }
        write!(f, "{}", self.atom)
    }
}
