use std::fmt;

use serde::{Deserialize, Serialize};

use super::literal::Atom;

/// A positive Horn rule: a conjunction of premises implying one conclusion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub premises: Vec<Atom>,
    pub conclusion: Atom,
}

impl Rule {
    pub fn new(premises: Vec<Atom>, conclusion: Atom) -> Self {
        Self { premises, conclusion }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, premise) in self.premises.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{}", premise)?;
        }
        write!(f, " ⇒ {}", self.conclusion)
    }
}
