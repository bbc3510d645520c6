use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LogicError, Result};

/// A logic variable, identified by name.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// An opaque symbolic constant, equal only to itself.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Constant(String);

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Representation of a first-order term.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Compound { functor: String, args: Vec<Term> },
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Self::Constant(Constant::new(name))
    }

    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Self::Compound { functor: functor.into(), args }
    }

    /// Build a variable or constant from a bare name using the classic
    /// convention: a lowercase initial letter marks a variable, anything else
    /// is a constant.
    pub fn symbol(name: &str) -> Result<Self> {
        let first = name.chars().next().ok_or(LogicError::EmptySymbol)?;
        if first.is_lowercase() {
            Ok(Self::variable(name))
        } else {
            Ok(Self::constant(name))
        }
    }

    /// True if `var` appears anywhere inside this term.
    pub fn occurs(&self, var: &Variable) -> bool {
        match self {
            Term::Variable(v) => v == var,
            Term::Constant(_) => false,
            Term::Compound { args, .. } => args.iter().any(|a| a.occurs(var)),
        }
    }

    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Compound { args, .. } => args.iter().all(Term::is_ground),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Compound { functor, args } => {
                write!(f, "{}(", functor)?;
                write_args(f, args)?;
                write!(f, ")")
            }
        }
    }
}

/// Comma-separated argument list shared by term and atom formatting.
pub(crate) fn write_args(f: &mut fmt::Formatter<'_>, args: &[Term]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}
