//! Unification algorithm for first-order terms.
//!
//! Implements Robinson unification with occurs check.  Substitutions are kept
//! idempotent: every binding is composed into the existing ones at insertion
//! time, so applying a substitution is a single structural pass.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::{Atom, Clause, Literal, Term, Variable};

/// A substitution mapping variables to terms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    bindings: BTreeMap<Variable, Term>,
}

impl Substitution {
    /// Create an empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `var` to `term`, composing the binding into the existing ones.
    ///
    /// The current bindings are applied to `term` first, then the new binding
    /// is applied to every existing range term.  Fails if `var` occurs in the
    /// resolved term, which keeps the substitution acyclic.
    ///
    /// If `var` is already bound, `term` is unified with the existing binding
    /// instead; on failure the substitution is left unchanged.
    pub fn extend(
        &mut self,
        var: Variable,
        term: Term,
    ) -> Result<(), UnificationError> {
        if let Some(bound) = self.lookup(&var).cloned() {
            let mut unifier = Unifier::with_substitution(self.clone());
            unifier.unify(&bound, &term)?;
            *self = unifier.into_substitution();
            return Ok(());
        }
        let term = self.apply(&term);
        if term == Term::Variable(var.clone()) {
            return Ok(());
        }
        if term.occurs(&var) {
            return Err(UnificationError::OccursCheck { var, term });
        }
        for bound in self.bindings.values_mut() {
            if bound.occurs(&var) {
                *bound = replace_variable(bound, &var, &term);
            }
        }
        self.bindings.insert(var, term);
        Ok(())
    }

    /// Look up a variable's binding.
    pub fn lookup(&self, var: &Variable) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Check if the substitution is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Iterate over all bindings, ordered by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.bindings.iter()
    }

    /// Apply this substitution to a term, returning a new term.
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(var) => match self.lookup(var) {
                Some(bound) => bound.clone(),
                None => term.clone(),
            },
            Term::Constant(_) => term.clone(),
            Term::Compound { functor, args } => Term::Compound {
                functor: functor.clone(),
                args: args.iter().map(|arg| self.apply(arg)).collect(),
            },
        }
    }

    pub fn apply_to_atom(&self, atom: &Atom) -> Atom {
        Atom {
            predicate: atom.predicate.clone(),
            args: atom.args.iter().map(|arg| self.apply(arg)).collect(),
        }
    }

    pub fn apply_to_literal(&self, lit: &Literal) -> Literal {
        Literal::new(lit.sign, self.apply_to_atom(&lit.atom))
    }

    pub fn apply_to_clause(&self, clause: &Clause) -> Clause {
        Clause::new(clause.iter().map(|lit| self.apply_to_literal(lit)))
    }
}

fn replace_variable(term: &Term, var: &Variable, value: &Term) -> Term {
    match term {
        Term::Variable(v) if v == var => value.clone(),
        Term::Compound { functor, args } => Term::Compound {
            functor: functor.clone(),
            args: args
                .iter()
                .map(|arg| replace_variable(arg, var, value))
                .collect(),
        },
        _ => term.clone(),
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ↦ {}", var, term)?;
        }
        write!(f, "}}")
    }
}

/// Reasons a unification attempt fails.
///
/// These are ordinary search outcomes, not malformed input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum UnificationError {
    /// The variable occurs in the term it would be bound to.
    #[error("occurs check failed: {var} occurs in {term}")]
    OccursCheck { var: Variable, term: Term },
    /// Different constants, functors or predicates.
    #[error("symbol clash: {left} vs {right}")]
    SymbolClash { left: String, right: String },
    #[error("arity mismatch: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },
}

/// Unifier for first-order terms.
#[derive(Clone, Debug, Default)]
pub struct Unifier {
    /// Current substitution being built
    substitution: Substitution,
}

impl Unifier {
    /// Create a new unifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing substitution.
    pub fn with_substitution(substitution: Substitution) -> Self {
        Self { substitution }
    }

    /// Get the current substitution.
    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    /// Consume the unifier and return the substitution.
    pub fn into_substitution(self) -> Substitution {
        self.substitution
    }

    /// Attempt to unify two terms, extending the internal substitution.
    ///
    /// On failure the internal substitution may hold partial bindings; callers
    /// that need the pre-failure state work on a copy (see [`unify`]).
    pub fn unify(&mut self, t1: &Term, t2: &Term) -> Result<(), UnificationError> {
        // Resolve already-bound variables first
        let t1 = self.substitution.apply(t1);
        let t2 = self.substitution.apply(t2);

        if t1 == t2 {
            return Ok(());
        }

        match (t1, t2) {
            (Term::Variable(var), term) | (term, Term::Variable(var)) => {
                self.substitution.extend(var, term)
            }
            (
                Term::Compound { functor: f1, args: args1 },
                Term::Compound { functor: f2, args: args2 },
            ) => {
                if f1 != f2 {
                    return Err(UnificationError::SymbolClash { left: f1, right: f2 });
                }
                self.unify_args(&args1, &args2)
            }
            (left, right) => Err(UnificationError::SymbolClash {
                left: head_symbol(&left),
                right: head_symbol(&right),
            }),
        }
    }

    /// Unify argument tuples pairwise, left to right.
    pub fn unify_args(
        &mut self,
        args1: &[Term],
        args2: &[Term],
    ) -> Result<(), UnificationError> {
        if args1.len() != args2.len() {
            return Err(UnificationError::ArityMismatch {
                expected: args1.len(),
                found: args2.len(),
            });
        }
        for (a, b) in args1.iter().zip(args2) {
            self.unify(a, b)?;
        }
        Ok(())
    }
}

fn head_symbol(term: &Term) -> String {
    match term {
        Term::Variable(v) => v.name().to_string(),
        Term::Constant(c) => c.name().to_string(),
        Term::Compound { functor, .. } => functor.clone(),
    }
}

/// Most general unifier of `t1` and `t2` extending `subst`.
///
/// `subst` itself is left untouched; on success the extended copy is
/// returned.
pub fn unify(
    t1: &Term,
    t2: &Term,
    subst: &Substitution,
) -> Result<Substitution, UnificationError> {
    let mut unifier = Unifier::with_substitution(subst.clone());
    unifier.unify(t1, t2)?;
    Ok(unifier.into_substitution())
}

/// Unify two argument tuples pairwise under `subst`.
pub fn unify_args(
    args1: &[Term],
    args2: &[Term],
    subst: &Substitution,
) -> Result<Substitution, UnificationError> {
    let mut unifier = Unifier::with_substitution(subst.clone());
    unifier.unify_args(args1, args2)?;
    Ok(unifier.into_substitution())
}

/// Unify two atoms: the predicates must agree, then the arguments unify.
pub fn unify_atoms(
    a1: &Atom,
    a2: &Atom,
    subst: &Substitution,
) -> Result<Substitution, UnificationError> {
    if a1.predicate != a2.predicate {
        return Err(UnificationError::SymbolClash {
            left: a1.predicate.clone(),
            right: a2.predicate.clone(),
        });
    }
    unify_args(&a1.args, &a2.args, subst)
}
