//! Binary resolution between two clauses.

use crate::data::{Clause, Literal};
use crate::inference::{unify_args, Substitution, UnificationError};

/// Result of a resolution step.
#[derive(Clone, Debug)]
pub struct Resolvent {
    /// The resulting clause after resolution
    pub clause: Clause,
    /// Literal of the first parent that was resolved away
    pub left: Literal,
    /// Literal of the second parent that was resolved away
    pub right: Literal,
    /// The unifying substitution used
    pub substitution: Substitution,
}

/// Resolve `lit1` of `clause1` against `lit2` of `clause2`.
///
/// The literals need opposite signs and the same predicate, and their argument
/// tuples must unify.  The resolvent holds every other literal of both parents
/// with the unifier applied.
pub fn binary_resolve(
    clause1: &Clause,
    lit1: &Literal,
    clause2: &Clause,
    lit2: &Literal,
) -> Result<Resolvent, UnificationError> {
    if lit1.sign == lit2.sign || lit1.atom.predicate != lit2.atom.predicate {
        return Err(UnificationError::SymbolClash {
            left: lit1.to_string(),
            right: lit2.to_string(),
        });
    }

    let subst = unify_args(&lit1.atom.args, &lit2.atom.args, &Substitution::new())?;

    let (rest1, rest2) = (clause1.without(lit1), clause2.without(lit2));
    let survivors = rest1.iter().chain(rest2.iter()).map(|lit| subst.apply_to_literal(lit));

    Ok(Resolvent {
        clause: Clause::new(survivors),
        left: lit1.clone(),
        right: lit2.clone(),
        substitution: subst,
    })
}

/// Every resolvent obtainable from one literal of each clause.
///
/// Variables are not renamed apart: a variable name shared by both clauses
/// denotes the same variable.
pub fn binary_resolvents(clause1: &Clause, clause2: &Clause) -> Vec<Resolvent> {
    let mut results = Vec::new();
    for lit1 in clause1.iter() {
        for lit2 in clause2.iter() {
            if let Ok(resolvent) = binary_resolve(clause1, lit1, clause2, lit2) {
                results.push(resolvent);
            }
        }
    }
    results
}

/// Resolvent clauses of a pair, tautologies dropped.
pub fn resolve_pair(clause1: &Clause, clause2: &Clause) -> Vec<Clause> {
    binary_resolvents(clause1, clause2)
        .into_iter()
        .map(|resolvent| resolvent.clause)
        .filter(|clause| !clause.is_tautology())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Atom, Term};

    fn pos(pred: &str, args: Vec<Term>) -> Literal {
        Literal::positive(Atom::new(pred, args))
    }

    fn neg(pred: &str, args: Vec<Term>) -> Literal {
        Literal::negative(Atom::new(pred, args))
    }

    fn a() -> Term {
        Term::constant("A")
    }

    fn x() -> Term {
        Term::variable("x")
    }

    #[test]
    fn resolve_units_to_empty_clause() {
        let c1 = Clause::unit(pos("P", vec![a()]));
        let c2 = Clause::unit(neg("P", vec![x()]));
        let resolvents = resolve_pair(&c1, &c2);
        assert_eq!(resolvents, vec![Clause::empty()]);
    }

    #[test]
    fn resolve_with_remaining_literals() {
        // P(A) ∨ Q(B) with ¬P(x) ∨ R(x) gives Q(B) ∨ R(A)
        let c1 = Clause::new(vec![pos("P", vec![a()]), pos("Q", vec![Term::constant("B")])]);
        let c2 = Clause::new(vec![neg("P", vec![x()]), pos("R", vec![x()])]);
        let resolvents = binary_resolvents(&c1, &c2);
        assert_eq!(resolvents.len(), 1);
        let expected = Clause::new(vec![pos("Q", vec![Term::constant("B")]), pos("R", vec![a()])]);
        assert_eq!(resolvents[0].clause, expected);
        assert_eq!(resolvents[0].substitution.apply(&x()), a());
    }

    #[test]
    fn same_sign_does_not_resolve() {
        let lit = pos("P", vec![a()]);
        let c = Clause::unit(lit.clone());
        assert!(binary_resolve(&c, &lit, &c, &lit).is_err());
    }

    #[test]
    fn different_predicates_do_not_resolve() {
        let c1 = Clause::unit(pos("P", vec![a()]));
        let c2 = Clause::unit(neg("Q", vec![a()]));
        assert!(resolve_pair(&c1, &c2).is_empty());
    }

    #[test]
    fn non_unifiable_arguments_do_not_resolve() {
        let c1 = Clause::unit(pos("P", vec![a()]));
        let c2 = Clause::unit(neg("P", vec![Term::constant("B")]));
        assert!(resolve_pair(&c1, &c2).is_empty());
    }

    #[test]
    fn every_complementary_pairing_is_tried() {
        let y = Term::variable("y");
        let c1 = Clause::new(vec![pos("P", vec![x()]), pos("Q", vec![x()])]);
        let c2 = Clause::new(vec![neg("P", vec![y.clone()]), neg("Q", vec![y])]);
        // Both resolvents are tautologies once x and y are identified
        assert_eq!(binary_resolvents(&c1, &c2).len(), 2);
        assert!(resolve_pair(&c1, &c2).is_empty());
    }
}
