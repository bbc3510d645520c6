use symlogic::{
    entails, truth_table, unify, Atom, Clause, ConfigBuilder, Expr, FlagSet, Literal,
    LogicError, ParameterSet, ParameterValue, Statistics, Substitution, Term,
    UnificationError, Variable,
};

fn var(name: &str) -> Term {
    Term::variable(name)
}

fn cst(name: &str) -> Term {
    Term::constant(name)
}

#[test]
fn flags_and_parameters_basic_usage() {
    let mut flags = FlagSet::new();
    flags.enable("trace");
    assert!(flags.is_enabled("trace"));

    let mut params = ParameterSet::new();
    params.set("max_rounds", ParameterValue::Integer(10));
    assert_eq!(params.get_int("max_rounds"), Some(10));

    let builder = ConfigBuilder::from_settings(&flags, &params);
    assert_eq!(builder.prover_config().max_rounds, 10);
    assert!(builder.chain_config().trace);
}

#[test]
fn statistics_accumulate() {
    let mut stats = Statistics::new();
    stats.increment("rounds");
    stats.increment_by("rounds", 2);
    assert_eq!(stats.get("rounds"), Some(3));
    assert_eq!(stats.get("missing"), None);
}

#[test]
fn unify_binds_across_both_terms() {
    let t1 = Term::compound("f", vec![var("x"), cst("B")]);
    let t2 = Term::compound("f", vec![cst("A"), var("y")]);
    let s = unify(&t1, &t2, &Substitution::new()).unwrap();
    assert_eq!(s.lookup(&Variable::new("x")), Some(&cst("A")));
    assert_eq!(s.lookup(&Variable::new("y")), Some(&cst("B")));
    assert_eq!(s.len(), 2);
}

#[test]
fn unify_reports_why_it_failed() {
    let clash = unify(
        &Term::compound("f", vec![var("x")]),
        &Term::compound("g", vec![var("x")]),
        &Substitution::new(),
    );
    assert!(matches!(clash, Err(UnificationError::SymbolClash { .. })));

    let cyclic = unify(&var("x"), &Term::compound("f", vec![var("x")]), &Substitution::new());
    assert!(matches!(cyclic, Err(UnificationError::OccursCheck { .. })));
}

#[test]
fn substitution_applies_through_clauses() {
    let s = unify(&var("x"), &cst("Marcus"), &Substitution::new()).unwrap();
    let clause = Clause::new(vec![
        Literal::negative(Atom::new("Man", vec![var("x")])),
        Literal::positive(Atom::new("Mortal", vec![var("x")])),
    ]);
    let ground = s.apply_to_clause(&clause);
    assert!(ground.iter().all(|lit| lit.atom.is_ground()));
    assert_eq!(ground.len(), 2);
}

#[test]
fn entailment_table_lists_every_assignment() {
    let kb = Expr::and(
        Expr::or(Expr::symbol("A"), Expr::symbol("C")),
        Expr::or(Expr::symbol("B"), Expr::negate(Expr::symbol("C"))),
    );
    let query = Expr::or(Expr::symbol("A"), Expr::symbol("B"));
    assert_eq!(entails(&kb, &query), Ok(true));

    let table = truth_table(&kb, &query).unwrap();
    assert_eq!(table.symbols, vec!["A", "B", "C"]);
    assert_eq!(table.rows.len(), 8);
    assert_eq!(table.rows[0].values, vec![false, false, false]);
    assert_eq!(table.rows[7].values, vec![true, true, true]);
    assert_eq!(table.rows.iter().filter(|row| row.kb).count(), 4);
    assert!(table.entails());
}

#[test]
fn non_entailment_has_a_counter_model() {
    let kb = Expr::or(Expr::symbol("A"), Expr::symbol("B"));
    let query = Expr::symbol("A");
    assert_eq!(entails(&kb, &query), Ok(false));

    let table = truth_table(&kb, &query).unwrap();
    let counter: Vec<_> = table.counter_models().map(|row| row.values.clone()).collect();
    assert_eq!(counter, vec![vec![false, true]]);
}

#[test]
fn unknown_operator_is_rejected() {
    let err = Expr::operator("xor", vec![Expr::symbol("A"), Expr::symbol("B")]).unwrap_err();
    assert_eq!(err, LogicError::UnknownOperator { op: "xor".into() });

    let err = Expr::operator("not", vec![Expr::symbol("A"), Expr::symbol("B")]).unwrap_err();
    assert!(matches!(err, LogicError::OperatorArity { expected: 1, found: 2, .. }));
}

#[test]
fn contradictory_kb_entails_anything() {
    let kb = Expr::and(Expr::symbol("P"), Expr::negate(Expr::symbol("P")));
    assert_eq!(entails(&kb, &Expr::symbol("Q")), Ok(true));
}

#[test]
fn tautology_is_entailed_by_anything() {
    let p = Expr::symbol("P");
    let query = Expr::implies(p.clone(), p);
    assert_eq!(entails(&Expr::symbol("Q"), &query), Ok(true));
}
