//! Propositional logic: expressions over named symbols and entailment by
//! model enumeration.

mod entail;
mod expr;

pub use entail::{
    assignments, entails, symbols_of, truth_table, Assignments, TruthRow, TruthTable,
    MAX_SYMBOLS,
};
pub use expr::{Expr, Model, Operator};
