//! Entailment by truth-table enumeration.
//!
//! Symbols are sorted lexicographically and assignments are produced as a
//! binary counter: the first symbol is the most significant bit and `false`
//! comes before `true`.  This fixes the row order of every truth table.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{LogicError, Result};
use crate::propositional::{Expr, Model};

/// Largest symbol count accepted for enumeration.
pub const MAX_SYMBOLS: usize = 24;

/// Iterator over every model of a symbol list, in counter order.
#[derive(Clone, Debug)]
pub struct Assignments<'a> {
    symbols: &'a [String],
    next: u64,
    end: u64,
}

impl Iterator for Assignments<'_> {
    type Item = Model;

    fn next(&mut self) -> Option<Model> {
        if self.next >= self.end {
            return None;
        }
        let row = self.next;
        self.next += 1;
        let n = self.symbols.len();
        Some(
            self.symbols
                .iter()
                .enumerate()
                .map(|(i, symbol)| (symbol.clone(), (row >> (n - 1 - i)) & 1 == 1))
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_> {}

/// All `2^n` assignments over `symbols`.
pub fn assignments(symbols: &[String]) -> Result<Assignments<'_>> {
    if symbols.len() > MAX_SYMBOLS {
        return Err(LogicError::TooManySymbols { count: symbols.len(), max: MAX_SYMBOLS });
    }
    Ok(Assignments { symbols, next: 0, end: 1u64 << symbols.len() })
}

/// Sorted union of the symbols of both expressions.
pub fn symbols_of(kb: &Expr, query: &Expr) -> Vec<String> {
    let mut found = BTreeSet::new();
    kb.collect_symbols(&mut found);
    query.collect_symbols(&mut found);
    found.into_iter().collect()
}

/// True iff every model of `kb` is a model of `query`.
pub fn entails(kb: &Expr, query: &Expr) -> Result<bool> {
    let symbols = symbols_of(kb, query);
    debug!(symbols = symbols.len(), "checking entailment");
    for model in assignments(&symbols)? {
        if kb.evaluate(&model)? && !query.evaluate(&model)? {
            trace!(?model, "counter-model found");
            return Ok(false);
        }
    }
    Ok(true)
}

/// One assignment with the value of both expressions under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthRow {
    /// Symbol values, in the table's symbol order
    pub values: Vec<bool>,
    pub kb: bool,
    pub query: bool,
}

impl TruthRow {
    /// KB holds while the query fails.
    pub fn is_counter_model(&self) -> bool {
        self.kb && !self.query
    }
}

/// Full truth table for a KB/query pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub symbols: Vec<String>,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    pub fn counter_models(&self) -> impl Iterator<Item = &TruthRow> {
        self.rows.iter().filter(|row| row.is_counter_model())
    }

    /// Same answer as [`entails`], read off the table.
    pub fn entails(&self) -> bool {
        self.counter_models().next().is_none()
    }
}

/// Evaluate both expressions under every assignment.
pub fn truth_table(kb: &Expr, query: &Expr) -> Result<TruthTable> {
    let symbols = symbols_of(kb, query);
    let rows = assignments(&symbols)?
        .map(|model| {
            Ok(TruthRow {
                values: symbols.iter().map(|s| model.get(s).copied().unwrap_or(false)).collect(),
                kb: kb.evaluate(&model)?,
                query: query.evaluate(&model)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(TruthTable { symbols, rows })
}

fn cell(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("{} || KB | Query", self.symbols.join(" | "));
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;
        for row in &self.rows {
            let values: Vec<String> = row.values.iter().map(|v| cell(*v).to_string()).collect();
            writeln!(f, "{} ||  {}  |   {}", values.join(" | "), cell(row.kb), cell(row.query))?;
        }
        Ok(())
    }
}
