use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolution passes before the prover gives up (0 = unlimited).
pub const MAX_ROUNDS: &str = "max_rounds";
/// Size of the resolution working set before the prover gives up.
pub const MAX_CLAUSES: &str = "max_clauses";
/// Forward-chaining rounds before the chainer stops.
pub const CHAIN_MAX_ROUNDS: &str = "chain_max_rounds";

/// Every parameter name the engines read.
pub const PARAMETERS: [&str; 3] = [MAX_ROUNDS, MAX_CLAUSES, CHAIN_MAX_ROUNDS];

/// Values maintained in the parameter table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Integer(i64),
    Text(String),
}

impl ParameterValue {
    /// Integers when the text parses as one, text otherwise.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .map(ParameterValue::Integer)
            .unwrap_or_else(|_| ParameterValue::Text(raw.to_string()))
    }
}

impl Default for ParameterValue {
    fn default() -> Self {
        ParameterValue::Integer(0)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Integer(v) => write!(f, "{}", v),
            ParameterValue::Text(v) => f.write_str(v),
        }
    }
}

/// Parameter collection keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    parameters: HashMap<String, ParameterValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.parameters.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ParameterValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }

    /// Integer parameter as a count; negative values read as 0.
    pub fn get_count(&self, name: &str) -> Option<usize> {
        self.get_int(name).map(|v| usize::try_from(v).unwrap_or(0))
    }
}
