//! Error types for malformed input.
//!
//! Expected negative outcomes (a failed unification, a query that is not
//! entailed) are ordinary return values and never show up here.  A
//! `LogicError` means the engine was handed something it cannot reason about.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error("unknown operator: {op}")]
    UnknownOperator { op: String },

    #[error("operator `{op}` expects {expected} operand(s), found {found}")]
    OperatorArity {
        op: String,
        expected: usize,
        found: usize,
    },

    #[error("symbol `{symbol}` has no value in the model")]
    UnboundSymbol { symbol: String },

    #[error("symbol names must not be empty")]
    EmptySymbol,

    #[error("truth table over {count} symbols exceeds the limit of {max}")]
    TooManySymbols { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, LogicError>;

#[cfg(test)]
mod tests {
    use super::LogicError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = LogicError::UnknownOperator { op: "xor".into() };
        assert_eq!(err.to_string(), "unknown operator: xor");

        let err = LogicError::OperatorArity {
            op: "not".into(),
            expected: 1,
            found: 2,
        };
        assert!(err.to_string().contains("expects 1 operand(s), found 2"));
    }
}
