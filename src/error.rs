use thiserror::Error;

/// The input could not be parsed into the closed expression vocabulary.
#[derive(Debug, Error)]
#[error("syntax error: {message}")]
pub struct SyntaxError {
    message: String,
}

impl SyntaxError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A well-formed tree failed to evaluate.
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("function not allowed: {0}")]
    FunctionNotAllowed(String),
    #[error("{name} expects {expected} argument(s), got {got}")]
    WrongArity {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("math domain error: {0}")]
    Domain(String),
    #[error("math range error in {0}")]
    Range(&'static str),
    #[error("expression is nested too deeply")]
    RecursionLimit,
}

/// Sum of the two failure kinds; flattened to a string only at the facade.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
