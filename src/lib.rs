//! Safe arithmetic expression calculator.
//!
//! Parses free-form arithmetic into a closed expression tree and evaluates
//! it through explicit operator and function allow-lists. Anything outside
//! the allow-lists is rejected with an error; nothing a caller types can
//! execute arbitrary behavior.

pub mod ast;
pub mod calculator;
pub mod error;
pub mod functions;
pub mod number;

use ast::{Evaluator, ExprParser};
use error::CalcError;
use functions::register_builtins;
use number::Number;

/// Parses and evaluates an expression, keeping the typed error taxonomy.
pub fn parse_and_evaluate(expression: &str) -> Result<Number, CalcError> {
    let ast = ExprParser::parse_expression(expression)?;

    let mut evaluator = Evaluator::new();
    register_builtins(&mut evaluator);
    Ok(evaluator.evaluate(&ast)?)
}

/// The single entry point for callers: either a number or one descriptive
/// error string. No failure escapes this boundary.
pub fn evaluate(expression: &str) -> Result<Number, String> {
    parse_and_evaluate(expression).map_err(|e| e.to_string())
}
