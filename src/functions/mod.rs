//! The function allow-list. Every callable name is enumerated here by
//! hand; nothing a caller types can extend the set.

pub mod exponential;
pub mod rounding;
pub mod trig;

use crate::ast::Evaluator;
use crate::error::EvalError;
use crate::number::Number;

pub fn register_builtins(evaluator: &mut Evaluator) {
    trig::register(evaluator);
    exponential::register(evaluator);
    rounding::register(evaluator);
}

/// Extracts the single argument of a one-argument function.
pub(crate) fn one_arg(name: &'static str, args: &[Number]) -> Result<f64, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::WrongArity {
            name,
            expected: "1",
            got: args.len(),
        });
    }
    Ok(args[0].as_f64())
}

pub(crate) fn two_args(name: &'static str, args: &[Number]) -> Result<(f64, f64), EvalError> {
    if args.len() != 2 {
        return Err(EvalError::WrongArity {
            name,
            expected: "2",
            got: args.len(),
        });
    }
    Ok((args[0].as_f64(), args[1].as_f64()))
}

/// Rejects infinite results so float overflow surfaces as an error
/// instead of a silently propagated infinity.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<Number, EvalError> {
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(EvalError::Range(name))
    }
}
