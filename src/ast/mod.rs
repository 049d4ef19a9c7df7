mod evaluator;
mod parser;

use crate::error::EvalError;
use crate::number::Number;

pub use evaluator::{Evaluator, Function};
pub use parser::ExprParser;

/// Parsed expression tree. Exactly four node shapes exist; the parser
/// rejects any source that would need another one.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    BinaryOperation {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    FunctionCall {
        name: String,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl BinaryOperator {
    pub fn apply(&self, left: Number, right: Number) -> Result<Number, EvalError> {
        match self {
            BinaryOperator::Add => Ok(match (left, right) {
                (Number::Int(a), Number::Int(b)) => a
                    .checked_add(b)
                    .map(Number::Int)
                    .unwrap_or(Number::Float(a as f64 + b as f64)),
                _ => Number::Float(left.as_f64() + right.as_f64()),
            }),
            BinaryOperator::Subtract => Ok(match (left, right) {
                (Number::Int(a), Number::Int(b)) => a
                    .checked_sub(b)
                    .map(Number::Int)
                    .unwrap_or(Number::Float(a as f64 - b as f64)),
                _ => Number::Float(left.as_f64() - right.as_f64()),
            }),
            BinaryOperator::Multiply => Ok(match (left, right) {
                (Number::Int(a), Number::Int(b)) => a
                    .checked_mul(b)
                    .map(Number::Int)
                    .unwrap_or(Number::Float(a as f64 * b as f64)),
                _ => Number::Float(left.as_f64() * right.as_f64()),
            }),
            BinaryOperator::Divide => {
                if right.is_zero() {
                    Err(EvalError::DivisionByZero)
                } else {
                    // True division: always floating point, like 4 / 2 == 2.0.
                    Ok(Number::Float(left.as_f64() / right.as_f64()))
                }
            }
            BinaryOperator::Modulo => {
                if right.is_zero() {
                    return Err(EvalError::ModuloByZero);
                }
                // Floored modulo: the result takes the divisor's sign.
                Ok(match (left, right) {
                    (Number::Int(a), Number::Int(b)) => match a.checked_rem(b) {
                        Some(r) => {
                            Number::Int(if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
                        }
                        // i64::MIN % -1 overflows checked_rem; the result is 0.
                        None => Number::Int(0),
                    },
                    _ => {
                        let (a, b) = (left.as_f64(), right.as_f64());
                        let r = a % b;
                        Number::Float(if r != 0.0 && (r < 0.0) != (b < 0.0) {
                            r + b
                        } else {
                            r
                        })
                    }
                })
            }
            BinaryOperator::Power => apply_power(left, right),
        }
    }
}

fn apply_power(left: Number, right: Number) -> Result<Number, EvalError> {
    if let (Number::Int(base), Number::Int(exponent)) = (left, right) {
        if exponent >= 0 {
            let exact = u32::try_from(exponent)
                .ok()
                .and_then(|e| base.checked_pow(e));
            if let Some(value) = exact {
                return Ok(Number::Int(value));
            }
            // Overflowed i64: fall through to the float path.
        }
    }
    let (base, exponent) = (left.as_f64(), right.as_f64());
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::Domain(
            "zero cannot be raised to a negative power".to_string(),
        ));
    }
    let value = base.powf(exponent);
    if value.is_nan() {
        return Err(EvalError::Domain(
            "negative number raised to a fractional power".to_string(),
        ));
    }
    if !value.is_finite() {
        return Err(EvalError::Range("power"));
    }
    Ok(Number::Float(value))
}

impl TryFrom<&str> for BinaryOperator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(BinaryOperator::Add),
            "-" => Ok(BinaryOperator::Subtract),
            "*" => Ok(BinaryOperator::Multiply),
            "/" => Ok(BinaryOperator::Divide),
            "%" => Ok(BinaryOperator::Modulo),
            "^" | "**" => Ok(BinaryOperator::Power),
            _ => Err(format!("unknown operator: {}", value)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    pub fn apply(&self, operand: Number) -> Result<Number, EvalError> {
        match self {
            UnaryOperator::Negate => Ok(match operand {
                Number::Int(value) => value
                    .checked_neg()
                    .map(Number::Int)
                    .unwrap_or(Number::Float(-(value as f64))),
                Number::Float(value) => Number::Float(-value),
            }),
        }
    }
}
