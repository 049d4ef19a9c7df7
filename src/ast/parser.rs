use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::SyntaxError;
use crate::number::Number;
use log::debug;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

/// Nesting beyond this is rejected up front so hostile input cannot blow
/// the parse or evaluation stack. Both parentheses and unary-minus chains
/// recurse in the grammar, so the guard counts both.
const MAX_NESTING_DEPTH: usize = 200;

#[derive(Parser)]
#[grammar = "./expression.pest"]
pub struct ExprParser;

impl ExprParser {
    pub fn parse_expression(input: &str) -> Result<Expr, SyntaxError> {
        debug!("parsing expression: {}", input);
        if nesting_depth(input) > MAX_NESTING_DEPTH {
            return Err(SyntaxError::new("expression is nested too deeply"));
        }
        let pair = ExprParser::parse(Rule::expression, input)
            .map_err(|e| SyntaxError::new(e.to_string()))?
            .next()
            .ok_or_else(|| SyntaxError::new("empty expression"))?;

        let additive = pair
            .into_inner()
            .next()
            .ok_or_else(|| SyntaxError::new("empty expression"))?;
        Self::build_additive(additive)
    }

    fn build_additive(pair: Pair<Rule>) -> Result<Expr, SyntaxError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_multiplicative(pairs.next().unwrap())?;

        while let Some(operator_pair) = pairs.next() {
            let operator =
                BinaryOperator::try_from(operator_pair.as_str()).map_err(SyntaxError::new)?;
            let right = Self::build_multiplicative(pairs.next().unwrap())?;
            node = Expr::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_multiplicative(pair: Pair<Rule>) -> Result<Expr, SyntaxError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_unary(pairs.next().unwrap())?;

        while let Some(operator_pair) = pairs.next() {
            let operator =
                BinaryOperator::try_from(operator_pair.as_str()).map_err(SyntaxError::new)?;
            let right = Self::build_unary(pairs.next().unwrap())?;
            node = Expr::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_unary(pair: Pair<Rule>) -> Result<Expr, SyntaxError> {
        let mut pairs = pair.into_inner();
        let first = pairs.next().unwrap();

        if first.as_rule() == Rule::MINUS {
            let operand = Self::build_unary(pairs.next().unwrap())?;
            Ok(Expr::UnaryOperation {
                operator: UnaryOperator::Negate,
                operand: Box::new(operand),
            })
        } else {
            Self::build_power(first)
        }
    }

    fn build_power(pair: Pair<Rule>) -> Result<Expr, SyntaxError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_primary(pairs.next().unwrap())?;

        // The exponent re-enters at the unary level, which makes the
        // operator right-associative: 2 ^ 3 ^ 2 is 2 ^ (3 ^ 2).
        if let Some(operator_pair) = pairs.next() {
            let operator =
                BinaryOperator::try_from(operator_pair.as_str()).map_err(SyntaxError::new)?;
            let right = Self::build_unary(pairs.next().unwrap())?;
            node = Expr::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn build_primary(pair: Pair<Rule>) -> Result<Expr, SyntaxError> {
        match pair.as_rule() {
            Rule::number => Ok(Expr::Number(build_number(pair.as_str()))),
            Rule::group => {
                let inner = pair.into_inner().next().unwrap();
                Self::build_additive(inner)
            }
            Rule::function_call => Self::build_function_call(pair),
            _ => Err(SyntaxError::new(format!(
                "unexpected rule in primary expression: {:?}",
                pair.as_rule()
            ))),
        }
    }

    fn build_function_call(pair: Pair<Rule>) -> Result<Expr, SyntaxError> {
        let mut inner = pair.into_inner();
        let name = inner.next().unwrap().as_str().to_string();
        let mut args = Vec::new();
        if let Some(list) = inner.next() {
            for arg in list.into_inner() {
                args.push(Self::build_additive(arg)?);
            }
        }
        Ok(Expr::FunctionCall { name, args })
    }
}

fn build_number(text: &str) -> Number {
    if text.contains(['.', 'e', 'E']) {
        Number::Float(text.parse::<f64>().unwrap())
    } else {
        // Integer literals stay exact; anything past i64 becomes a float.
        text.parse::<i64>()
            .map(Number::Int)
            .unwrap_or_else(|_| Number::Float(text.parse::<f64>().unwrap()))
    }
}

/// Upper bound on the grammar's recursion for this input: open parentheses
/// plus the unary-minus runs still pending on the open path. A minus run
/// ends at the first non-minus token of its operand, so flat input like
/// "1 - 2 - 3" never accumulates depth.
fn nesting_depth(input: &str) -> usize {
    let mut pending = Vec::new();
    let mut pending_sum = 0usize;
    let mut run = 0usize;
    let mut max = 0usize;
    for byte in input.bytes() {
        match byte {
            b'(' => {
                pending.push(run);
                pending_sum += run;
                run = 0;
                max = max.max(pending.len() + pending_sum);
            }
            b')' => {
                if let Some(r) = pending.pop() {
                    pending_sum -= r;
                }
                run = 0;
            }
            b'-' => {
                run += 1;
                max = max.max(pending.len() + pending_sum + run);
            }
            b' ' | b'\t' | b'\r' | b'\n' => {}
            _ => run = 0,
        }
    }
    max
}
