use crate::ast::Expr;
use crate::error::EvalError;
use crate::number::Number;
use std::collections::HashMap;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(&[Number]) -> Result<Number, EvalError> + Send + Sync>;

/// Trees deeper than this fail with a recursion-limit error instead of
/// exhausting the stack.
const MAX_EVAL_DEPTH: usize = 2_000;

/// Walks an expression tree. Function calls dispatch through an explicit
/// registry; anything not registered is rejected by name.
pub struct Evaluator {
    functions: HashMap<String, Function>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a function. Crate-private on purpose: the allow-list is
    /// populated once from `functions::register_builtins` and nothing else.
    pub(crate) fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&[Number]) -> Result<Number, EvalError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Number, EvalError> {
        self.eval_node(expr, 0)
    }

    fn eval_node(&self, expr: &Expr, depth: usize) -> Result<Number, EvalError> {
        if depth > MAX_EVAL_DEPTH {
            return Err(EvalError::RecursionLimit);
        }
        match expr {
            Expr::Number(value) => Ok(*value),

            Expr::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = self.eval_node(left, depth + 1)?;
                let right_value = self.eval_node(right, depth + 1)?;
                operator.apply(left_value, right_value)
            }

            Expr::UnaryOperation { operator, operand } => {
                operator.apply(self.eval_node(operand, depth + 1)?)
            }

            Expr::FunctionCall { name, args } => {
                let function = self
                    .functions
                    .get(name)
                    .ok_or_else(|| EvalError::FunctionNotAllowed(name.clone()))?;

                let values = args
                    .iter()
                    .map(|arg| self.eval_node(arg, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                function(&values)
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, ExprParser, UnaryOperator};
    use crate::functions::register_builtins;

    fn setup_evaluator() -> Evaluator {
        let mut evaluator = Evaluator::new();
        register_builtins(&mut evaluator);
        evaluator
    }

    fn eval(input: &str) -> Result<Number, EvalError> {
        let ast = ExprParser::parse_expression(input).unwrap();
        setup_evaluator().evaluate(&ast)
    }

    #[test]
    fn test_number_literal() {
        assert_eq!(eval("7"), Ok(Number::Int(7)));
        assert_eq!(eval("2.5"), Ok(Number::Float(2.5)));
    }

    #[test]
    fn test_arithmetic_precedence() {
        assert_eq!(eval("2 + 3 * 4"), Ok(Number::Int(14)));
        assert_eq!(eval("(2 + 3) * 4"), Ok(Number::Int(20)));
        assert_eq!(eval("10 - 4 - 3"), Ok(Number::Int(3)));
        assert_eq!(eval("20 / 4 / 5"), Ok(Number::Float(1.0)));
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(eval("2 ^ 3 ^ 2"), Ok(Number::Int(512)));
    }

    #[test]
    fn test_unary_minus_with_power() {
        assert_eq!(eval("-2 ^ 2"), Ok(Number::Int(-4)));
        assert_eq!(eval("(-2) ^ 2"), Ok(Number::Int(4)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("5 / 0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_modulo() {
        assert_eq!(eval("7 % 3"), Ok(Number::Int(1)));
        assert_eq!(eval("7 % 0"), Err(EvalError::ModuloByZero));
    }

    #[test]
    fn test_function_call() {
        assert_eq!(eval("sqrt(16)"), Ok(Number::Float(4.0)));
        assert_eq!(eval("abs(-3)"), Ok(Number::Int(3)));
    }

    #[test]
    fn test_unregistered_function_is_rejected_by_name() {
        assert_eq!(
            eval("hack(1)"),
            Err(EvalError::FunctionNotAllowed("hack".to_string()))
        );
    }

    #[test]
    fn test_function_names_are_case_sensitive() {
        assert_eq!(
            eval("SQRT(16)"),
            Err(EvalError::FunctionNotAllowed("SQRT".to_string()))
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            eval("sqrt(1, 2)"),
            Err(EvalError::WrongArity {
                name: "sqrt",
                expected: "1",
                got: 2,
            })
        );
        assert!(eval("sqrt()").is_err());
    }

    #[test]
    fn test_arguments_evaluate_left_to_right() {
        assert_eq!(eval("atan2(0, 1)"), Ok(Number::Float(0.0)));
        assert!((eval("log(100, 10)").unwrap().as_f64() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_argument_failure_aborts_the_call() {
        assert_eq!(eval("sqrt(1 / 0)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_nested_function_calls() {
        assert_eq!(eval("sqrt(abs(-16))"), Ok(Number::Float(4.0)));
    }

    #[test]
    fn test_functions_inside_arithmetic() {
        assert_eq!(eval("2 * sqrt(16) + 1"), Ok(Number::Float(9.0)));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let evaluator = setup_evaluator();
        let ast = ExprParser::parse_expression("2 + 3 * 4").unwrap();
        assert_eq!(evaluator.evaluate(&ast), evaluator.evaluate(&ast));
    }

    #[test]
    fn test_direct_tree_evaluation() {
        let evaluator = setup_evaluator();
        let ast = Expr::BinaryOperation {
            left: Box::new(Expr::Number(Number::Int(6))),
            operator: BinaryOperator::Multiply,
            right: Box::new(Expr::UnaryOperation {
                operator: UnaryOperator::Negate,
                operand: Box::new(Expr::Number(Number::Int(7))),
            }),
        };
        assert_eq!(evaluator.evaluate(&ast), Ok(Number::Int(-42)));
    }

    #[test]
    fn test_recursion_limit() {
        let mut ast = Expr::Number(Number::Int(1));
        for _ in 0..5_000 {
            ast = Expr::UnaryOperation {
                operator: UnaryOperator::Negate,
                operand: Box::new(ast),
            };
        }
        assert_eq!(
            setup_evaluator().evaluate(&ast),
            Err(EvalError::RecursionLimit)
        );
    }

    #[test]
    fn test_long_flat_chain_evaluates() {
        let input = (1..=200).map(|i| i.to_string()).collect::<Vec<_>>().join(" + ");
        assert_eq!(eval(&input), Ok(Number::Int(20_100)));
    }
}
