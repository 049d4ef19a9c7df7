use super::{finite, one_arg, two_args};
use crate::ast::Evaluator;
use crate::error::EvalError;
use crate::number::Number;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sqrt", |args| {
        let x = one_arg("sqrt", args)?;
        if x < 0.0 {
            return Err(EvalError::Domain(
                "sqrt of a negative number".to_string(),
            ));
        }
        Ok(Number::Float(x.sqrt()))
    });

    evaluator.register_function("exp", |args| finite("exp", one_arg("exp", args)?.exp()));

    // log(x) is the natural logarithm, log(x, base) an explicit base.
    evaluator.register_function("log", |args| {
        let (x, base) = match args.len() {
            1 => (args[0].as_f64(), None),
            2 => (args[0].as_f64(), Some(args[1].as_f64())),
            got => {
                return Err(EvalError::WrongArity {
                    name: "log",
                    expected: "1 or 2",
                    got,
                })
            }
        };
        if x <= 0.0 {
            return Err(EvalError::Domain(
                "log of zero or a negative number".to_string(),
            ));
        }
        match base {
            None => Ok(Number::Float(x.ln())),
            Some(base) if base > 0.0 && base != 1.0 => Ok(Number::Float(x.log(base))),
            Some(_) => Err(EvalError::Domain(
                "log base must be positive and not 1".to_string(),
            )),
        }
    });

    evaluator.register_function("log2", |args| {
        let x = one_arg("log2", args)?;
        if x <= 0.0 {
            return Err(EvalError::Domain(
                "log2 of zero or a negative number".to_string(),
            ));
        }
        Ok(Number::Float(x.log2()))
    });
    evaluator.register_function("log10", |args| {
        let x = one_arg("log10", args)?;
        if x <= 0.0 {
            return Err(EvalError::Domain(
                "log10 of zero or a negative number".to_string(),
            ));
        }
        Ok(Number::Float(x.log10()))
    });

    evaluator.register_function("pow", |args| {
        let (base, exponent) = two_args("pow", args)?;
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
        finite("pow", value)
    });

    evaluator.register_function("hypot", |args| {
        let (x, y) = two_args("hypot", args)?;
        finite("hypot", x.hypot(y))
    });
}

#[cfg(test)]
mod tests {
    use crate::ast::{Evaluator, ExprParser};
    use crate::error::EvalError;
    use crate::functions::register_builtins;
    use crate::number::Number;

    fn eval(input: &str) -> Result<Number, EvalError> {
        let mut evaluator = Evaluator::new();
        register_builtins(&mut evaluator);
        evaluator.evaluate(&ExprParser::parse_expression(input).unwrap())
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(eval("sqrt(16)"), Ok(Number::Float(4.0)));
        assert_eq!(eval("sqrt(2.25)"), Ok(Number::Float(1.5)));
    }

    #[test]
    fn test_sqrt_of_negative_is_a_domain_error() {
        assert!(matches!(eval("sqrt(-1)"), Err(EvalError::Domain(_))));
    }

    #[test]
    fn test_exp() {
        assert_eq!(eval("exp(0)"), Ok(Number::Float(1.0)));
        assert_eq!(eval("exp(1000)"), Err(EvalError::Range("exp")));
    }

    #[test]
    fn test_natural_log() {
        assert_eq!(eval("log(1)"), Ok(Number::Float(0.0)));
        assert!((eval("log(exp(2))").unwrap().as_f64() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_with_base() {
        assert!((eval("log(100, 10)").unwrap().as_f64() - 2.0).abs() < 1e-12);
        assert!((eval("log(8, 2)").unwrap().as_f64() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_domain() {
        assert!(matches!(eval("log(0)"), Err(EvalError::Domain(_))));
        assert!(matches!(eval("log(-3)"), Err(EvalError::Domain(_))));
        assert!(matches!(eval("log(10, 1)"), Err(EvalError::Domain(_))));
        assert!(matches!(eval("log(10, -2)"), Err(EvalError::Domain(_))));
    }

    #[test]
    fn test_log_arity() {
        assert_eq!(
            eval("log(1, 2, 3)"),
            Err(EvalError::WrongArity {
                name: "log",
                expected: "1 or 2",
                got: 3,
            })
        );
    }

    #[test]
    fn test_log2_and_log10() {
        assert_eq!(eval("log2(8)"), Ok(Number::Float(3.0)));
        assert_eq!(eval("log10(1000)"), Ok(Number::Float(3.0)));
        assert!(matches!(eval("log2(0)"), Err(EvalError::Domain(_))));
        assert!(matches!(eval("log10(-1)"), Err(EvalError::Domain(_))));
    }

    #[test]
    fn test_pow() {
        assert_eq!(eval("pow(2, 10)"), Ok(Number::Float(1024.0)));
        assert!(matches!(eval("pow(0, -1)"), Err(EvalError::Domain(_))));
        assert!(matches!(eval("pow(-8, 0.5)"), Err(EvalError::Domain(_))));
    }

    #[test]
    fn test_hypot() {
        assert_eq!(eval("hypot(3, 4)"), Ok(Number::Float(5.0)));
    }
}
