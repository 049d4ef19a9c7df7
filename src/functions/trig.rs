use super::{finite, one_arg, two_args};
use crate::ast::Evaluator;
use crate::error::EvalError;
use crate::number::Number;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sin", |args| Ok(Number::Float(one_arg("sin", args)?.sin())));
    evaluator.register_function("cos", |args| Ok(Number::Float(one_arg("cos", args)?.cos())));
    evaluator.register_function("tan", |args| Ok(Number::Float(one_arg("tan", args)?.tan())));

    evaluator.register_function("asin", |args| {
        let x = one_arg("asin", args)?;
        if !(-1.0..=1.0).contains(&x) {
            return Err(EvalError::Domain(
                "asin argument must be within [-1, 1]".to_string(),
            ));
        }
        Ok(Number::Float(x.asin()))
    });
    evaluator.register_function("acos", |args| {
        let x = one_arg("acos", args)?;
        if !(-1.0..=1.0).contains(&x) {
            return Err(EvalError::Domain(
                "acos argument must be within [-1, 1]".to_string(),
            ));
        }
        Ok(Number::Float(x.acos()))
    });
    evaluator.register_function("atan", |args| {
        Ok(Number::Float(one_arg("atan", args)?.atan()))
    });
    evaluator.register_function("atan2", |args| {
        let (y, x) = two_args("atan2", args)?;
        Ok(Number::Float(y.atan2(x)))
    });

    evaluator.register_function("sinh", |args| finite("sinh", one_arg("sinh", args)?.sinh()));
    evaluator.register_function("cosh", |args| finite("cosh", one_arg("cosh", args)?.cosh()));
    evaluator.register_function("tanh", |args| {
        Ok(Number::Float(one_arg("tanh", args)?.tanh()))
    });
    evaluator.register_function("asinh", |args| {
        Ok(Number::Float(one_arg("asinh", args)?.asinh()))
    });
    evaluator.register_function("acosh", |args| {
        let x = one_arg("acosh", args)?;
        if x < 1.0 {
            return Err(EvalError::Domain(
                "acosh argument must be at least 1".to_string(),
            ));
        }
        Ok(Number::Float(x.acosh()))
    });
    evaluator.register_function("atanh", |args| {
        let x = one_arg("atanh", args)?;
        if x <= -1.0 || x >= 1.0 {
            return Err(EvalError::Domain(
                "atanh argument must be within (-1, 1)".to_string(),
            ));
        }
        Ok(Number::Float(x.atanh()))
    });

    evaluator.register_function("degrees", |args| {
        Ok(Number::Float(one_arg("degrees", args)?.to_degrees()))
    });
    evaluator.register_function("radians", |args| {
        Ok(Number::Float(one_arg("radians", args)?.to_radians()))
    });
}
