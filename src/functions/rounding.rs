use crate::ast::Evaluator;
use crate::error::EvalError;
use crate::number::Number;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("abs", |args| {
        if args.len() != 1 {
            return Err(EvalError::WrongArity {
                name: "abs",
                expected: "1",
                got: args.len(),
            });
        }
        Ok(match args[0] {
            Number::Int(value) => value
                .checked_abs()
                .map(Number::Int)
                .unwrap_or(Number::Float((value as f64).abs())),
            Number::Float(value) => Number::Float(value.abs()),
        })
    });

    // round(x) rounds half away from zero and yields an integer;
    // round(x, ndigits) rounds to a decimal place and stays a float.
    evaluator.register_function("round", |args| match args {
        [value] => Ok(match *value {
            Number::Int(v) => Number::Int(v),
            Number::Float(v) => Number::from_integral_float(v.round()),
        }),
        [value, ndigits] => {
            let digits = integral_arg("round", *ndigits)?;
            match *value {
                Number::Int(v) => Ok(Number::Int(v)),
                Number::Float(v) => {
                    let factor = 10f64.powi(digits.clamp(-308, 308) as i32);
                    Ok(Number::Float((v * factor).round() / factor))
                }
            }
        }
        _ => Err(EvalError::WrongArity {
            name: "round",
            expected: "1 or 2",
            got: args.len(),
        }),
    });

    evaluator.register_function("floor", |args| {
        rounded("floor", args, f64::floor)
    });
    evaluator.register_function("ceil", |args| rounded("ceil", args, f64::ceil));
    evaluator.register_function("trunc", |args| {
        rounded("trunc", args, f64::trunc)
    });
}

fn rounded(
    name: &'static str,
    args: &[Number],
    op: fn(f64) -> f64,
) -> Result<Number, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::WrongArity {
            name,
            expected: "1",
            got: args.len(),
        });
    }
    Ok(match args[0] {
        Number::Int(value) => Number::Int(value),
        Number::Float(value) => Number::from_integral_float(op(value)),
    })
}

fn integral_arg(name: &'static str, value: Number) -> Result<i64, EvalError> {
    match value {
        Number::Int(v) => Ok(v),
        Number::Float(v) if v.fract() == 0.0 && v.is_finite() => Ok(v as i64),
        _ => Err(EvalError::Domain(format!(
            "{} digit count must be an integer",
            name
        ))),
    }
}
