use crate::{
    domain::{DomainResult, RuntimeErrorKind},
    parser::types::{BinOp, UnaryOp},
    treewalk::{types::Complex, TreewalkValue},
};

fn unsupported(op: &str, left: &TreewalkValue, right: &TreewalkValue) -> RuntimeErrorKind {
    RuntimeErrorKind::TypeError(format!(
        "unsupported operand type(s) for {}: '{}' and '{}'",
        op,
        left.type_name(),
        right.type_name()
    ))
}

/// Apply `op` to two evaluated operands. `and`/`or` are not handled here because they only
/// evaluate their right side when needed.
pub fn binary(left: &TreewalkValue, op: BinOp, right: &TreewalkValue) -> DomainResult<TreewalkValue> {
    match op {
        BinOp::Add => add(left, right),
        BinOp::Sub => arithmetic(left, op, right, |a, b| a - b, |a, b| a - b),
        BinOp::Mul => arithmetic(left, op, right, |a, b| a * b, |a, b| a * b),
        BinOp::Div => divide(left, right),
        BinOp::Expo => power(left, right),
        BinOp::Equals => equals(left, op, right).map(TreewalkValue::Boolean),
        BinOp::NotEquals => equals(left, op, right).map(|eq| TreewalkValue::Boolean(!eq)),
        BinOp::LessThan
        | BinOp::LessThanOrEqual
        | BinOp::GreaterThan
        | BinOp::GreaterThanOrEqual => compare(left, op, right),
    }
}

fn add(left: &TreewalkValue, right: &TreewalkValue) -> DomainResult<TreewalkValue> {
    match (left, right) {
        (TreewalkValue::Str(a), TreewalkValue::Str(b)) => Ok(TreewalkValue::Str(format!("{a}{b}"))),
        _ => arithmetic(left, BinOp::Add, right, |a, b| a + b, |a, b| a + b),
    }
}

/// Reals stay real; as soon as one side is complex both are promoted.
fn arithmetic(
    left: &TreewalkValue,
    op: BinOp,
    right: &TreewalkValue,
    real_op: fn(f64, f64) -> f64,
    complex_op: fn(Complex, Complex) -> Complex,
) -> DomainResult<TreewalkValue> {
    match (left, right) {
        (TreewalkValue::Real(a), TreewalkValue::Real(b)) => Ok(TreewalkValue::Real(real_op(*a, *b))),
        _ => match (left.as_complex(), right.as_complex()) {
            (Some(a), Some(b)) => Ok(TreewalkValue::Complex(complex_op(a, b))),
            _ => Err(unsupported(op.symbol(), left, right)),
        },
    }
}

fn divide(left: &TreewalkValue, right: &TreewalkValue) -> DomainResult<TreewalkValue> {
    if let (Some(_), Some(divisor)) = (left.as_complex(), right.as_complex()) {
        if divisor.is_zero() {
            return Err(RuntimeErrorKind::DivisionByZero);
        }
    }

    arithmetic(left, BinOp::Div, right, |a, b| a / b, |a, b| a / b)
}

fn power(left: &TreewalkValue, right: &TreewalkValue) -> DomainResult<TreewalkValue> {
    match (left, right) {
        (TreewalkValue::Real(base), TreewalkValue::Real(exponent)) => {
            if *base == 0.0 && *exponent == 0.0 {
                return Err(RuntimeErrorKind::ValueError(
                    "can't raise zero to the power of zero!".into(),
                ));
            }
            Ok(TreewalkValue::Real(base.powf(*exponent)))
        }
        (TreewalkValue::Complex(_), _) | (_, TreewalkValue::Complex(_)) => {
            Err(RuntimeErrorKind::TypeError(
                "'**' operator does not support complex numbers.".into(),
            ))
        }
        _ => Err(unsupported(BinOp::Expo.symbol(), left, right)),
    }
}

fn equals(left: &TreewalkValue, op: BinOp, right: &TreewalkValue) -> DomainResult<bool> {
    match (left, right) {
        (TreewalkValue::Boolean(_), _) | (_, TreewalkValue::Boolean(_)) => {
            Ok(left.is_truthy() == right.is_truthy())
        }
        (TreewalkValue::Str(a), TreewalkValue::Str(b)) => Ok(a == b),
        _ => match (left.as_complex(), right.as_complex()) {
            (Some(a), Some(b)) => Ok(a == b),
            _ => Err(unsupported(op.symbol(), left, right)),
        },
    }
}

fn compare(left: &TreewalkValue, op: BinOp, right: &TreewalkValue) -> DomainResult<TreewalkValue> {
    match (left, right) {
        (TreewalkValue::Real(a), TreewalkValue::Real(b)) => {
            let result = match op {
                BinOp::LessThan => a < b,
                BinOp::LessThanOrEqual => a <= b,
                BinOp::GreaterThan => a > b,
                _ => a >= b,
            };
            Ok(TreewalkValue::Boolean(result))
        }
        (TreewalkValue::Complex(_), _) | (_, TreewalkValue::Complex(_)) => {
            Err(RuntimeErrorKind::TypeError(format!(
                "'{}' operator does not support complex numbers.",
                op.symbol()
            )))
        }
        _ => Err(unsupported(op.symbol(), left, right)),
    }
}

pub fn unary(op: UnaryOp, right: &TreewalkValue) -> DomainResult<TreewalkValue> {
    if op == UnaryOp::Not {
        return Ok(TreewalkValue::Boolean(!right.is_truthy()));
    }

    let result = match (op, right) {
        (UnaryOp::Minus, TreewalkValue::Real(value)) => TreewalkValue::Real(-value),
        (UnaryOp::Minus, TreewalkValue::Complex(value)) => TreewalkValue::Complex(-*value),
        (UnaryOp::J, TreewalkValue::Real(value)) => {
            TreewalkValue::Complex(Complex::new(0.0, *value))
        }
        (UnaryOp::J, TreewalkValue::Complex(value)) => {
            TreewalkValue::Complex(*value * Complex::I)
        }
        (UnaryOp::Mag, TreewalkValue::Real(value)) => TreewalkValue::Real(value.abs()),
        (UnaryOp::Mag, TreewalkValue::Complex(value)) => TreewalkValue::Real(value.magnitude()),
        (UnaryOp::Re, TreewalkValue::Real(value)) => TreewalkValue::Real(*value),
        (UnaryOp::Re, TreewalkValue::Complex(value)) => TreewalkValue::Real(value.re),
        (UnaryOp::Im, TreewalkValue::Real(_)) => TreewalkValue::Real(0.0),
        (UnaryOp::Im, TreewalkValue::Complex(value)) => TreewalkValue::Real(value.im),
        (UnaryOp::AngleOf, TreewalkValue::Real(value)) => {
            TreewalkValue::Real(Complex::from_real(*value).angle())
        }
        (UnaryOp::AngleOf, TreewalkValue::Complex(value)) => TreewalkValue::Real(value.angle()),
        _ => {
            return Err(RuntimeErrorKind::TypeError(format!(
                "bad operand type for unary {}: '{}'",
                op.symbol(),
                right.type_name()
            )))
        }
    };

    Ok(result)
}
