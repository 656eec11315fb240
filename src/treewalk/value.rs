use std::{
    fmt::{Debug, Display, Error, Formatter},
    rc::Rc,
};

use crate::{
    core::{format_real, Container},
    treewalk::{
        protocols::Callable,
        types::{Complex, Function},
    },
};

#[derive(Clone)]
pub enum TreewalkValue {
    None,
    Real(f64),
    Complex(Complex),
    Boolean(bool),
    Str(String),
    Function(Container<Function>),
    BuiltinFunction(Rc<dyn Callable>),
}

impl TreewalkValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            TreewalkValue::None => "none",
            TreewalkValue::Real(_) => "real",
            TreewalkValue::Complex(_) => "complex",
            TreewalkValue::Boolean(_) => "boolean",
            TreewalkValue::Str(_) => "string",
            TreewalkValue::Function(_) => "closure",
            TreewalkValue::BuiltinFunction(_) => "native function",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            TreewalkValue::None => false,
            TreewalkValue::Real(value) => *value != 0.0,
            TreewalkValue::Complex(value) => !value.is_zero(),
            TreewalkValue::Boolean(value) => *value,
            TreewalkValue::Str(value) => !value.is_empty(),
            TreewalkValue::Function(_) | TreewalkValue::BuiltinFunction(_) => true,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TreewalkValue::None)
    }

    pub fn as_callable(&self) -> Option<Rc<dyn Callable>> {
        match self {
            TreewalkValue::Function(function) => Some(Rc::new(function.clone())),
            TreewalkValue::BuiltinFunction(builtin) => Some(builtin.clone()),
            _ => None,
        }
    }

    /// Real and complex values, promoted to complex. Anything else is `None`.
    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            TreewalkValue::Real(value) => Some(Complex::from_real(*value)),
            TreewalkValue::Complex(value) => Some(*value),
            _ => None,
        }
    }
}

/// Callables compare by identity, everything else by value.
impl PartialEq for TreewalkValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TreewalkValue::None, TreewalkValue::None) => true,
            (TreewalkValue::Real(a), TreewalkValue::Real(b)) => a == b,
            (TreewalkValue::Complex(a), TreewalkValue::Complex(b)) => a == b,
            (TreewalkValue::Boolean(a), TreewalkValue::Boolean(b)) => a == b,
            (TreewalkValue::Str(a), TreewalkValue::Str(b)) => a == b,
            (TreewalkValue::Function(a), TreewalkValue::Function(b)) => a.same_identity(b),
            (TreewalkValue::BuiltinFunction(a), TreewalkValue::BuiltinFunction(b)) => {
                Rc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

impl Debug for TreewalkValue {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            TreewalkValue::None => write!(f, "None"),
            TreewalkValue::Real(value) => write!(f, "Real({:?})", value),
            TreewalkValue::Complex(value) => write!(f, "Complex({:?})", value),
            TreewalkValue::Boolean(value) => write!(f, "Boolean({:?})", value),
            TreewalkValue::Str(value) => write!(f, "Str({:?})", value),
            TreewalkValue::Function(function) => write!(f, "Function({:?})", function.borrow()),
            TreewalkValue::BuiltinFunction(builtin) => write!(f, "BuiltinFunction({:?})", builtin),
        }
    }
}

impl Display for TreewalkValue {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            TreewalkValue::None => write!(f, "none"),
            TreewalkValue::Real(value) => write!(f, "{}", format_real(*value)),
            TreewalkValue::Complex(value) => write!(f, "{}", value),
            TreewalkValue::Boolean(value) => write!(f, "{}", value),
            TreewalkValue::Str(value) => write!(f, "{}", value),
            TreewalkValue::Function(_) => write!(f, "<closure>"),
            TreewalkValue::BuiltinFunction(builtin) => {
                write!(f, "<native function {}>", builtin.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(TreewalkValue::Real(10.0).to_string(), "10");
        assert_eq!(TreewalkValue::Real(0.25).to_string(), "0.25");
        assert_eq!(
            TreewalkValue::Complex(Complex::new(0.0, -1.5)).to_string(),
            "0 - j1.5"
        );
        assert_eq!(TreewalkValue::Boolean(false).to_string(), "false");
        assert_eq!(TreewalkValue::Str("hi".into()).to_string(), "hi");
        assert_eq!(TreewalkValue::None.to_string(), "none");
    }

    #[test]
    fn truthiness() {
        assert!(TreewalkValue::Real(-1.0).is_truthy());
        assert!(!TreewalkValue::Real(0.0).is_truthy());
        assert!(TreewalkValue::Complex(Complex::I).is_truthy());
        assert!(!TreewalkValue::Complex(Complex::new(0.0, 0.0)).is_truthy());
        assert!(!TreewalkValue::Str(String::new()).is_truthy());
        assert!(!TreewalkValue::None.is_truthy());
    }
}
