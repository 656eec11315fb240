use super::types::{Statement, StatementKind};

pub fn stmt(kind: StatementKind) -> Statement {
    Statement::new(1, kind)
}

pub fn stmt_at(line: usize, kind: StatementKind) -> Statement {
    Statement::new(line, kind)
}

macro_rules! var {
    ($name:expr) => {
        $crate::parser::types::Expr::Variable($name.to_string())
    };
}

macro_rules! real {
    ($val:expr) => {
        $crate::parser::types::Expr::Real($val as f64)
    };
}

macro_rules! str {
    ($val:expr) => {
        $crate::parser::types::Expr::StringLiteral($val.to_string())
    };
}

macro_rules! bin_op {
    ($left:expr, $op:ident, $right:expr) => {
        $crate::parser::types::Expr::BinaryOperation {
            left: Box::new($left),
            op: $crate::parser::types::BinOp::$op,
            right: Box::new($right),
        }
    };
}

macro_rules! unary_op {
    ($op:ident, $right:expr) => {
        $crate::parser::types::Expr::UnaryOperation {
            op: $crate::parser::types::UnaryOp::$op,
            right: Box::new($right),
        }
    };
}

macro_rules! assign {
    ($name:expr, $value:expr) => {
        $crate::parser::types::Expr::Assignment {
            name: $name.to_string(),
            value: Box::new($value),
        }
    };
}

macro_rules! declare {
    ($name:expr, $value:expr) => {
        $crate::parser::types::Expr::Declaration {
            name: $name.to_string(),
            value: Box::new($value),
        }
    };
}

macro_rules! call {
    ($callee:expr $(, $arg:expr)* $(,)?) => {
        $crate::parser::types::Expr::FunctionCall {
            callee: Box::new($callee),
            args: vec![$($arg),*],
        }
    };
}

pub(crate) use assign;
pub(crate) use bin_op;
pub(crate) use call;
pub(crate) use declare;
pub(crate) use real;
pub(crate) use str;
pub(crate) use unary_op;
pub(crate) use var;
