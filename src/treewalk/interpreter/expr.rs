use log::trace;

use crate::{
    core::Container,
    parser::types::{Expr, LogicalOp},
    treewalk::{
        operators, result::Raise, types::Complex, types::Function, TreewalkInterpreter,
        TreewalkResult, TreewalkValue,
    },
};

impl TreewalkInterpreter {
    pub fn evaluate_expr(&mut self, expr: &Expr) -> TreewalkResult<TreewalkValue> {
        trace!("evaluate_expr: {:?}", expr);

        match expr {
            Expr::Real(value) => Ok(TreewalkValue::Real(*value)),
            Expr::Imaginary(value) => Ok(TreewalkValue::Complex(Complex::new(0.0, *value))),
            Expr::Boolean(value) => Ok(TreewalkValue::Boolean(*value)),
            Expr::StringLiteral(value) => Ok(TreewalkValue::Str(value.clone())),
            Expr::Constant(constant) => Ok(TreewalkValue::Real(constant.value())),
            Expr::Variable(name) => self.evaluate_variable(name),
            Expr::Grouping(inner) => self.evaluate_expr(inner),
            Expr::UnaryOperation { op, right } => {
                let right = self.evaluate_expr(right)?;
                operators::unary(*op, &right).raise(self)
            }
            Expr::BinaryOperation { left, op, right } => {
                let left = self.evaluate_expr(left)?;
                let right = self.evaluate_expr(right)?;
                operators::binary(&left, *op, &right).raise(self)
            }
            Expr::LogicalOperation { left, op, right } => {
                self.evaluate_logical_operation(left, op, right)
            }
            Expr::Assignment { name, value } => {
                let value = self.evaluate_expr(value)?;
                self.scope.borrow_mut().assign(name, value.clone());
                Ok(value)
            }
            Expr::Declaration { name, value } => {
                let value = self.evaluate_expr(value)?;
                self.scope.borrow_mut().declare(name, value.clone());
                Ok(value)
            }
            Expr::Lambda { params, body } => {
                let function = Function::new(params.clone(), body.clone(), self.scope.clone());
                Ok(TreewalkValue::Function(Container::new(function)))
            }
            Expr::FunctionCall { callee, args } => self.evaluate_function_call(callee, args),
        }
    }

    fn evaluate_variable(&self, name: &str) -> TreewalkResult<TreewalkValue> {
        let value = self.scope.borrow().get(name);
        value.ok_or_else(|| self.name_error(name))
    }

    fn evaluate_logical_operation(
        &mut self,
        left: &Expr,
        op: &LogicalOp,
        right: &Expr,
    ) -> TreewalkResult<TreewalkValue> {
        let left = self.evaluate_expr(left)?.is_truthy();

        let result = match op {
            LogicalOp::And => left && self.evaluate_expr(right)?.is_truthy(),
            LogicalOp::Or => left || self.evaluate_expr(right)?.is_truthy(),
        };

        Ok(TreewalkValue::Boolean(result))
    }
}
