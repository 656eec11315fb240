use log::debug;

use crate::{
    domain::RuntimeErrorKind,
    parser::types::Expr,
    treewalk::{TreewalkInterpreter, TreewalkResult, TreewalkValue},
};

impl TreewalkInterpreter {
    pub(super) fn evaluate_function_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
    ) -> TreewalkResult<TreewalkValue> {
        let callee = self.evaluate_expr(callee)?;
        let args = args
            .iter()
            .map(|arg| self.evaluate_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;

        self.call(callee, args)
    }

    pub fn call(
        &mut self,
        callee: TreewalkValue,
        args: Vec<TreewalkValue>,
    ) -> TreewalkResult<TreewalkValue> {
        let callable = callee
            .as_callable()
            .ok_or_else(|| self.raise(RuntimeErrorKind::NotCallable))?;

        if callable.arity() != args.len() {
            return Err(self.raise(RuntimeErrorKind::ArityError {
                expected: callable.arity(),
                found: args.len(),
            }));
        }

        debug!("calling {} with {} args", callable.name(), args.len());

        // The callee runs statements of its own; errors raised after it returns belong to the
        // line of the call.
        let line = self.line;
        let result = callable.call(self, args);
        self.line = line;
        result
    }
}
