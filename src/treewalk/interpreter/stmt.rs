use log::trace;

use crate::{
    core::Container,
    parser::types::{Block, ConditionalBlock, Statement, StatementKind},
    treewalk::{
        Scope, TreewalkDisruption, TreewalkInterpreter, TreewalkResult, TreewalkSignal,
        TreewalkValue,
    },
};

impl TreewalkInterpreter {
    pub fn evaluate_statement(&mut self, stmt: &Statement) -> TreewalkResult<TreewalkValue> {
        self.line = stmt.line;
        trace!("line {}: {:?}", stmt.line, stmt.kind);

        match &stmt.kind {
            StatementKind::Expression(expr) => self.evaluate_expr(expr),
            StatementKind::Output(expr) => {
                let value = self.evaluate_expr(expr)?;
                self.write_value(&value)?;
                Ok(TreewalkValue::None)
            }
            StatementKind::Return(expr) => {
                let value = match expr {
                    Some(expr) => self.evaluate_expr(expr)?,
                    None => TreewalkValue::None,
                };
                Err(TreewalkDisruption::Signal(TreewalkSignal::Return(value)))
            }
            StatementKind::Block(block) => {
                let scope = Scope::child_of(&self.scope);
                self.evaluate_block_in(block, scope)
            }
            StatementKind::IfElse {
                if_part,
                elif_parts,
                else_part,
            } => {
                for part in std::iter::once(if_part).chain(elif_parts) {
                    if self.evaluate_expr(&part.condition)?.is_truthy() {
                        return self.evaluate_statement(&part.body);
                    }
                }

                match else_part {
                    Some(else_part) => self.evaluate_statement(else_part),
                    None => Ok(TreewalkValue::None),
                }
            }
            StatementKind::WhileLoop(cond) => self.evaluate_while_loop(cond),
        }
    }

    fn evaluate_while_loop(&mut self, cond: &ConditionalBlock) -> TreewalkResult<TreewalkValue> {
        // The condition belongs to the `while` line, not to the last statement of the body.
        let line = self.line;
        loop {
            self.line = line;
            if !self.evaluate_expr(&cond.condition)?.is_truthy() {
                break;
            }
            self.evaluate_statement(&cond.body)?;
        }

        Ok(TreewalkValue::None)
    }

    /// Run `block` with `scope` as the innermost scope. The previous scope is put back whether
    /// or not the block completes normally.
    pub fn evaluate_block_in(
        &mut self,
        block: &Block,
        scope: Container<Scope>,
    ) -> TreewalkResult<TreewalkValue> {
        let previous = std::mem::replace(&mut self.scope, scope);

        let result = block
            .statements
            .iter()
            .try_fold(TreewalkValue::None, |_, stmt| self.evaluate_statement(stmt));

        self.scope = previous;
        result
    }
}
