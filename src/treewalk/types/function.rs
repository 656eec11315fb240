use std::fmt::{Debug, Error, Formatter};

use crate::{
    core::Container,
    parser::types::Block,
    treewalk::{
        protocols::Callable, Scope, TreewalkDisruption, TreewalkInterpreter, TreewalkResult,
        TreewalkSignal, TreewalkValue,
    },
};

/// A lambda together with the scope it was created in. The scope is held by reference, so a
/// closure always sees the current value of every variable it can name.
pub struct Function {
    pub params: Vec<String>,
    pub body: Block,
    pub captured: Container<Scope>,
}

impl Function {
    pub fn new(params: Vec<String>, body: Block, captured: Container<Scope>) -> Self {
        Self {
            params,
            body,
            captured,
        }
    }
}

// The captured scope often contains this very function, so it is left out here.
impl Debug for Function {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "<closure ({})>", self.params.join(", "))
    }
}

impl Callable for Container<Function> {
    fn call(
        &self,
        interpreter: &mut TreewalkInterpreter,
        args: Vec<TreewalkValue>,
    ) -> TreewalkResult<TreewalkValue> {
        let function = self.borrow();

        let scope = Scope::child_of(&function.captured);
        for (param, arg) in function.params.iter().zip(args) {
            scope.borrow_mut().declare(param, arg);
        }

        match interpreter.evaluate_block_in(&function.body, scope) {
            Err(TreewalkDisruption::Signal(TreewalkSignal::Return(value))) => Ok(value),
            result => result,
        }
    }

    fn name(&self) -> String {
        "<closure>".to_string()
    }

    fn arity(&self) -> usize {
        self.borrow().params.len()
    }
}
