use std::fmt::{Debug, Error, Formatter};

use crate::treewalk::{TreewalkInterpreter, TreewalkResult, TreewalkValue};

/// Anything which can appear on the left of a call: closures and native functions.
pub trait Callable {
    /// The caller has already checked `args` against [`Callable::arity`].
    fn call(
        &self,
        interpreter: &mut TreewalkInterpreter,
        args: Vec<TreewalkValue>,
    ) -> TreewalkResult<TreewalkValue>;

    fn name(&self) -> String;

    fn arity(&self) -> usize;
}

impl Debug for dyn Callable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "<{}>", self.name())
    }
}
