use std::io;

use crate::{
    domain::{RuntimeError, RuntimeErrorKind},
    treewalk::{TreewalkDisruption, TreewalkInterpreter},
};

impl TreewalkInterpreter {
    pub fn raise(&self, kind: RuntimeErrorKind) -> TreewalkDisruption {
        TreewalkDisruption::Error(RuntimeError::new(self.line, kind))
    }

    pub fn name_error(&self, name: impl Into<String>) -> TreewalkDisruption {
        self.raise(RuntimeErrorKind::NameError(name.into()))
    }

    pub fn io_error(&self, error: io::Error) -> TreewalkDisruption {
        self.raise(RuntimeErrorKind::IoError(error.to_string()))
    }
}
