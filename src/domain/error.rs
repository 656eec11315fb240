use thiserror::Error;

/// The kinds of failure a running napkin program can hit.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum RuntimeErrorKind {
    #[error("undefined variable '{0}'.")]
    NameError(String),
    #[error("{0}")]
    TypeError(String),
    #[error("object not callable.")]
    NotCallable,
    #[error("expected {expected} arguments but got {found}.")]
    ArityError { expected: usize, found: usize },
    #[error("division by zero.")]
    DivisionByZero,
    #[error("{0}")]
    ValueError(String),
    #[error("returned from outside a function.")]
    ReturnOutsideFunction,
    #[error("i/o error: {0}")]
    IoError(String),
}

/// Operations which fail without knowing where in the program they were invoked. The interpreter
/// attaches the line when it raises one of these.
pub type DomainResult<T> = Result<T, RuntimeErrorKind>;

/// A runtime failure together with the line of the statement that raised it.
#[derive(Debug, PartialEq, Clone, Error)]
#[error("RuntimeError (line {line}): {kind}")]
pub struct RuntimeError {
    pub line: usize,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(line: usize, kind: RuntimeErrorKind) -> Self {
        Self { line, kind }
    }
}
