use thiserror::Error;

use crate::{domain::RuntimeError, lexer::Token};

pub type NapkinResult<T> = Result<T, NapkinError>;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum NapkinError {
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),
    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
    /// The program called `exit`. This is not a failure, it carries the requested status out to
    /// whoever is running the program.
    #[error("exit({0})")]
    Exit(i32),
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum LexerError {
    #[error("unexpected character '{ch}' line: {line} column: {column}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },
    #[error("unterminated string starting on line {line}")]
    UnterminatedString { line: usize },
    /// Literals are scanned as `digits[.digits]`, which `f64` always accepts, so this only
    /// surfaces a scanner bug.
    #[error("invalid number literal \"{literal}\" on line {line}")]
    InvalidNumber { literal: String, line: usize },
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum ParserError {
    #[error("expected {expected}, found {found} (line {line})")]
    ExpectedToken {
        expected: Token,
        found: Token,
        line: usize,
    },
    #[error("unexpected {found} (line {line})")]
    UnexpectedToken { found: Token, line: usize },
    #[error("expected identifier in parameter list, found {found} (line {line})")]
    ExpectedIdentifier { found: Token, line: usize },
    #[error("unexpected 'j'. Did you mean to prefix it? (line {line})")]
    PostfixJ { line: usize },
}
