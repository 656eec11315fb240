use std::fmt::{Display, Error, Formatter};

use crate::core::format_real;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // Single character
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
    Comma,
    Newline,
    Assign,
    Exclamation,
    LessThan,
    GreaterThan,
    Plus,
    Minus,
    Asterisk,
    Slash,
    /// The imaginary unit when used as a prefix operator, as in `j(1 + 2)`.
    J,

    // Few characters
    Equal,
    NotEqual,
    LessThanOrEqual,
    GreaterThanOrEqual,
    DoubleAsterisk,
    ColonEquals,
    Arrow,

    // Identifiers and literals
    Identifier(String),
    Number(f64),
    /// The imaginary part only, `j-2.5` lexes to `ImaginaryNumber(-2.5)`.
    ImaginaryNumber(f64),
    StringLiteral(String),
    BooleanLiteral(bool),

    // Keywords
    Fun,
    If,
    Else,
    Elif,
    For,
    While,
    Not,
    And,
    Or,
    Output,
    Input,
    Return,
    Polar,
    Re,
    Im,
    AngleOf,
    Mag,
    Pi,
    Euler,

    Eof,
}

impl Token {
    pub fn from_keyword(word: &str) -> Option<Token> {
        let token = match word {
            "true" => Token::BooleanLiteral(true),
            "false" => Token::BooleanLiteral(false),
            "fun" => Token::Fun,
            "if" => Token::If,
            "else" => Token::Else,
            "elif" => Token::Elif,
            "for" => Token::For,
            "while" => Token::While,
            "not" => Token::Not,
            "and" => Token::And,
            "or" => Token::Or,
            "output" => Token::Output,
            "input" => Token::Input,
            "return" => Token::Return,
            "polar" => Token::Polar,
            "re" => Token::Re,
            "im" => Token::Im,
            "angleof" => Token::AngleOf,
            "mag" => Token::Mag,
            "pi" => Token::Pi,
            "euler" => Token::Euler,
            _ => return None,
        };
        Some(token)
    }

    /// The name printed by `--dump-tokens`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::LParen => "TOKEN_LEFT_PAREN",
            Token::RParen => "TOKEN_RIGHT_PAREN",
            Token::LBrace => "TOKEN_LEFT_BRACE",
            Token::RBrace => "TOKEN_RIGHT_BRACE",
            Token::LBracket => "TOKEN_LEFT_BRACKET",
            Token::RBracket => "TOKEN_RIGHT_BRACKET",
            Token::Dot => "TOKEN_DOT",
            Token::Comma => "TOKEN_COMMA",
            Token::Newline => "TOKEN_NEWLINE",
            Token::Assign => "TOKEN_EQUAL",
            Token::Exclamation => "TOKEN_BANG",
            Token::LessThan => "TOKEN_LESS",
            Token::GreaterThan => "TOKEN_GREATER",
            Token::Plus => "TOKEN_PLUS",
            Token::Minus => "TOKEN_MINUS",
            Token::Asterisk => "TOKEN_STAR",
            Token::Slash => "TOKEN_SLASH",
            Token::J => "TOKEN_J",
            Token::Equal => "TOKEN_EQUAL_EQUAL",
            Token::NotEqual => "TOKEN_BANG_EQUAL",
            Token::LessThanOrEqual => "TOKEN_LESS_EQUAL",
            Token::GreaterThanOrEqual => "TOKEN_GREATER_EQUAL",
            Token::DoubleAsterisk => "TOKEN_STAR_STAR",
            Token::ColonEquals => "TOKEN_COLON_EQUAL",
            Token::Arrow => "TOKEN_ARROW",
            Token::Identifier(_) => "TOKEN_IDENTIFIER",
            Token::Number(_) => "TOKEN_NUMBER_LITERAL",
            Token::ImaginaryNumber(_) => "TOKEN_IM_NUMBER_LITERAL",
            Token::StringLiteral(_) => "TOKEN_STRING_LITERAL",
            Token::BooleanLiteral(true) => "TOKEN_TRUE",
            Token::BooleanLiteral(false) => "TOKEN_FALSE",
            Token::Fun => "TOKEN_FUN",
            Token::If => "TOKEN_IF",
            Token::Else => "TOKEN_ELSE",
            Token::Elif => "TOKEN_ELIF",
            Token::For => "TOKEN_FOR",
            Token::While => "TOKEN_WHILE",
            Token::Not => "TOKEN_NOT",
            Token::And => "TOKEN_AND",
            Token::Or => "TOKEN_OR",
            Token::Output => "TOKEN_OUTPUT",
            Token::Input => "TOKEN_INPUT",
            Token::Return => "TOKEN_RETURN",
            Token::Polar => "TOKEN_POLAR",
            Token::Re => "TOKEN_RE",
            Token::Im => "TOKEN_IM",
            Token::AngleOf => "TOKEN_ANGLEOF",
            Token::Mag => "TOKEN_MAG",
            Token::Pi => "TOKEN_PI",
            Token::Euler => "TOKEN_EULER",
            Token::Eof => "TOKEN_EOF",
        }
    }

    /// The source text this token stands for.
    pub fn lexeme(&self) -> String {
        match self {
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::LBrace => "{".into(),
            Token::RBrace => "}".into(),
            Token::LBracket => "[".into(),
            Token::RBracket => "]".into(),
            Token::Dot => ".".into(),
            Token::Comma => ",".into(),
            Token::Newline => "\\n".into(),
            Token::Assign => "=".into(),
            Token::Exclamation => "!".into(),
            Token::LessThan => "<".into(),
            Token::GreaterThan => ">".into(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Asterisk => "*".into(),
            Token::Slash => "/".into(),
            Token::J => "j".into(),
            Token::Equal => "==".into(),
            Token::NotEqual => "!=".into(),
            Token::LessThanOrEqual => "<=".into(),
            Token::GreaterThanOrEqual => ">=".into(),
            Token::DoubleAsterisk => "**".into(),
            Token::ColonEquals => ":=".into(),
            Token::Arrow => "->".into(),
            Token::Identifier(name) => name.clone(),
            Token::Number(value) => format_real(*value),
            Token::ImaginaryNumber(value) => format!("j{}", format_real(*value)),
            Token::StringLiteral(value) => value.clone(),
            Token::BooleanLiteral(value) => value.to_string(),
            Token::Fun => "fun".into(),
            Token::If => "if".into(),
            Token::Else => "else".into(),
            Token::Elif => "elif".into(),
            Token::For => "for".into(),
            Token::While => "while".into(),
            Token::Not => "not".into(),
            Token::And => "and".into(),
            Token::Or => "or".into(),
            Token::Output => "output".into(),
            Token::Input => "input".into(),
            Token::Return => "return".into(),
            Token::Polar => "polar".into(),
            Token::Re => "re".into(),
            Token::Im => "im".into(),
            Token::AngleOf => "angleof".into(),
            Token::Mag => "mag".into(),
            Token::Pi => "pi".into(),
            Token::Euler => "euler".into(),
            Token::Eof => "".into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Token::Eof => write!(f, "end of file"),
            Token::Newline => write!(f, "newline"),
            Token::StringLiteral(s) => write!(f, "\"{s}\""),
            _ => write!(f, "'{}'", self.lexeme()),
        }
    }
}

/// A [`Token`] along with where it started in the source.
#[derive(Debug, PartialEq, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

impl SpannedToken {
    pub fn new(token: Token, line: usize, column: usize) -> Self {
        Self {
            token,
            line,
            column,
        }
    }
}

impl Display for SpannedToken {
    /// The `--dump-tokens` format.
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "{} : {} line: {} col: {}",
            self.token.type_name(),
            self.token.lexeme(),
            self.line,
            self.column
        )
    }
}
