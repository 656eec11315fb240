use log::trace;

use crate::{domain::Source, errors::LexerError};

use super::{SpannedToken, Token};

type LexerResult<T> = Result<T, LexerError>;

/// Turns napkin source text into a flat list of [`SpannedToken`]s. The list always ends with a
/// `Newline` followed by `Eof` so the parser can treat the last statement like any other.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,

    /// 1-based line and column of the next unconsumed character.
    line: usize,
    column: usize,

    tokens: Vec<SpannedToken>,
}

impl Lexer {
    pub fn new(source: &Source) -> Self {
        Self {
            chars: source.text().chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            tokens: vec![],
        }
    }

    pub fn tokenize(mut self) -> LexerResult<Vec<SpannedToken>> {
        while let Some(c) = self.peek(0) {
            let (line, column) = (self.line, self.column);
            trace!("char: {c:?} line: {line} col: {column}");
            self.lex_token(line, column)?;
        }

        let (line, column) = (self.line, self.column);
        self.push(Token::Newline, line, column);
        self.push(Token::Eof, line, column);

        Ok(self.tokens)
    }

    fn lex_token(&mut self, line: usize, column: usize) -> LexerResult<()> {
        let Some(c) = self.advance() else {
            return Ok(());
        };

        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '.' => Token::Dot,
            ',' => Token::Comma,
            // A semicolon separates statements just like a newline, but stays on the same line.
            '\n' | ';' => Token::Newline,
            ' ' | '\r' | '\t' => return Ok(()),
            '#' => {
                while self.peek(0).is_some_and(|c| c != '\n') {
                    self.advance();
                }
                return Ok(());
            }
            ':' if self.consume_if('=') => Token::ColonEquals,
            '=' if self.consume_if('=') => Token::Equal,
            '=' => Token::Assign,
            '!' if self.consume_if('=') => Token::NotEqual,
            '!' => Token::Exclamation,
            '<' if self.consume_if('=') => Token::LessThanOrEqual,
            '<' => Token::LessThan,
            '>' if self.consume_if('=') => Token::GreaterThanOrEqual,
            '>' => Token::GreaterThan,
            '-' if self.consume_if('>') => Token::Arrow,
            '-' => Token::Minus,
            '+' => Token::Plus,
            '*' if self.consume_if('*') => Token::DoubleAsterisk,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '"' => self.string_literal(line)?,
            'j' if self.starts_imaginary_number() => self.imaginary_number(line)?,
            c if c.is_ascii_digit() => self.number(c, line)?,
            c if is_identifier_start(c) => self.identifier(c),
            ch => return Err(LexerError::UnexpectedCharacter { ch, line, column }),
        };

        self.push(token, line, column);
        Ok(())
    }

    /// A `j` is the start of an imaginary literal when a digit, or a minus sign and a digit,
    /// follows it immediately.
    fn starts_imaginary_number(&self) -> bool {
        match self.peek(0) {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => self.peek(1).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn imaginary_number(&mut self, line: usize) -> LexerResult<Token> {
        let mut literal = String::new();
        if self.consume_if('-') {
            literal.push('-');
        }
        self.consume_number_into(&mut literal);
        let value = parse_number(&literal, line)?;
        Ok(Token::ImaginaryNumber(value))
    }

    fn number(&mut self, first: char, line: usize) -> LexerResult<Token> {
        let mut literal = first.to_string();
        self.consume_number_into(&mut literal);
        let value = parse_number(&literal, line)?;
        Ok(Token::Number(value))
    }

    /// Digits, then an optional `.` that is only part of the number if a digit follows it.
    fn consume_number_into(&mut self, literal: &mut String) {
        self.consume_digits_into(literal);
        if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            literal.push('.');
            self.consume_digits_into(literal);
        }
    }

    fn consume_digits_into(&mut self, literal: &mut String) {
        while let Some(c) = self.peek(0).filter(char::is_ascii_digit) {
            literal.push(c);
            self.advance();
        }
    }

    fn identifier(&mut self, first: char) -> Token {
        let mut name = first.to_string();
        while let Some(c) = self.peek(0).filter(|c| is_identifier_char(*c)) {
            name.push(c);
            self.advance();
        }

        if name == "j" {
            return Token::J;
        }

        Token::from_keyword(&name).unwrap_or(Token::Identifier(name))
    }

    fn string_literal(&mut self, line: usize) -> LexerResult<Token> {
        let mut literal = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(Token::StringLiteral(literal)),
                Some(c) => literal.push(c),
                None => return Err(LexerError::UnterminatedString { line }),
            }
        }
    }

    fn push(&mut self, token: Token, line: usize, column: usize) {
        self.tokens.push(SpannedToken::new(token, line, column));
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.position + ahead).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.peek(0) == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}

fn parse_number(literal: &str, line: usize) -> LexerResult<f64> {
    literal
        .parse::<f64>()
        .map_err(|_| LexerError::InvalidNumber {
            literal: literal.to_string(),
            line,
        })
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
