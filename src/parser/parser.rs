use log::trace;

use crate::{
    errors::ParserError,
    lexer::{SpannedToken, Token},
    parser::types::{
        Ast, BinOp, Block, ConditionalBlock, Constant, Expr, LogicalOp, Statement, StatementKind,
        UnaryOp,
    },
};

type ParserResult<T> = Result<T, ParserError>;

/// A recursive-descent parser for napkin. Each `parse_*` method below corresponds to one rule of
/// the grammar, ordered from the loosest binding to the tightest.
pub struct Parser<'a> {
    tokens: &'a [SpannedToken],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [SpannedToken]) -> Self {
        Self { tokens, current: 0 }
    }

    pub fn parse(&mut self) -> ParserResult<Ast> {
        let mut statements = vec![];
        loop {
            self.skip_newlines();
            if self.is_finished() {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        Ok(Ast::new(statements))
    }

    fn current_token(&self) -> &Token {
        self.peek(0)
    }

    fn peek(&self, ahead: usize) -> &Token {
        self.tokens
            .get(self.current + ahead)
            .map(|t| &t.token)
            .unwrap_or(&Token::Eof)
    }

    /// The line of the current token, or of the last token once we have run off the end.
    fn line(&self) -> usize {
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    pub fn is_finished(&self) -> bool {
        self.current_token() == &Token::Eof
    }

    fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if !self.is_finished() {
            self.current += 1;
        }
        token
    }

    fn consume(&mut self, expected: &Token) -> ParserResult<()> {
        trace!("Token: {:?}", self.current_token());

        if self.current_token() != expected {
            return Err(ParserError::ExpectedToken {
                expected: expected.clone(),
                found: self.current_token().clone(),
                line: self.line(),
            });
        }

        self.advance();
        Ok(())
    }

    fn skip_newlines(&mut self) {
        while self.current_token() == &Token::Newline {
            self.advance();
        }
    }

    /// A statement ends at a newline (or `;`), which is consumed. A closing brace or the end of
    /// the input also ends a statement but is left for the caller.
    fn consume_terminator(&mut self) -> ParserResult<()> {
        match self.current_token() {
            Token::Newline => {
                self.advance();
                Ok(())
            }
            Token::RBrace | Token::Eof => Ok(()),
            _ => self.consume(&Token::Newline),
        }
    }

    fn at_terminator(&self) -> bool {
        matches!(
            self.current_token(),
            Token::Newline | Token::RBrace | Token::Eof
        )
    }

    pub fn parse_statement(&mut self) -> ParserResult<Statement> {
        trace!("parse_statement");
        let line = self.line();

        let kind = match self.current_token() {
            Token::Output => {
                self.consume(&Token::Output)?;
                let expr = self.parse_expr()?;
                self.consume_terminator()?;
                StatementKind::Output(expr)
            }
            Token::Return => {
                self.consume(&Token::Return)?;
                let expr = if self.at_terminator() {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.consume_terminator()?;
                StatementKind::Return(expr)
            }
            Token::LBrace => StatementKind::Block(self.parse_block()?),
            Token::If => self.parse_if_else()?,
            Token::While => {
                self.consume(&Token::While)?;
                StatementKind::WhileLoop(self.parse_conditional_block()?)
            }
            _ => {
                let expr = self.parse_expr()?;
                self.consume_terminator()?;
                StatementKind::Expression(expr)
            }
        };

        Ok(Statement::new(line, kind))
    }

    fn parse_block(&mut self) -> ParserResult<Block> {
        trace!("parse_block");
        self.consume(&Token::LBrace)?;

        let mut statements = vec![];
        loop {
            self.skip_newlines();
            match self.current_token() {
                Token::RBrace => break,
                Token::Eof => {
                    return Err(ParserError::ExpectedToken {
                        expected: Token::RBrace,
                        found: Token::Eof,
                        line: self.line(),
                    })
                }
                _ => statements.push(self.parse_statement()?),
            }
        }

        self.consume(&Token::RBrace)?;
        Ok(Block::new(statements))
    }

    /// The condition and body shared by `if`, `elif` and `while`. The keyword itself has already
    /// been consumed.
    fn parse_conditional_block(&mut self) -> ParserResult<ConditionalBlock> {
        let condition = self.parse_expr()?;
        self.skip_newlines();
        let body = self.parse_statement()?;

        Ok(ConditionalBlock {
            condition,
            body: Box::new(body),
        })
    }

    fn parse_if_else(&mut self) -> ParserResult<StatementKind> {
        trace!("parse_if_else");
        self.consume(&Token::If)?;
        let if_part = self.parse_conditional_block()?;

        let mut elif_parts = vec![];
        let mut else_part = None;
        loop {
            // Newlines between statements are never meaningful, so it is safe to drop them while
            // looking for an `elif` or `else`.
            self.skip_newlines();
            match self.current_token() {
                Token::Elif => {
                    self.consume(&Token::Elif)?;
                    elif_parts.push(self.parse_conditional_block()?);
                }
                Token::Else => {
                    self.consume(&Token::Else)?;
                    self.skip_newlines();
                    else_part = Some(Box::new(self.parse_statement()?));
                    break;
                }
                _ => break,
            }
        }

        Ok(StatementKind::IfElse {
            if_part,
            elif_parts,
            else_part,
        })
    }

    pub fn parse_expr(&mut self) -> ParserResult<Expr> {
        trace!("parse_expr");
        if self.current_token() == &Token::Arrow {
            self.parse_lambda()
        } else {
            self.parse_assignment()
        }
    }

    /// ```napkin
    /// -> (a, b) { return a + b }
    /// -> { output "no parameters" }
    /// ```
    fn parse_lambda(&mut self) -> ParserResult<Expr> {
        trace!("parse_lambda");
        self.consume(&Token::Arrow)?;

        let mut params = vec![];
        if self.current_token() == &Token::LParen {
            self.consume(&Token::LParen)?;
            if self.current_token() != &Token::RParen {
                params.push(self.parse_param()?);
                while self.current_token() == &Token::Comma {
                    self.consume(&Token::Comma)?;
                    params.push(self.parse_param()?);
                }
            }
            self.consume(&Token::RParen)?;
        }

        let body = self.parse_block()?;
        Ok(Expr::Lambda { params, body })
    }

    fn parse_param(&mut self) -> ParserResult<String> {
        match self.advance() {
            Token::Identifier(name) => Ok(name),
            found => Err(ParserError::ExpectedIdentifier {
                found,
                line: self.line(),
            }),
        }
    }

    fn parse_assignment(&mut self) -> ParserResult<Expr> {
        trace!("parse_assignment");
        if let Token::Identifier(name) = self.current_token() {
            let name = name.clone();
            match self.peek(1) {
                Token::Assign => {
                    self.advance();
                    self.advance();
                    let value = Box::new(self.parse_expr()?);
                    return Ok(Expr::Assignment { name, value });
                }
                Token::ColonEquals => {
                    self.advance();
                    self.advance();
                    let value = Box::new(self.parse_expr()?);
                    return Ok(Expr::Declaration { name, value });
                }
                _ => {}
            }
        }

        self.parse_or()
    }

    fn parse_or(&mut self) -> ParserResult<Expr> {
        let mut left = self.parse_and()?;

        while self.current_token() == &Token::Or {
            self.consume(&Token::Or)?;
            let right = self.parse_and()?;
            left = Expr::LogicalOperation {
                left: Box::new(left),
                op: LogicalOp::Or,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> ParserResult<Expr> {
        let mut left = self.parse_equality()?;

        while self.current_token() == &Token::And {
            self.consume(&Token::And)?;
            let right = self.parse_equality()?;
            left = Expr::LogicalOperation {
                left: Box::new(left),
                op: LogicalOp::And,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse a left-associative chain of binary operators, all at the same precedence level.
    fn parse_binary_level<F>(
        &mut self,
        op_for: fn(&Token) -> Option<BinOp>,
        mut next: F,
    ) -> ParserResult<Expr>
    where
        F: FnMut(&mut Self) -> ParserResult<Expr>,
    {
        let mut left = next(self)?;

        while let Some(op) = op_for(self.current_token()) {
            self.advance();
            let right = next(self)?;
            left = Expr::BinaryOperation {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> ParserResult<Expr> {
        self.parse_binary_level(
            |token| match token {
                Token::Equal => Some(BinOp::Equals),
                Token::NotEqual => Some(BinOp::NotEquals),
                _ => None,
            },
            Self::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> ParserResult<Expr> {
        self.parse_binary_level(
            |token| match token {
                Token::LessThan => Some(BinOp::LessThan),
                Token::LessThanOrEqual => Some(BinOp::LessThanOrEqual),
                Token::GreaterThan => Some(BinOp::GreaterThan),
                Token::GreaterThanOrEqual => Some(BinOp::GreaterThanOrEqual),
                _ => None,
            },
            Self::parse_add_sub,
        )
    }

    fn parse_add_sub(&mut self) -> ParserResult<Expr> {
        self.parse_binary_level(
            |token| match token {
                Token::Plus => Some(BinOp::Add),
                Token::Minus => Some(BinOp::Sub),
                _ => None,
            },
            Self::parse_term,
        )
    }

    fn parse_term(&mut self) -> ParserResult<Expr> {
        self.parse_binary_level(
            |token| match token {
                Token::Asterisk => Some(BinOp::Mul),
                Token::Slash => Some(BinOp::Div),
                _ => None,
            },
            Self::parse_exponentiation,
        )
    }

    /// Exponentiation is right-associative: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
    fn parse_exponentiation(&mut self) -> ParserResult<Expr> {
        let left = self.parse_unary()?;

        if self.current_token() == &Token::DoubleAsterisk {
            self.consume(&Token::DoubleAsterisk)?;
            let right = self.parse_exponentiation()?;
            return Ok(Expr::BinaryOperation {
                left: Box::new(left),
                op: BinOp::Expo,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> ParserResult<Expr> {
        let op = match self.current_token() {
            Token::Minus => UnaryOp::Minus,
            Token::Exclamation | Token::Not => UnaryOp::Not,
            _ => return self.parse_call(),
        };

        self.advance();
        let right = self.parse_unary()?;
        Ok(Expr::UnaryOperation {
            op,
            right: Box::new(right),
        })
    }

    /// Calls may be chained when one function returns another: `make_adder(1)(2)`.
    fn parse_call(&mut self) -> ParserResult<Expr> {
        let mut expr = self.parse_primary()?;

        while self.current_token() == &Token::LParen {
            self.consume(&Token::LParen)?;

            let mut args = vec![];
            if self.current_token() != &Token::RParen {
                args.push(self.parse_expr()?);
                while self.current_token() == &Token::Comma {
                    self.consume(&Token::Comma)?;
                    args.push(self.parse_expr()?);
                }
            }
            self.consume(&Token::RParen)?;

            expr = Expr::FunctionCall {
                callee: Box::new(expr),
                args,
            };
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParserResult<Expr> {
        trace!("parse_primary: {:?}", self.current_token());
        let line = self.line();

        match self.advance() {
            Token::BooleanLiteral(value) => Ok(Expr::Boolean(value)),
            Token::Number(value) => Ok(Expr::Real(value)),
            Token::ImaginaryNumber(value) => Ok(Expr::Imaginary(value)),
            Token::StringLiteral(value) => Ok(Expr::StringLiteral(value)),
            Token::Identifier(name) => Ok(Expr::Variable(name)),
            Token::Pi => Ok(Expr::Constant(Constant::Pi)),
            Token::Euler => Ok(Expr::Constant(Constant::Euler)),
            // These keywords act as prefix operators and bind like unary minus.
            token @ (Token::J | Token::Mag | Token::Re | Token::Im | Token::AngleOf) => {
                let op = match token {
                    Token::J => UnaryOp::J,
                    Token::Mag => UnaryOp::Mag,
                    Token::Re => UnaryOp::Re,
                    Token::Im => UnaryOp::Im,
                    _ => UnaryOp::AngleOf,
                };
                let right = self.parse_unary()?;
                Ok(Expr::UnaryOperation {
                    op,
                    right: Box::new(right),
                })
            }
            Token::LParen => {
                let expr = self.parse_expr()?;
                if self.current_token() == &Token::J {
                    return Err(ParserError::PostfixJ { line: self.line() });
                }
                self.consume(&Token::RParen)?;
                Ok(Expr::Grouping(Box::new(expr)))
            }
            found => Err(ParserError::UnexpectedToken { found, line }),
        }
    }
}
