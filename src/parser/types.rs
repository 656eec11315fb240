use std::slice::Iter;

/// A parsed napkin program.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Ast {
    statements: Vec<Statement>,
}

impl Ast {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = &'a Statement;
    type IntoIter = Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Build an [`Ast`] from a literal list of [`Statement`] objects.
#[cfg(test)]
macro_rules! ast {
    () => {
        $crate::parser::types::Ast::new(vec![])
    };

    ($($element:expr),* $(,)?) => {
        $crate::parser::types::Ast::new(vec![$($element),*])
    };
}

#[cfg(test)]
pub(crate) use ast;

#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    pub line: usize,
    pub kind: StatementKind,
}

impl Statement {
    pub fn new(line: usize, kind: StatementKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum StatementKind {
    Expression(Expr),
    Output(Expr),
    Return(Option<Expr>),
    Block(Block),
    IfElse {
        if_part: ConditionalBlock,
        elif_parts: Vec<ConditionalBlock>,
        else_part: Option<Box<Statement>>,
    },
    WhileLoop(ConditionalBlock),
}

/// The statements between a pair of braces.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// A condition and the statement it guards. The body is any statement, most often a block.
#[derive(Debug, PartialEq, Clone)]
pub struct ConditionalBlock {
    pub condition: Expr,
    pub body: Box<Statement>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Real(f64),
    Imaginary(f64),
    Boolean(bool),
    StringLiteral(String),
    Constant(Constant),
    Variable(String),
    Grouping(Box<Expr>),
    UnaryOperation {
        op: UnaryOp,
        right: Box<Expr>,
    },
    BinaryOperation {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    LogicalOperation {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    /// `name = value`, which rebinds `name` wherever it already lives.
    Assignment {
        name: String,
        value: Box<Expr>,
    },
    /// `name := value`, which always binds in the current scope.
    Declaration {
        name: String,
        value: Box<Expr>,
    },
    Lambda {
        params: Vec<String>,
        body: Block,
    },
    FunctionCall {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

/// Keywords which evaluate to a fixed real number.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Constant {
    Pi,
    Euler,
}

impl Constant {
    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::Euler => std::f64::consts::E,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::Euler => "euler",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Expo,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Expo => "**",
            BinOp::Equals => "==",
            BinOp::NotEquals => "!=",
            BinOp::LessThan => "<",
            BinOp::LessThanOrEqual => "<=",
            BinOp::GreaterThan => ">",
            BinOp::GreaterThanOrEqual => ">=",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UnaryOp {
    Minus,
    /// Covers both `!` and `not`.
    Not,
    /// Multiply by the imaginary unit.
    J,
    Mag,
    Re,
    Im,
    AngleOf,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::J => "j",
            UnaryOp::Mag => "mag",
            UnaryOp::Re => "re",
            UnaryOp::Im => "im",
            UnaryOp::AngleOf => "angleof",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}
