use crate::{
    core::format_real,
    parser::types::{Ast, Block, ConditionalBlock, Expr, Statement, StatementKind},
};

/// Renders an [`Ast`] in a lisp-like prefix notation, one top-level statement per line. This is
/// what `--dump-ast` prints.
///
/// ```text
/// x := 1 + 2 * 3      =>  (:= x (+ 1 (* 2 3)))
/// output f(x)         =>  (output (call f x))
/// ```
#[derive(Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, ast: &Ast) -> String {
        ast.iter()
            .map(|stmt| self.print_statement(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print_statement(&self, stmt: &Statement) -> String {
        match &stmt.kind {
            StatementKind::Expression(expr) => self.print_expr(expr),
            StatementKind::Output(expr) => format!("(output {})", self.print_expr(expr)),
            StatementKind::Return(Some(expr)) => format!("(return {})", self.print_expr(expr)),
            StatementKind::Return(None) => "(return)".to_string(),
            StatementKind::Block(block) => self.print_block(block),
            StatementKind::IfElse {
                if_part,
                elif_parts,
                else_part,
            } => {
                let mut parts = vec![self.print_conditional("if", if_part)];
                parts.extend(elif_parts.iter().map(|p| self.print_conditional("elif", p)));
                if let Some(else_part) = else_part {
                    parts.push(format!("(else {})", self.print_statement(else_part)));
                }
                parts.join(" ")
            }
            StatementKind::WhileLoop(cond) => self.print_conditional("while", cond),
        }
    }

    fn print_conditional(&self, keyword: &str, cond: &ConditionalBlock) -> String {
        format!(
            "({} {} {})",
            keyword,
            self.print_expr(&cond.condition),
            self.print_statement(&cond.body)
        )
    }

    fn print_block(&self, block: &Block) -> String {
        if block.statements.is_empty() {
            return "(block)".to_string();
        }

        let body = block
            .statements
            .iter()
            .map(|stmt| self.print_statement(stmt))
            .collect::<Vec<_>>()
            .join(" ");
        format!("(block {})", body)
    }

    pub fn print_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Real(value) => format_real(*value),
            Expr::Imaginary(value) => format!("j{}", format_real(*value)),
            Expr::Boolean(value) => value.to_string(),
            Expr::StringLiteral(value) => format!("\"{}\"", value),
            Expr::Constant(constant) => constant.name().to_string(),
            Expr::Variable(name) => name.clone(),
            Expr::Grouping(inner) => format!("(Grouping {})", self.print_expr(inner)),
            Expr::UnaryOperation { op, right } => {
                format!("({} {})", op.symbol(), self.print_expr(right))
            }
            Expr::BinaryOperation { left, op, right } => format!(
                "({} {} {})",
                op.symbol(),
                self.print_expr(left),
                self.print_expr(right)
            ),
            Expr::LogicalOperation { left, op, right } => format!(
                "({} {} {})",
                op.symbol(),
                self.print_expr(left),
                self.print_expr(right)
            ),
            Expr::Assignment { name, value } => format!("(= {} {})", name, self.print_expr(value)),
            Expr::Declaration { name, value } => {
                format!("(:= {} {})", name, self.print_expr(value))
            }
            Expr::Lambda { params, body } => {
                format!("(-> ({}) {})", params.join(" "), self.print_block(body))
            }
            Expr::FunctionCall { callee, args } => {
                let mut parts = vec!["call".to_string(), self.print_expr(callee)];
                parts.extend(args.iter().map(|arg| self.print_expr(arg)));
                format!("({})", parts.join(" "))
            }
        }
    }
}
