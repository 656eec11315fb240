use std::io::{self, BufRead, BufReader, Write};

use log::debug;

use crate::{
    core::Container,
    domain::{RuntimeError, RuntimeErrorKind},
    errors::{NapkinError, NapkinResult},
    parser::types::{Ast, Expr, StatementKind},
    treewalk::{
        builtins, Scope, TreewalkDisruption, TreewalkResult, TreewalkSignal,
        TreewalkValue,
    },
};

mod call;
mod errors;
mod expr;
mod stmt;

pub struct TreewalkInterpreter {
    global: Container<Scope>,

    /// The innermost scope of whatever is executing right now.
    scope: Container<Scope>,

    input: Box<dyn BufRead>,
    output: Box<dyn Write>,

    /// Line of the statement being evaluated, used to tag runtime errors.
    line: usize,

    /// When set, top-level expression statements print their value like a REPL would.
    echo: bool,
}

impl Default for TreewalkInterpreter {
    fn default() -> Self {
        Self::new(
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }
}

impl TreewalkInterpreter {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        let global = Container::new(Scope::default());
        for builtin in builtins::all() {
            let name = builtin.name();
            global
                .borrow_mut()
                .declare(&name, TreewalkValue::BuiltinFunction(builtin));
        }

        Self {
            scope: global.clone(),
            global,
            input,
            output,
            line: 1,
            echo: false,
        }
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn read_global(&self, name: &str) -> Option<TreewalkValue> {
        self.global.borrow().get(name)
    }

    /// Run every statement of `ast` in the global scope and return the value of the last one.
    /// Bindings persist between calls, which is what lets the REPL feed in one line at a time.
    pub fn execute(&mut self, ast: &Ast) -> NapkinResult<TreewalkValue> {
        debug!("executing {} statements", ast.len());

        let mut result = TreewalkValue::None;
        for stmt in ast {
            result = self
                .evaluate_statement(stmt)
                .map_err(|disruption| self.escape(disruption))?;

            if self.echo && !result.is_none() && is_echoable(&stmt.kind) {
                self.write_value(&result)
                    .map_err(|disruption| self.escape(disruption))?;
            }
        }

        Ok(result)
    }

    /// Convert whatever escaped the outermost statement. A `return` which makes it all the way up
    /// here was not inside any function.
    fn escape(&self, disruption: TreewalkDisruption) -> NapkinError {
        match disruption {
            TreewalkDisruption::Error(e) => NapkinError::Runtime(e),
            TreewalkDisruption::Signal(TreewalkSignal::Exit(code)) => NapkinError::Exit(code),
            TreewalkDisruption::Signal(TreewalkSignal::Return(_)) => NapkinError::Runtime(
                RuntimeError::new(self.line, RuntimeErrorKind::ReturnOutsideFunction),
            ),
        }
    }

    pub fn write_value(&mut self, value: &TreewalkValue) -> TreewalkResult<()> {
        let written = writeln!(self.output, "{}", value).and_then(|_| self.output.flush());
        written.map_err(|e| self.io_error(e))
    }

    /// One line of input with the line ending removed. Returns an empty string at end of input.
    pub fn read_line(&mut self) -> TreewalkResult<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line);
        read.map_err(|e| self.io_error(e))?;

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Only expression statements are echoed, and never assignments or declarations.
fn is_echoable(kind: &StatementKind) -> bool {
    matches!(
        kind,
        StatementKind::Expression(expr)
            if !matches!(expr, Expr::Assignment { .. } | Expr::Declaration { .. })
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{test_utils::*, RuntimeErrorKind},
        treewalk::{test_utils::*, TreewalkValue},
    };

    #[test]
    fn undefined_variable() {
        let e = eval_expect_error("x + 1");
        assert_name_error!(e, "x");
    }

    #[test]
    fn division_by_zero() {
        let e = eval_expect_error("1 / 0");
        assert_eq!(e.kind, RuntimeErrorKind::DivisionByZero);

        let e = eval_expect_error("\n\nj1 / (j0)");
        assert_eq!(e.kind, RuntimeErrorKind::DivisionByZero);
        assert_eq!(e.line, 3);
    }

    #[test]
    fn unsupported_operand() {
        let e = eval_expect_error(r#""a" / 2"#);
        assert_type_error!(e, "unsupported operand type(s) for /: 'string' and 'real'");
    }

    #[test]
    fn expression() {
        assert_eval_eq!("2 + 3 * (4 - 1)", real(11.0));
        assert_eval_eq!("2 ** 3 ** 2", real(512.0));
        assert_eval_eq!("-2 ** 2", real(4.0));
        assert_eval_eq!("\"napkin\" + \"!\"", string("napkin!"));
        assert_eval_eq!("mag (3 + j4)", real(5.0));
        assert_eval_eq!("re pi", real(std::f64::consts::PI));
        assert_eval_eq!("j2 * j2", complex(-4.0, 0.0));
    }

    #[test]
    fn logical_operators_short_circuit() {
        assert_eval_eq!("false and undefined", TreewalkValue::Boolean(false));
        assert_eval_eq!("1 or undefined", TreewalkValue::Boolean(true));
        assert_eval_eq!("1 and \"\"", TreewalkValue::Boolean(false));

        let e = eval_expect_error("true and undefined");
        assert_name_error!(e, "undefined");
    }

    #[test]
    fn declaration_and_assignment() {
        let text = r#"
x := 1
x = x + 1
{
    x := 10
    x = x + 1
}
{
    x = x + 1
    y = 5
}
"#;
        let ctx = run(text);
        assert_read_eq!(ctx, "x", real(3.0));
        assert!(ctx.read("y").is_none());
    }

    #[test]
    fn output() {
        let text = r#"
output 1
output 2.5
output j-1
output "hello"
output true
output -> {}
output millis
output (-> {})()
"#;
        assert_eq!(
            eval_output(text),
            "1\n2.5\n0 - j1\nhello\ntrue\n<closure>\n<native function millis>\nnone\n"
        );
    }

    #[test]
    fn if_elif_else() {
        let text = r#"
classify := -> (n) {
    if n < 0 {
        return "negative"
    } elif n == 0 {
        return "zero"
    } else {
        return "positive"
    }
}
output classify(-3)
output classify(0)
output classify(7)
"#;
        assert_eq!(eval_output(text), "negative\nzero\npositive\n");
    }

    #[test]
    fn while_loop() {
        let text = r#"
i := 0
total := 0
while i < 5 {
    i = i + 1
    total = total + i
}
"#;
        let ctx = run(text);
        assert_read_eq!(ctx, "i", real(5.0));
        assert_read_eq!(ctx, "total", real(15.0));
    }

    #[test]
    fn closures_share_the_defining_scope() {
        let text = r#"
x := 1
outer := -> {
    inner := -> {
        while x < 10 {
            x = x + 1
            output x
        }
    }
    inner()
}
outer()
output x
"#;
        assert_eq!(eval_output(text), "2\n3\n4\n5\n6\n7\n8\n9\n10\n10\n");
    }

    #[test]
    fn counters_keep_private_state() {
        let text = r#"
make_counter := -> {
    count := 0
    -> {
        count = count + 1
        return count
    }
}
a := make_counter()
b := make_counter()
a()
a()
output a()
output b()
"#;
        assert_eq!(eval_output(text), "3\n1\n");
    }

    #[test]
    fn recursion() {
        let text = r#"
fib := -> (n) {
    if n < 2 return n
    return fib(n - 1) + fib(n - 2)
}
fib(15)
"#;
        assert_eval_eq!(text, real(610.0));
    }

    #[test]
    fn implicit_return_value() {
        assert_eval_eq!("(-> (a, b) { a * b })(6, 7)", real(42.0));
        assert_eval_eq!("(-> { return })()", TreewalkValue::None);
        assert_eval_eq!("(-> { })()", TreewalkValue::None);
    }

    #[test]
    fn call_errors() {
        let e = eval_expect_error("f := -> (a) { a }\nf(1, 2)");
        assert_eq!(
            e.kind,
            RuntimeErrorKind::ArityError {
                expected: 1,
                found: 2
            }
        );
        assert_eq!(e.line, 2);

        let e = eval_expect_error("x := 3; x()");
        assert_eq!(e.kind, RuntimeErrorKind::NotCallable);
    }

    #[test]
    fn error_line_is_the_call_site_after_returning() {
        let text = r#"
f := -> {
    return 1
}
f() + "a"
"#;
        let e = eval_expect_error(text);
        assert_eq!(e.line, 5);
    }

    #[test]
    fn return_outside_function() {
        let e = eval_expect_error("return 5");
        assert_eq!(e.kind, RuntimeErrorKind::ReturnOutsideFunction);
    }

    #[test]
    fn exit_signal() {
        assert_eq!(eval_exit("output 1\nexit(3)\noutput 2"), (3, "1\n".to_string()));

        let e = eval_expect_error("exit(\"no\")");
        assert_type_error!(e, "exit() expects a real status code, got 'string'");
    }

    #[test]
    fn getline_reads_input() {
        let text = r#"
name := getline()
output "hello, " + name
output getline() == ""
"#;
        assert_eq!(eval_output_with_input(text, "world\r\n"), "hello, world\ntrue\n");
    }

    #[test]
    fn scope_is_restored_after_errors() {
        let mut ctx = run("x := 1");
        assert!(ctx.add_line("{ y := 2; undefined }").is_err());
        assert!(ctx.add_line("z := 3").is_ok());
        assert_read_eq!(ctx, "z", real(3.0));
        assert!(ctx.read("y").is_none());
    }
}
