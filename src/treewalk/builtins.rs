use std::{
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    domain::RuntimeErrorKind,
    treewalk::{
        protocols::Callable, TreewalkDisruption, TreewalkInterpreter, TreewalkResult,
        TreewalkSignal, TreewalkValue,
    },
};

/// The native functions bound in every global scope.
pub fn all() -> Vec<Rc<dyn Callable>> {
    let builtins: [Rc<dyn Callable>; 3] = [
        Rc::new(MillisBuiltin),
        Rc::new(GetlineBuiltin),
        Rc::new(ExitBuiltin),
    ];
    builtins.into()
}

/// `millis()`: wall-clock milliseconds since the Unix epoch.
struct MillisBuiltin;

impl Callable for MillisBuiltin {
    fn call(
        &self,
        _interpreter: &mut TreewalkInterpreter,
        _args: Vec<TreewalkValue>,
    ) -> TreewalkResult<TreewalkValue> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Ok(TreewalkValue::Real(millis as f64))
    }

    fn name(&self) -> String {
        "millis".into()
    }

    fn arity(&self) -> usize {
        0
    }
}

/// `getline()`: the next line of input without its line ending, or an empty string once the
/// input is exhausted.
struct GetlineBuiltin;

impl Callable for GetlineBuiltin {
    fn call(
        &self,
        interpreter: &mut TreewalkInterpreter,
        _args: Vec<TreewalkValue>,
    ) -> TreewalkResult<TreewalkValue> {
        let line = interpreter.read_line()?;
        Ok(TreewalkValue::Str(line))
    }

    fn name(&self) -> String {
        "getline".into()
    }

    fn arity(&self) -> usize {
        0
    }
}

/// `exit(code)`: stop the program with the given status.
struct ExitBuiltin;

impl Callable for ExitBuiltin {
    fn call(
        &self,
        interpreter: &mut TreewalkInterpreter,
        args: Vec<TreewalkValue>,
    ) -> TreewalkResult<TreewalkValue> {
        match args.first() {
            Some(TreewalkValue::Real(code)) => Err(TreewalkDisruption::Signal(
                TreewalkSignal::Exit(*code as i32),
            )),
            Some(other) => Err(interpreter.raise(RuntimeErrorKind::TypeError(format!(
                "exit() expects a real status code, got '{}'",
                other.type_name()
            )))),
            None => Err(interpreter.raise(RuntimeErrorKind::ArityError {
                expected: 1,
                found: 0,
            })),
        }
    }

    fn name(&self) -> String {
        "exit".into()
    }

    fn arity(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use crate::treewalk::{test_utils::*, TreewalkValue};

    #[test]
    fn millis_is_wall_clock() {
        let ctx = run("a := millis()\nb := millis()");
        let (TreewalkValue::Real(a), TreewalkValue::Real(b)) = (read(&ctx, "a"), read(&ctx, "b"))
        else {
            panic!("Expected reals from millis()");
        };

        // Some time after September 2020.
        assert!(a > 1_600_000_000_000.0);
        assert!(b >= a);
        assert_eq!(a.fract(), 0.0);
    }

    #[test]
    fn exit_truncates_the_status() {
        assert_eq!(eval_exit("exit(2.7)"), (2, String::new()));
        assert_eq!(eval_exit("exit(-1.9)"), (-1, String::new()));
    }

    #[test]
    fn getline_reads_each_line_then_empty() {
        let output = eval_output_with_input(
            "output getline()\noutput getline()\noutput getline() == \"\"",
            "first\r\nsecond\n",
        );
        assert_eq!(output, "first\nsecond\ntrue\n");
    }

    #[test]
    fn arity_is_checked() {
        let e = eval_expect_error("millis(1)");
        assert_eq!(e.to_string(), "RuntimeError (line 1): expected 0 arguments but got 1.");
    }
}
