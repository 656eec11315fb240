use std::io::Cursor;

use crate::{
    context::NapkinContext,
    core::Container,
    domain::{RuntimeError, Source},
    errors::NapkinError,
    treewalk::{types::Complex, TreewalkValue},
};

/// A context reading `input` and writing into the returned buffer.
pub fn init_with_input(text: &str, input: &str) -> (NapkinContext, Container<Vec<u8>>) {
    let output = Container::new(Vec::new());
    let context = NapkinContext::with_io(
        Source::from_text(text),
        Box::new(Cursor::new(input.to_string().into_bytes())),
        Box::new(output.clone()),
    );
    (context, output)
}

pub fn init(text: &str) -> (NapkinContext, Container<Vec<u8>>) {
    init_with_input(text, "")
}

pub fn eval(text: &str) -> TreewalkValue {
    init(text).0.run().expect("Failed to evaluate test string!")
}

pub fn eval_expect_error(text: &str) -> RuntimeError {
    match init(text).0.run() {
        Ok(_) => panic!("Expected an error!"),
        Err(NapkinError::Runtime(e)) => e,
        Err(e) => panic!("Expected a runtime error, got {:?}", e),
    }
}

pub fn run(text: &str) -> NapkinContext {
    let (mut context, _) = init(text);
    context.run().expect("Treewalk evaluation failed!");
    context
}

fn captured(output: &Container<Vec<u8>>) -> String {
    String::from_utf8(output.borrow().clone()).expect("Output was not UTF-8!")
}

pub fn eval_output_with_input(text: &str, input: &str) -> String {
    let (mut context, output) = init_with_input(text, input);
    context.run().expect("Treewalk evaluation failed!");
    captured(&output)
}

pub fn eval_output(text: &str) -> String {
    eval_output_with_input(text, "")
}

/// The status passed to `exit` along with everything printed before it.
pub fn eval_exit(text: &str) -> (i32, String) {
    let (mut context, output) = init(text);
    match context.run() {
        Err(NapkinError::Exit(code)) => (code, captured(&output)),
        other => panic!("Expected exit, got {:?}", other),
    }
}

pub fn read(ctx: &NapkinContext, name: &str) -> TreewalkValue {
    ctx.read(name).expect("Failed to read var")
}

pub fn real(value: f64) -> TreewalkValue {
    TreewalkValue::Real(value)
}

pub fn complex(re: f64, im: f64) -> TreewalkValue {
    TreewalkValue::Complex(Complex::new(re, im))
}

pub fn string(value: &str) -> TreewalkValue {
    TreewalkValue::Str(value.to_string())
}

macro_rules! assert_eval_eq {
    ($input:expr, $expected:expr) => {
        assert_eq!(eval($input), $expected);
    };
}

macro_rules! assert_read_eq {
    ($ctx:expr, $input:expr, $expected:expr) => {
        assert_eq!(read(&$ctx, $input), $expected);
    };
}

pub(crate) use assert_eval_eq;
pub(crate) use assert_read_eq;
