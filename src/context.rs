use std::io::{BufRead, Write};

use log::debug;

use crate::{
    domain::Source,
    errors::NapkinResult,
    lexer::{Lexer, SpannedToken},
    parser::{types::Ast, Parser},
    treewalk::{TreewalkInterpreter, TreewalkValue},
};

/// Ties the front end to the interpreter: lex, parse, then execute. The interpreter outlives any
/// single piece of source, so code added later sees earlier bindings.
pub struct NapkinContext {
    source: Source,
    interpreter: TreewalkInterpreter,
}

impl NapkinContext {
    /// A context wired to the process's stdin and stdout.
    pub fn new(source: Source) -> Self {
        Self {
            source,
            interpreter: TreewalkInterpreter::default(),
        }
    }

    pub fn with_io(source: Source, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            source,
            interpreter: TreewalkInterpreter::new(input, output),
        }
    }

    pub fn tokens(&self) -> NapkinResult<Vec<SpannedToken>> {
        Ok(Lexer::new(&self.source).tokenize()?)
    }

    pub fn ast(&self) -> NapkinResult<Ast> {
        parse(&self.source)
    }

    pub fn run(&mut self) -> NapkinResult<TreewalkValue> {
        debug!("running {}", self.source.name());
        let ast = self.ast()?;
        self.interpreter.execute(&ast)
    }

    /// Run another chunk of code against the same globals.
    pub fn add_line(&mut self, line: &str) -> NapkinResult<TreewalkValue> {
        debug!("add_line: {line:?}");
        let ast = parse(&Source::from_text(line))?;
        self.interpreter.execute(&ast)
    }

    /// Print the value of each top-level expression statement as it runs.
    pub fn set_echo(&mut self, echo: bool) {
        self.interpreter.set_echo(echo);
    }

    pub fn read(&self, name: &str) -> Option<TreewalkValue> {
        self.interpreter.read_global(name)
    }
}

fn parse(source: &Source) -> NapkinResult<Ast> {
    let tokens = Lexer::new(source).tokenize()?;
    Ok(Parser::new(&tokens).parse()?)
}
