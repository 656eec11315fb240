//! A native rendition of `demos/python_scope.nap`: a counter declared at the top level is
//! incremented by a routine nested two calls deep, and every caller observes the same value.

use std::io::{self, Write};

use log::debug;

pub const START: i64 = 1;
pub const LIMIT: i64 = 10;

/// What a run of the demo left behind.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Summary {
    pub final_value: i64,
    pub iterations: usize,
}

/// Print `START + 1` through `LIMIT`, one per line, then the final value once more.
pub fn run<W: Write>(out: &mut W) -> io::Result<Summary> {
    let mut counter = START;
    let iterations = outer(&mut counter, out)?;
    writeln!(out, "{counter}")?;

    Ok(Summary {
        final_value: counter,
        iterations,
    })
}

fn outer<W: Write>(counter: &mut i64, out: &mut W) -> io::Result<usize> {
    inner(counter, out)
}

fn inner<W: Write>(counter: &mut i64, out: &mut W) -> io::Result<usize> {
    let mut iterations = 0;
    while *counter < LIMIT {
        *counter += 1;
        iterations += 1;
        debug!("counter is now {counter}");
        writeln!(out, "{counter}")?;
    }

    Ok(iterations)
}
