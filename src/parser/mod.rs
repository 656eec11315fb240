#[allow(clippy::module_inception)]
mod parser;
mod printer;
#[cfg(test)]
pub mod test_utils;
pub mod types;

pub use parser::Parser;
pub use printer::AstPrinter;
