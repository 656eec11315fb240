mod builtins;
mod interpreter;
mod operators;
pub mod protocols;
mod result;
mod scope;
#[cfg(test)]
pub mod test_utils;
pub mod types;
mod value;

pub use interpreter::TreewalkInterpreter;
pub use result::{TreewalkDisruption, TreewalkResult, TreewalkSignal};
pub use scope::Scope;
pub use value::TreewalkValue;
