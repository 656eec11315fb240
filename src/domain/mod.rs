mod error;
mod source;

#[cfg(test)]
pub use error::test_utils;
pub use error::{DomainResult, RuntimeError, RuntimeErrorKind};
pub use source::Source;
