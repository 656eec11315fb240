mod complex;
mod function;

pub use complex::Complex;
pub use function::Function;
