mod container;
mod utils;

pub use container::Container;
#[cfg(test)]
pub use utils::floats_equal;
pub use utils::format_real;
