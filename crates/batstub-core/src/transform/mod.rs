pub mod wrap;

pub use wrap::{DEFAULT_WRAP_WIDTH, wrap};
