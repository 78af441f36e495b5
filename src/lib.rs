pub mod cs;
pub mod error;
pub mod math;

pub use cs::combinatorial;
pub use error::{Error, Result};
