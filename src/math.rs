pub mod stats;

pub use stats::{correlation, cross_correlation};
