pub mod combinatorial;

// Re-export all modules
pub use combinatorial::*;
