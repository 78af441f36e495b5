use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the solvers and helpers in this crate.
///
/// Queries that simply have no answer are not errors; they return an empty
/// solution instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The inventory handed to a subset solver cannot produce any block.
    #[error("invalid inventory: {0}")]
    InvalidInventory(String),

    /// Arguments that do not describe a usable input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn invalid_inventory<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInventory(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
