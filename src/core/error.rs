use thiserror::Error;

use crate::core::Key;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Undefined offset: key '{0}' does not exist")]
    UndefinedOffset(Key),
}

pub type Result<T> = std::result::Result<T, CollectionError>;

impl CollectionError {
    /// Rejection of a value by the active validation rule.
    pub fn not_of_type(expected: &str) -> Self {
        Self::InvalidArgument(format!("value is not of type {expected}"))
    }

    /// A string strategy that names no known type.
    pub fn unknown_type(name: &str) -> Self {
        Self::InvalidArgument(format!("type '{name}' does not exist"))
    }
}
