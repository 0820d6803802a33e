// PersistenceStore port: a durable map from string key to string value.
//
// Responsibilities
// - Synchronous get and set for a single logical caller.
// - Report failures as PersistenceError. Callers decide whether they are fatal.
//
// Boundaries
// - No knowledge of what the values mean. Encoding lives with the caller.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("write rejected: {0}")]
    Rejected(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("stored value is not text: {0}")]
    Undecodable(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PersistenceError {
    fn from(error: std::io::Error) -> Self {
        PersistenceError::Io(error.to_string())
    }
}

pub trait PersistenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

pub mod in_memory;
pub mod json_file;
