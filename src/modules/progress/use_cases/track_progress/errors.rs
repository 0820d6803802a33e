use crate::modules::progress::core::record::ParseError;
use crate::shared::infrastructure::persistence_store::PersistenceError;
use thiserror::Error;

/// Usage bugs by the integrating code. Never caused by runtime conditions.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PreconditionError {
    #[error("progress tracker used before initialize")]
    NotInitialized,

    #[error("progress tracker already initialized")]
    AlreadyInitialized,

    #[error("total section count must be at least 1")]
    NoSections,

    #[error("section id must not be empty")]
    EmptySectionId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
