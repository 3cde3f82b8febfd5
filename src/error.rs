use thiserror::Error;

/// Input rejected before anything touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Please fill out {0}")]
    MissingField(&'static str),
    #[error("Amount must be a valid number (example: 12.50), got '{0}'")]
    InvalidAmount(String),
    #[error("Date must be YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),
}

/// Fault at the persistence boundary. Non-fatal: callers log it, show it and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}

/// Why a form submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] EntryError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
