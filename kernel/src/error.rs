use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    DuplicateIdentifier,
    LimitExceeded,
    AlreadyLent,
    NotFound,
    CorruptState,
    StorageWriteFailure,
    Configuration,
    Internal,
}

impl KernelError {
    /// Outcomes that leave every collection untouched and need no retry.
    pub fn is_informational(&self) -> bool {
        matches!(self, KernelError::NotFound)
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::DuplicateIdentifier => write!(f, "Identifier already exists"),
            KernelError::LimitExceeded => write!(f, "Borrowing limit exceeded"),
            KernelError::AlreadyLent => write!(f, "Book is already lent"),
            KernelError::NotFound => write!(f, "No matching entry"),
            KernelError::CorruptState => write!(f, "Persisted state is corrupt"),
            KernelError::StorageWriteFailure => write!(f, "Failed to write durable storage"),
            KernelError::Configuration => write!(f, "Invalid configuration"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
