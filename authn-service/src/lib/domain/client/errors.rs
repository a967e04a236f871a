use thiserror::Error;

use crate::domain::client::models::ClientId;

/// Error for ClientDomain validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientDomainError {
    #[error("Client domain is empty")]
    Empty,

    #[error("Client domain too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all client-related operations
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Invalid client domain: {0}")]
    InvalidDomain(#[from] ClientDomainError),

    #[error("Client already exists: {0}")]
    DuplicateClient(ClientId),

    #[error("Client not found: {0}")]
    NotFound(ClientId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
