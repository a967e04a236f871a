use thiserror::Error;

use crate::domain::errors::HashingError;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all authentication user operations
#[derive(Debug, Clone, Error)]
pub enum AuthNUserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    Hashing(#[from] HashingError),

    // Domain-level errors
    #[error("User already exists with username: {username}")]
    DuplicateAuthNUserForUsername { username: String },

    #[error("User not found with username: {username}")]
    AuthNUserNotFoundForUsername { username: String },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
