use thiserror::Error;

/// Error for password hashing operations.
///
/// A malformed stored hash is reported separately from a hash that was read
/// and compared successfully but did not match (which is `Ok(false)`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashingError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}
