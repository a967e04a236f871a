use crate::domain::errors::HashingError;

/// One-way password hashing used by the credential repositories.
pub trait Hasher: Send + Sync + 'static {
    /// Hash a plaintext password for storage.
    ///
    /// Repeated calls with the same plaintext produce different hashes that
    /// all verify against it.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed (e.g. random source unavailable)
    fn hash(&self, plaintext: &str) -> Result<String, HashingError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash could not be interpreted
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashingError>;
}
