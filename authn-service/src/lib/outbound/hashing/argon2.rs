use auth::PasswordError;
use auth::PasswordHasher;

use crate::config::HasherConfig;
use crate::domain::errors::HashingError;
use crate::domain::ports::Hasher;

/// Argon2id implementation of the `Hasher` port, backed by the auth library.
#[derive(Clone)]
pub struct Argon2Hasher {
    inner: PasswordHasher,
}

impl Argon2Hasher {
    /// Create a hasher with the cost parameters from configuration.
    ///
    /// # Errors
    /// * `PasswordError::InvalidParameters` - Parameters rejected by Argon2
    pub fn from_config(config: &HasherConfig) -> Result<Self, PasswordError> {
        let inner =
            PasswordHasher::with_params(config.memory_kib, config.iterations, config.parallelism)?;
        Ok(Self { inner })
    }
}

impl From<PasswordError> for HashingError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::HashingFailed(msg) | PasswordError::InvalidParameters(msg) => {
                HashingError::HashingFailed(msg)
            }
            PasswordError::VerificationFailed(msg) => HashingError::MalformedHash(msg),
        }
    }
}

impl Hasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        self.inner.hash(plaintext).map_err(HashingError::from)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashingError> {
        self.inner.verify(plaintext, hash).map_err(HashingError::from)
    }
}
