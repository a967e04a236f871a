use async_trait::async_trait;

use crate::domain::authn_user::errors::AuthNUserError;
use crate::domain::authn_user::models::AuthNUser;
use crate::domain::authn_user::models::NewAuthNUser;
use crate::domain::authn_user::models::Username;

/// Persistence and credential checks for authentication users.
#[async_trait]
pub trait AuthNUserRepository: Send + Sync + 'static {
    /// Hash the password and persist a new user.
    ///
    /// Nothing is written when hashing fails. The returned user carries the
    /// caller-supplied role.
    ///
    /// # Arguments
    /// * `user` - User to create
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Stored user entity
    ///
    /// # Errors
    /// * `Hashing` - Password hashing failed
    /// * `DuplicateAuthNUserForUsername` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(
        &self,
        user: NewAuthNUser,
        password: &str,
    ) -> Result<AuthNUser, AuthNUserError>;

    /// Retrieve a user by username.
    ///
    /// # Errors
    /// * `AuthNUserNotFoundForUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, username: &Username) -> Result<AuthNUser, AuthNUserError>;

    /// Check a plaintext password against the stored hash for a username.
    ///
    /// # Returns
    /// True if the password matches, false if it does not
    ///
    /// # Errors
    /// * `AuthNUserNotFoundForUsername` - No user with this username
    /// * `Hashing` - Stored hash is malformed
    /// * `DatabaseError` - Database operation failed
    async fn verify(&self, username: &Username, password: &str) -> Result<bool, AuthNUserError>;
}
