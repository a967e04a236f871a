use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::domain::authn_role::models::AuthNRole;
use crate::domain::authn_user::errors::EmailError;
use crate::domain::authn_user::errors::UsernameError;

/// Stored authentication user.
///
/// `password_hash` holds the hash persisted at creation, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthNUser {
    pub id: AuthNUserId,
    pub username: Username,
    pub email: EmailAddress,
    pub role: AuthNRole,
    pub password_hash: String,
}

/// User to be created; the password is supplied separately and hashed by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthNUser {
    pub id: AuthNUserId,
    pub username: Username,
    pub email: EmailAddress,
    pub role: AuthNRole,
}

impl NewAuthNUser {
    /// Construct a new user with a random identifier.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `role` - Role the user is associated with
    pub fn new(username: Username, email: EmailAddress, role: AuthNRole) -> Self {
        Self {
            id: AuthNUserId::new(),
            username,
            email,
            role,
        }
    }

    /// Attach the stored hash, producing the persisted representation.
    pub fn with_password_hash(self, password_hash: String) -> AuthNUser {
        AuthNUser {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            password_hash,
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthNUserId(pub Uuid);

impl AuthNUserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuthNUserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthNUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// Validates length and character constraints.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
