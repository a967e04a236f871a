use std::fmt;

use uuid::Uuid;

use crate::domain::authn_role::errors::RoleNameError;

/// Named role a user can be associated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthNRole {
    pub id: AuthNRoleId,
    pub role: RoleName,
}

impl AuthNRole {
    /// Create a new role with a random identifier.
    pub fn new(role: RoleName) -> Self {
        Self {
            id: AuthNRoleId::new(),
            role,
        }
    }
}

/// Role unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthNRoleId(pub Uuid);

impl AuthNRoleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuthNRoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthNRoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role name value type
///
/// Unique across roles; at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleName(String);

impl RoleName {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid role name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace
    /// * `TooLong` - Name longer than 64 characters
    pub fn new(role: String) -> Result<Self, RoleNameError> {
        if role.trim().is_empty() {
            return Err(RoleNameError::Empty);
        }
        let length = role.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(RoleNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
