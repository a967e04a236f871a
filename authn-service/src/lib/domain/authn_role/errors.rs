use thiserror::Error;

/// Error for RoleName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleNameError {
    #[error("Role name is empty")]
    Empty,

    #[error("Role name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all role-related operations
#[derive(Debug, Clone, Error)]
pub enum AuthNRoleError {
    #[error("Invalid role name: {0}")]
    InvalidRoleName(#[from] RoleNameError),

    #[error("Role already exists: {0}")]
    DuplicateAuthNRole(String),

    #[error("Role not found: {0}")]
    AuthNRoleNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
