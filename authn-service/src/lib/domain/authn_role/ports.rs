use async_trait::async_trait;

use crate::domain::authn_role::errors::AuthNRoleError;
use crate::domain::authn_role::models::AuthNRole;
use crate::domain::authn_role::models::RoleName;

/// Persistence operations for roles.
#[async_trait]
pub trait AuthNRoleRepository: Send + Sync + 'static {
    /// Persist a new role.
    ///
    /// # Arguments
    /// * `role` - Role entity to create
    ///
    /// # Returns
    /// Stored role entity
    ///
    /// # Errors
    /// * `DuplicateAuthNRole` - A role with this name already exists
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, role: AuthNRole) -> Result<AuthNRole, AuthNRoleError>;

    /// Retrieve a role by its unique name.
    ///
    /// # Errors
    /// * `AuthNRoleNotFound` - No role with this name
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, role: &RoleName) -> Result<AuthNRole, AuthNRoleError>;
}
