use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::authn_role::errors::AuthNRoleError;
use crate::domain::authn_role::models::AuthNRole;
use crate::domain::authn_role::models::AuthNRoleId;
use crate::domain::authn_role::models::RoleName;
use crate::domain::authn_role::ports::AuthNRoleRepository;

const ROLE_NAME_CONSTRAINT: &str = "authentication_role_role_key";

#[derive(sqlx::FromRow)]
struct AuthNRoleRow {
    id: Uuid,
    role: String,
}

impl TryFrom<AuthNRoleRow> for AuthNRole {
    type Error = AuthNRoleError;

    fn try_from(row: AuthNRoleRow) -> Result<Self, Self::Error> {
        Ok(AuthNRole {
            id: AuthNRoleId(row.id),
            role: RoleName::new(row.role)?,
        })
    }
}

pub struct PostgresAuthNRoleRepository {
    pool: PgPool,
}

impl PostgresAuthNRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthNRoleRepository for PostgresAuthNRoleRepository {
    async fn create(&self, role: AuthNRole) -> Result<AuthNRole, AuthNRoleError> {
        let row = sqlx::query_as::<_, AuthNRoleRow>(
            r#"
            INSERT INTO authentication_role (id, role)
            VALUES ($1, $2)
            RETURNING id, role
            "#,
        )
        .bind(role.id.0)
        .bind(role.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(ROLE_NAME_CONSTRAINT)
                {
                    return AuthNRoleError::DuplicateAuthNRole(role.role.to_string());
                }
            }
            tracing::error!(role = %role.role, error = %e, "Failed to insert role");
            AuthNRoleError::DatabaseError(e.to_string())
        })?;

        AuthNRole::try_from(row)
    }

    async fn get(&self, role: &RoleName) -> Result<AuthNRole, AuthNRoleError> {
        let row = sqlx::query_as::<_, AuthNRoleRow>(
            r#"
            SELECT id, role
            FROM authentication_role
            WHERE role = $1
            "#,
        )
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(role = %role, error = %e, "Failed to fetch role");
            AuthNRoleError::DatabaseError(e.to_string())
        })?;

        row.ok_or_else(|| AuthNRoleError::AuthNRoleNotFound(role.to_string()))
            .and_then(AuthNRole::try_from)
    }
}
