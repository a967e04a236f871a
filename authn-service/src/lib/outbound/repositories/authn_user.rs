use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::authn_role::models::AuthNRole;
use crate::domain::authn_role::models::AuthNRoleId;
use crate::domain::authn_role::models::RoleName;
use crate::domain::authn_user::errors::AuthNUserError;
use crate::domain::authn_user::models::AuthNUser;
use crate::domain::authn_user::models::AuthNUserId;
use crate::domain::authn_user::models::EmailAddress;
use crate::domain::authn_user::models::NewAuthNUser;
use crate::domain::authn_user::models::Username;
use crate::domain::authn_user::ports::AuthNUserRepository;
use crate::domain::ports::Hasher;

const USERNAME_CONSTRAINT: &str = "authentication_user_username_key";

#[derive(sqlx::FromRow)]
struct AuthNUserRow {
    id: Uuid,
    username: String,
    email: String,
    password: String,
    role_id: Uuid,
    role: String,
}

impl TryFrom<AuthNUserRow> for AuthNUser {
    type Error = AuthNUserError;

    fn try_from(row: AuthNUserRow) -> Result<Self, Self::Error> {
        // Role names are validated on insert; one failing validation here is corrupt data.
        let role = RoleName::new(row.role)
            .map_err(|e| AuthNUserError::DatabaseError(format!("Invalid stored role: {}", e)))?;

        Ok(AuthNUser {
            id: AuthNUserId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            role: AuthNRole {
                id: AuthNRoleId(row.role_id),
                role,
            },
            password_hash: row.password,
        })
    }
}

/// PostgreSQL implementation of AuthNUserRepository.
///
/// Passwords are hashed with the injected `Hasher` before they reach storage.
pub struct PostgresAuthNUserRepository<H>
where
    H: Hasher,
{
    pool: PgPool,
    hasher: Arc<H>,
}

impl<H> PostgresAuthNUserRepository<H>
where
    H: Hasher,
{
    /// Create a new PostgreSQL user repository.
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool
    /// * `hasher` - Password hashing implementation
    pub fn new(pool: PgPool, hasher: Arc<H>) -> Self {
        Self { pool, hasher }
    }
}

#[async_trait]
impl<H> AuthNUserRepository for PostgresAuthNUserRepository<H>
where
    H: Hasher,
{
    async fn create(
        &self,
        user: NewAuthNUser,
        password: &str,
    ) -> Result<AuthNUser, AuthNUserError> {
        let password_hash = self.hasher.hash(password).map_err(|e| {
            tracing::error!(username = %user.username, error = %e, "Failed to hash password");
            e
        })?;

        sqlx::query(
            r#"
            INSERT INTO authentication_user (id, username, email, password, role_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&password_hash)
        .bind(user.role.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(USERNAME_CONSTRAINT)
                {
                    return AuthNUserError::DuplicateAuthNUserForUsername {
                        username: user.username.to_string(),
                    };
                }
            }
            tracing::error!(username = %user.username, error = %e, "Failed to insert user");
            AuthNUserError::DatabaseError(e.to_string())
        })?;

        tracing::debug!(user_id = %user.id, role = %user.role.role, "User created");
        Ok(user.with_password_hash(password_hash))
    }

    async fn get(&self, username: &Username) -> Result<AuthNUser, AuthNUserError> {
        let row = sqlx::query_as::<_, AuthNUserRow>(
            r#"
            SELECT u.id, u.username, u.email, u.password, u.role_id, r.role
            FROM authentication_user u
            JOIN authentication_role r ON r.id = u.role_id
            WHERE u.username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(username = %username, error = %e, "Failed to fetch user");
            AuthNUserError::DatabaseError(e.to_string())
        })?;

        row.ok_or_else(|| AuthNUserError::AuthNUserNotFoundForUsername {
            username: username.to_string(),
        })
        .and_then(AuthNUser::try_from)
    }

    async fn verify(&self, username: &Username, password: &str) -> Result<bool, AuthNUserError> {
        let stored_hash = sqlx::query_scalar::<_, String>(
            r#"
            SELECT password
            FROM authentication_user
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(username = %username, error = %e, "Failed to fetch password hash");
            AuthNUserError::DatabaseError(e.to_string())
        })?;

        let Some(stored_hash) = stored_hash else {
            // Spend the same Argon2 work as a mismatch so response time does
            // not reveal whether the username exists.
            let _ = self.hasher.hash(password);
            return Err(AuthNUserError::AuthNUserNotFoundForUsername {
                username: username.to_string(),
            });
        };

        self.hasher.verify(password, &stored_hash).map_err(|e| {
            tracing::error!(username = %username, error = %e, "Stored password hash is unusable");
            AuthNUserError::from(e)
        })
    }
}
