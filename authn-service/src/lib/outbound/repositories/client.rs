use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientDomain;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::ClientSecret;
use crate::domain::client::ports::ClientRepository;

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: Uuid,
    secret: Uuid,
    domain: String,
}

impl TryFrom<ClientRow> for Client {
    type Error = ClientError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Client {
            id: ClientId(row.id),
            secret: ClientSecret(row.secret),
            domain: ClientDomain::new(row.domain)?,
        })
    }
}

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn create(&self, client: Client) -> Result<Client, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO client (id, secret, domain)
            VALUES ($1, $2, $3)
            RETURNING id, secret, domain
            "#,
        )
        .bind(client.id.0)
        .bind(client.secret.0)
        .bind(client.domain.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return ClientError::DuplicateClient(client.id);
                }
            }
            tracing::error!(client_id = %client.id, error = %e, "Failed to insert client");
            ClientError::DatabaseError(e.to_string())
        })?;

        Client::try_from(row)
    }

    async fn get(&self, id: &ClientId) -> Result<Client, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, secret, domain
            FROM client
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(client_id = %id, error = %e, "Failed to fetch client");
            ClientError::DatabaseError(e.to_string())
        })?;

        match row {
            Some(r) => Client::try_from(r),
            None => Err(ClientError::NotFound(*id)),
        }
    }
}
