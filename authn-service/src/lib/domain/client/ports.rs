use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;

/// Persistence operations for API clients.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Persist a new client.
    ///
    /// # Arguments
    /// * `client` - Client entity to create
    ///
    /// # Returns
    /// Stored client entity
    ///
    /// # Errors
    /// * `DuplicateClient` - A client with this ID or secret already exists
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, client: Client) -> Result<Client, ClientError>;

    /// Retrieve a client by identifier.
    ///
    /// # Errors
    /// * `NotFound` - No client with this ID
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, id: &ClientId) -> Result<Client, ClientError>;
}
