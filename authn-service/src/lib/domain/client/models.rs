use std::fmt;

use uuid::Uuid;

use crate::domain::client::errors::ClientDomainError;

/// Registered API client.
///
/// Created once and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub secret: ClientSecret,
    pub domain: ClientDomain,
}

impl Client {
    /// Create a new client with a random identifier and secret.
    ///
    /// # Arguments
    /// * `domain` - Validated domain the client operates from
    pub fn new(domain: ClientDomain) -> Self {
        Self {
            id: ClientId::new(),
            secret: ClientSecret::new(),
            domain,
        }
    }
}

/// Client unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Client secret, a random UUID shared with the client out of band.
///
/// Not displayed so it cannot end up in log lines by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSecret(pub Uuid);

impl ClientSecret {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientSecret {
    fn default() -> Self {
        Self::new()
    }
}

/// Domain value type
///
/// Ensures the domain is non-empty and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDomain(String);

impl ClientDomain {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated client domain.
    ///
    /// # Errors
    /// * `Empty` - Domain is empty or whitespace
    /// * `TooLong` - Domain longer than 255 characters
    pub fn new(domain: String) -> Result<Self, ClientDomainError> {
        if domain.trim().is_empty() {
            return Err(ClientDomainError::Empty);
        }
        let length = domain.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ClientDomainError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(domain))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
