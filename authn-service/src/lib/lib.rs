pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::authn_role;
pub use domain::authn_user;
pub use domain::client;
pub use outbound::repositories;
