pub mod authn_role;
pub mod authn_user;
pub mod client;

pub use authn_role::PostgresAuthNRoleRepository;
pub use authn_user::PostgresAuthNUserRepository;
pub use client::PostgresClientRepository;
