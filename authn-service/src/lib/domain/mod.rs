pub mod authn_role;
pub mod authn_user;
pub mod client;
pub mod errors;
pub mod ports;
