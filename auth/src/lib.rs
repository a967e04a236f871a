//! Password hashing library
//!
//! Provides reusable credential-hashing infrastructure for services:
//! - Password hashing (Argon2id, salted, PHC string output)
//! - Password verification against stored hashes
//!
//! Each service defines its own hashing port and adapts this implementation.
//! This keeps services free of a direct dependency on the hashing scheme.
//!
//! # Examples
//!
//! ## Default parameters
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Custom cost
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_params(8 * 1024, 1, 1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(!hasher.verify("My_password", &hash).unwrap());
//! ```

pub mod password;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
