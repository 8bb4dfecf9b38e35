//! RabbitMQ Password Hash Library
//!
//! Generates password hashes that a RabbitMQ broker accepts for its internal
//! users, in the `rabbit_password_hashing_sha256` / `_md5` format.
//!
//! # Overview
//!
//! The broker stores `base64(salt || digest(salt || password))` with a
//! 4-byte salt. This crate produces that value and can check a password
//! against a stored one.
//!
//! # Example
//!
//! ```rust
//! use rmqhash::algorithm::{Algorithm, SaltedHash};
//!
//! let hash = SaltedHash::generate(Algorithm::Sha256, b"guest").unwrap();
//! println!("{}", hash);
//!
//! let stored = SaltedHash::decode(&hash.to_string()).unwrap();
//! assert!(stored.verify(b"guest"));
//! ```

// Re-export the core algorithm
pub use rmqhash_core as algorithm;

#[cfg(feature = "cli")]
pub mod cli;

// Convenience re-exports
pub use algorithm::{hash_password, Algorithm, Salt, SaltedHash};
