//! # RabbitMQ Password Hash Core
//!
//! Produces password hashes in the format RabbitMQ stores for its internal
//! users: `base64(salt || digest(salt || password))`.
//!
//! ## Format
//!
//! ```text
//! blob = salt || digest
//!        ^^^^    ^^^^^^
//!        4 B     32 B (SHA-256) or 16 B (MD5), computed over salt || password
//! ```
//!
//! The blob is rendered with the standard base64 alphabet, padded.
//!
//! ## Example
//!
//! ```rust
//! use rmqhash_core::{Algorithm, Salt, SaltedHash};
//!
//! // Fresh random salt
//! let hash = SaltedHash::generate(Algorithm::Sha256, b"guest").unwrap();
//! assert!(hash.verify(b"guest"));
//!
//! // Fixed salt, reproducible output
//! let hash = SaltedHash::new(Salt::ZERO, Algorithm::Md5, b"guest");
//! assert_eq!(hash.to_string(), "AAAAAM8qHlIgCoMtmqYAu+KVRI8=");
//!
//! // Decode a stored value and check a password against it
//! let stored = SaltedHash::decode("AAAAAM8qHlIgCoMtmqYAu+KVRI8=").unwrap();
//! assert_eq!(stored.algorithm(), Algorithm::Md5);
//! assert!(stored.verify(b"guest"));
//! ```

mod algorithm;
mod error;
mod params;
mod salt;
mod salted;

pub use algorithm::{Algorithm, compute_digest};
pub use error::HashError;
pub use params::*;
pub use salt::{Salt, generate_salt};
pub use salted::{SaltedHash, encode, hash_password};

#[cfg(test)]
mod tests;
