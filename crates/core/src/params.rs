//! Sizes fixed by the RabbitMQ password hash format.

/// Salt size in bytes
pub const SALT_SIZE: usize = 4;

/// SHA-256 output size
pub const SHA256_SIZE: usize = 32;

/// MD5 output size
pub const MD5_SIZE: usize = 16;

/// Decoded blob size for SHA-256 hashes
pub const SHA256_BLOB_SIZE: usize = SALT_SIZE + SHA256_SIZE;

/// Decoded blob size for MD5 hashes
pub const MD5_BLOB_SIZE: usize = SALT_SIZE + MD5_SIZE;
