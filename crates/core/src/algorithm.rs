//! Digest algorithms accepted by RabbitMQ for internal user passwords

use core::fmt;
use core::str::FromStr;

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::error::HashError;
use crate::params::{MD5_SIZE, SHA256_SIZE};
use crate::salt::Salt;

/// Hash function applied to `salt || password`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// `rabbit_password_hashing_sha256`, the broker default
    #[default]
    Sha256,
    /// `rabbit_password_hashing_md5`, kept for older brokers
    Md5,
}

impl Algorithm {
    /// Name as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Md5 => "md5",
        }
    }

    /// Digest length in bytes
    pub const fn digest_size(self) -> usize {
        match self {
            Algorithm::Sha256 => SHA256_SIZE,
            Algorithm::Md5 => MD5_SIZE,
        }
    }

    /// Algorithm whose digest has the given length, if any
    pub const fn from_digest_size(len: usize) -> Option<Self> {
        match len {
            SHA256_SIZE => Some(Algorithm::Sha256),
            MD5_SIZE => Some(Algorithm::Md5),
            _ => None,
        }
    }

    /// Hash `salt || password` in a single pass
    pub fn digest(self, salt: &Salt, password: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Sha256 => Sha256::new()
                .chain_update(salt)
                .chain_update(password)
                .finalize()
                .to_vec(),
            Algorithm::Md5 => Md5::new()
                .chain_update(salt)
                .chain_update(password)
                .finalize()
                .to_vec(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Algorithm::Sha256),
            "md5" => Ok(Algorithm::Md5),
            other => Err(HashError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute `algorithm(salt || password)`
pub fn compute_digest(salt: &Salt, password: &[u8], algorithm: Algorithm) -> Vec<u8> {
    algorithm.digest(salt, password)
}
