//! Salted hash blob: encoding, decoding and verification

use core::fmt;
use core::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use subtle::ConstantTimeEq;

use crate::algorithm::Algorithm;
use crate::error::HashError;
use crate::params::SALT_SIZE;
use crate::salt::Salt;

/// A password hash as stored by RabbitMQ: `salt || digest(salt || password)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedHash {
    salt: Salt,
    algorithm: Algorithm,
    digest: Vec<u8>,
}

impl SaltedHash {
    /// Hash `password` with the given salt
    pub fn new(salt: Salt, algorithm: Algorithm, password: &[u8]) -> Self {
        let digest = algorithm.digest(&salt, password);
        Self {
            salt,
            algorithm,
            digest,
        }
    }

    /// Hash `password` with a fresh random salt
    pub fn generate(algorithm: Algorithm, password: &[u8]) -> Result<Self, HashError> {
        let salt = Salt::random()?;
        Ok(Self::new(salt, algorithm, password))
    }

    /// Parse a base64 value produced by [`SaltedHash::encode`] or by the broker.
    ///
    /// The algorithm is inferred from the digest length, since the blob
    /// itself does not carry it.
    pub fn decode(encoded: &str) -> Result<Self, HashError> {
        let blob = STANDARD
            .decode(encoded.trim())
            .map_err(|e| HashError::InvalidEncoding(e.to_string()))?;

        if blob.len() < SALT_SIZE {
            return Err(HashError::InvalidLength { len: blob.len() });
        }
        let (salt, digest) = blob.split_at(SALT_SIZE);
        let algorithm = Algorithm::from_digest_size(digest.len())
            .ok_or(HashError::InvalidLength { len: blob.len() })?;

        let mut salt_bytes = [0u8; SALT_SIZE];
        salt_bytes.copy_from_slice(salt);

        Ok(Self {
            salt: Salt::from_bytes(salt_bytes),
            algorithm,
            digest: digest.to_vec(),
        })
    }

    pub fn salt(&self) -> Salt {
        self.salt
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Raw `salt || digest` bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut blob = Vec::with_capacity(SALT_SIZE + self.digest.len());
        blob.extend_from_slice(self.salt.as_bytes());
        blob.extend_from_slice(&self.digest);
        blob
    }

    /// Standard padded base64 of `salt || digest`
    pub fn encode(&self) -> String {
        encode(&self.salt, &self.digest)
    }

    /// Check `password` the way the broker does: rehash with the stored salt
    /// and compare against the stored digest.
    pub fn verify(&self, password: &[u8]) -> bool {
        let candidate = self.algorithm.digest(&self.salt, password);
        candidate.as_slice().ct_eq(&self.digest).into()
    }
}

impl fmt::Display for SaltedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for SaltedHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Base64-encode `salt || digest`
pub fn encode(salt: &Salt, digest: &[u8]) -> String {
    let mut blob = Vec::with_capacity(SALT_SIZE + digest.len());
    blob.extend_from_slice(salt.as_bytes());
    blob.extend_from_slice(digest);
    STANDARD.encode(blob)
}

/// Hash `password` with a random salt and return the encoded value
pub fn hash_password(algorithm: Algorithm, password: &[u8]) -> Result<String, HashError> {
    SaltedHash::generate(algorithm, password).map(|hash| hash.encode())
}
