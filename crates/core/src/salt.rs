//! Salt generation

use core::fmt;

use crate::error::HashError;
use crate::params::SALT_SIZE;

/// Four bytes prepended to the password before hashing
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt([u8; SALT_SIZE]);

impl Salt {
    /// All-zero salt.
    ///
    /// Earlier releases of this tool drew random bytes and then discarded
    /// them, so every hash they produced carries this salt. Use it only to
    /// reproduce those hashes.
    pub const ZERO: Salt = Salt([0u8; SALT_SIZE]);

    /// Draw a salt from the operating system CSPRNG
    pub fn random() -> Result<Self, HashError> {
        let mut bytes = [0u8; SALT_SIZE];
        getrandom::getrandom(&mut bytes).map_err(|e| HashError::RandomSource(e.to_string()))?;
        Ok(Self(bytes))
    }

    pub const fn from_bytes(bytes: [u8; SALT_SIZE]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.0
    }
}

impl From<[u8; SALT_SIZE]> for Salt {
    fn from(bytes: [u8; SALT_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Salt {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Salt({:02x}{:02x}{:02x}{:02x})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Generate a fresh random salt.
///
/// Fails only if the OS entropy source is unavailable; callers should treat
/// that as fatal rather than retry.
pub fn generate_salt() -> Result<Salt, HashError> {
    Salt::random()
}
