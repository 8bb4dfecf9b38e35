use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to read from the random source: {0}")]
    RandomSource(String),

    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid base64 encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid hash length: {len} bytes")]
    InvalidLength { len: usize },
}
