use thiserror::Error;

/// The configured database identifier contains no usable 32-hex token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no 32-character hexadecimal identifier found in {raw:?}")]
pub struct InvalidDatabaseId {
    pub raw: String,
}
