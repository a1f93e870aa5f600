use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or interpreting the warehouse config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read at all.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line that is neither a section header, a comment nor KEY=VALUE.
    #[error("Malformed line {line} (expected KEY=VALUE)")]
    MalformedLine { line: usize },

    /// KEY=VALUE with nothing before the equals sign.
    #[error("Empty key at line {line}")]
    EmptyKey { line: usize },

    /// A KEY=VALUE pair appeared before any [SECTION] header.
    #[error("Key outside of any section at line {line}")]
    KeyOutsideSection { line: usize },

    /// A required section is missing entirely.
    #[error("Missing section [{0}]")]
    MissingSection(String),

    /// A required key is missing from its section.
    #[error("Missing key {key} in section [{section}]")]
    MissingKey { section: String, key: String },

    /// The port value is not a number in the TCP port range.
    #[error("Invalid port: {value}")]
    InvalidPort { value: String },
}

/// All errors coming from the warehouse connection layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any driver-level Postgres error.
    #[error("Postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// TLS setup or handshake failure.
    #[error("TLS error: {0}")]
    Tls(#[from] native_tls::Error),

    /// The connection string could not be parsed.
    #[error("Invalid connection string: {0}")]
    InvalidConfig(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
