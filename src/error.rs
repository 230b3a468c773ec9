//! Error types.
//!
//! Each domain has its own enum; `Error` wraps them so callers can match on
//! the category they care about.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Secrets(#[from] SecretsError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures reading the secrets file.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// The file exists but could not be read.
    #[error("secrets file {} is unreadable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but a line is not a `key=value` pair.
    #[error("secrets file {}:{line} is malformed: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Failures turning secrets into a signing identity.
#[derive(Error, Debug)]
pub enum SigningError {
    /// Secrets are present but one or more required keys are missing or empty.
    #[error("incomplete signing config: missing {}", missing.join(", "))]
    IncompleteSigningConfig { missing: Vec<&'static str> },

    /// A release build was requested in strict mode without any secrets.
    #[error("no signing secrets found at {} for a release build", path.display())]
    MissingReleaseSecrets { path: PathBuf },
}

/// Failures in `.relsign.toml` and project setup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("secrets file already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("cannot determine absolute path for {}: {source}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures validating user-supplied values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("unknown build variant: {0:?}")]
    InvalidVariant(String),

    #[error("value for {0} cannot be empty")]
    EmptyValue(String),

    #[error("value for {0} cannot span multiple lines")]
    MultilineValue(String),

    #[error("value for {0} cannot start with whitespace")]
    LeadingWhitespace(String),

    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("{0} is required in non-interactive mode")]
    NonInteractive(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
