//! Error types for the host boundary.
//!
//! The export pass itself never fails; errors only surface while registering
//! models or loading export configuration.

use std::error::Error as StdError;
use std::fmt;

/// Errors raised at the configuration and registration boundary.
#[derive(Debug)]
pub enum Error {
    /// A model with the same composite identity was registered twice.
    DuplicateModel { identity: String },
    /// Export configuration could not be parsed.
    Config(serde_json::Error),
    /// Export configuration parsed but is not usable.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateModel { identity } => {
                write!(f, "model already registered: {}", identity)
            }
            Error::Config(err) => write!(f, "invalid export configuration: {}", err),
            Error::InvalidConfig(msg) => write!(f, "invalid export configuration: {}", msg),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err)
    }
}

/// Result alias used across Schemabone crates.
pub type Result<T> = std::result::Result<T, Error>;
