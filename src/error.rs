//! Error types for the Pokedex shell
//!
//! Provides unified error handling using thiserror. Every variant is
//! recoverable: the REPL prints the message and keeps going.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for command execution.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Typed command is not registered
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// Wrong number of arguments for a command
    #[error("{command}: {message}")]
    ArgumentCount {
        command: &'static str,
        message: String,
    },

    /// Network failure before a response was received
    #[error("problem reaching the catalog: {0}")]
    Transport(#[from] reqwest::Error),

    /// Catalog answered with a non-2xx status
    #[error("catalog responded with status {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },

    /// Payload did not match the expected resource shape
    #[error("could not decode {url} ({origin}): {source}")]
    Decode {
        url: String,
        origin: PayloadOrigin,
        #[source]
        source: serde_json::Error,
    },

    /// Decoded resource could not be serialized back into the cache
    #[error("could not encode {url} for the cache: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// List resource decoded with zero entries
    #[error("{0} is empty")]
    EmptyResult(String),

    /// Creature name or ID unknown to the catalog
    #[error("creature with name or ID '{0}' does not exist")]
    NotFound(String),

    /// Capture store has nothing in it yet
    #[error("your Pokedex is empty... try catching a creature first")]
    EmptyPokedex,
}

/// Where a payload that failed to decode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadOrigin {
    Cache,
    Network,
}

impl std::fmt::Display for PayloadOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadOrigin::Cache => f.write_str("from cache"),
            PayloadOrigin::Network => f.write_str("from network"),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex shell.
pub type Result<T> = std::result::Result<T, PokedexError>;
