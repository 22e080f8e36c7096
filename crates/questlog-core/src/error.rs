//! Core error types for questlog-core.
//!
//! This module defines the error hierarchy using thiserror. Each layer of
//! the library (goal codec, profile, store, config) has a focused error
//! enum, with [`CoreError`] as the umbrella type for callers that span
//! layers.

use thiserror::Error;

/// Core error type for questlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Goal line codec errors
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Profile-level errors
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Profile store errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced while decoding a single goal line.
///
/// A caller decoding a whole profile treats any of these as "skip this
/// line"; the variants exist so the skip can be reported precisely.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unrecognized goal tag '{0}'")]
    UnknownTag(String),

    #[error("{tag} line has {got} fields, expected at least {expected}")]
    TooFewFields {
        tag: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("field '{field}' is not a valid integer: '{value}'")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    #[error("field '{field}' is not a valid boolean: '{value}'")]
    InvalidBool {
        field: &'static str,
        value: String,
    },
}

/// Errors raised by profile operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The referenced goal position does not exist.
    #[error("goal index {index} is out of range ({len} goals tracked)")]
    GoalIndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while loading or saving a whole profile.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The first line of the blob is not a valid `owner|points` header.
    /// Unlike a bad goal line, this fails the whole load.
    #[error("malformed profile header: {0}")]
    MalformedHeader(String),

    #[error("failed to read/write profile file: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read/write config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("cannot parse '{value}' as a value for '{key}'")]
    InvalidValue { key: String, value: String },
}
