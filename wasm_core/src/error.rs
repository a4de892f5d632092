//! Error types shared by every tool.
//!
//! Nothing here is fatal: each error is produced at the user action that
//! triggered it and rendered inline (or as a notice) by the host page.

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

/// How the host page should surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Bad input or configuration; shown next to the offending control.
    Validation,
    /// A browser capability is missing; the action is disabled.
    Unavailable,
    /// The capability exists but refused the requested option.
    Unsupported,
    /// A one-off failure that leaves state untouched.
    Transient,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("{0}")]
    EmptyInput(&'static str),

    #[error("{0}")]
    InvalidJson(String),

    #[error("invalid URL encoding: {0}")]
    InvalidPercentEncoding(String),

    #[error("{0}")]
    InvalidOption(String),

    #[error("A secure random source is not available in this environment.")]
    RandomUnavailable,

    #[error("Hashing is not supported in this environment.")]
    DigestUnavailable,

    #[error("{0} is not supported by this browser. Choose another option.")]
    UnsupportedAlgorithm(String),

    #[error("Unable to compute hash: {0}")]
    Digest(String),

    #[error("Unable to copy: {0}")]
    Clipboard(String),
}

impl ToolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput(_)
            | Self::InvalidJson(_)
            | Self::InvalidPercentEncoding(_)
            | Self::InvalidOption(_) => ErrorKind::Validation,
            Self::RandomUnavailable | Self::DigestUnavailable => ErrorKind::Unavailable,
            Self::UnsupportedAlgorithm(_) => ErrorKind::Unsupported,
            Self::Digest(_) | Self::Clipboard(_) => ErrorKind::Transient,
        }
    }

    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::InvalidOption(message.into())
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// What a rejected export hands to JavaScript: `{ kind, message }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<ToolError> for JsValue {
    fn from(err: ToolError) -> Self {
        let payload = err.payload();
        serde_wasm_bindgen::to_value(&payload)
            .unwrap_or_else(|_| JsValue::from_str(&payload.message))
    }
}

/// Integrity failures found while building the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate tool slug: {0}")]
    DuplicateSlug(String),

    #[error("tool slug {0:?} must be lower-case kebab-case")]
    MalformedSlug(String),

    #[error("tool {0} is missing a name")]
    MissingName(String),

    #[error("tool {0} is missing a description")]
    MissingDescription(String),

    #[error("tool {0} must declare at least one tag")]
    MissingTags(String),

    #[error("registry is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedBounds {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("{field}: default {value} is outside {min}..={max}")]
    DefaultOutOfBounds {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{field} must be at least 1")]
    ZeroMinimum { field: &'static str },

    #[error("unknown log level {0:?}")]
    LogLevel(String),

    #[error("invalid configuration: {0}")]
    Decode(String),
}

/// Failures while bringing the toolbox up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("tool registry failed validation: {0}")]
    Registry(#[from] RegistryError),

    #[error("the toolbox is already initialized; call init before any other export")]
    AlreadyInitialized,
}
