//! Error types for sw-core

use thiserror::Error;

/// Configuration error type for sqlweave.
///
/// Every variant is fatal to startup: a model is either loaded completely or
/// not at all.
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: A configuration document parsed but holds an invalid value
    #[error("[C002] Invalid {document} config: {message}")]
    ConfigInvalid { document: String, message: String },

    /// C003: Two replacement rules declare the same key
    #[error("[C003] Duplicate replacement key '{key}'")]
    DuplicateKey { key: String },

    /// C004: A name that must be non-empty was empty
    #[error("[C004] Empty name: {context}")]
    EmptyName { context: String },

    /// C005: IO error with file path context
    #[error("[C005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// C006: Malformed JSON document
    #[error("[C006] JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// C007: Malformed YAML document
    #[error("[C007] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
