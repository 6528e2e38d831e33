//! Error types for sw-sql

use thiserror::Error;

/// SQL parsing and rewriting errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error (S001)
    #[error("[S001] SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL (S002)
    #[error("[S002] SQL is empty")]
    EmptySql,

    /// Unsupported SQL statement (S003)
    #[error("[S003] Unsupported SQL statement: {0}")]
    UnsupportedStatement(String),

    /// Token has no replacement rule (S004)
    #[error("[S004] No replacement rule for keyword '{0}'")]
    UnknownKey(String),

    /// Unknown dialect name (S005)
    #[error("[S005] Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
