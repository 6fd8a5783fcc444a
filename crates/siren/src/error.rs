//! Error types for Siren decoding.
//!
//! Validation problems are not errors in this sense: they are collected as
//! data in each node's [`Ledger`](crate::validate::Ledger). Only documents
//! that cannot be turned into a tree at all produce a [`DecodeError`].

use thiserror::Error;

/// Error classes for decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input is not parsable JSON
    InvalidJson,
    /// E002: A node that must be an object is not
    MalformedDocument,
    /// E003: A decode limit was exceeded
    LimitExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "E001",
            ErrorCode::MalformedDocument => "E002",
            ErrorCode::LimitExceeded => "E003",
        }
    }
}

/// Error during document decoding.
///
/// Paths are JSON-pointer style locations of the offending member,
/// e.g. `/entities/0/actions/1`. The root is the empty string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E001: Invalid JSON ===
    #[error("[E001] invalid JSON: {0}")]
    Json(String),

    // === E002: Malformed document ===
    #[error("[E002] expected an object at '{path}'")]
    ExpectedObject { path: String },

    // === E003: Limits ===
    #[error("[E003] nesting depth exceeds maximum {max} at '{path}'")]
    DepthExceeded { path: String, max: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::Json(_) => ErrorCode::InvalidJson,
            DecodeError::ExpectedObject { .. } => ErrorCode::MalformedDocument,
            DecodeError::DepthExceeded { .. } => ErrorCode::LimitExceeded,
        }
    }

    /// Returns the document path the error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::Json(_) => None,
            DecodeError::ExpectedObject { path } | DecodeError::DepthExceeded { path, .. } => {
                Some(path)
            }
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err.to_string())
    }
}
