//! Unified error handling
//!
//! One error enum shared by the engine, the store implementations and the
//! check-in service. Every operation surfaces its error to the caller;
//! nothing in the workspace retries or recovers internally.
//!
//! # Error classification
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Validation` | ordering/date constraint violated, or unknown order |
//! | `NotFound` | the target record does not exist (e.g. service before arrival) |
//! | `Store` | persistence failure, opaque at this level |
//! | `Config` | invalid runtime configuration |
//! | `Internal` | broken invariant that should never surface |

use thiserror::Error;

/// Application error enum
#[derive(Debug, Error)]
pub enum AppError {
    // ========== Business logic errors ==========
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // ========== System errors ==========
    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a Store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
