//! # Terminal Error Type
//!
//! Unified error type for the terminal binary.
//!
//! Domain errors from kassa-core are all recoverable and are handled
//! inside the session loop (shown to the customer, session continues).
//! Only startup and I/O failures bubble up to `main`.

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal terminal errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Console or receipt-log I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
