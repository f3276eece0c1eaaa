//! Error types for stackdash.
//!
//! This module defines the centralized error type [`StackdashError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for stackdash operations.
///
/// This enum consolidates all error conditions that can occur while loading
/// the service catalog, themes, and configuration. Most query-layer
/// operations are total and never return these; the variants cover the
/// boundaries where external input enters the process.
///
/// # Examples
///
/// ```
/// use stackdash::domain::StackdashError;
///
/// fn validate_dataset(raw: &str) -> Result<(), StackdashError> {
///     if raw.is_empty() {
///         return Err(StackdashError::Data("empty dataset".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum StackdashError {
    /// Catalog dataset could not be parsed or failed an invariant.
    ///
    /// Occurs when the bundled or user-supplied services JSON is malformed,
    /// or when a loaded collection violates a catalog invariant (duplicate
    /// identifiers, out-of-range tier or score).
    #[error("Data error: {0}")]
    Data(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for stackdash operations.
///
/// This is a type alias for `std::result::Result<T, StackdashError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, StackdashError>;
