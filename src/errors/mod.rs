//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! The analytics, filtering and report functions never fail; everything here
//! belongs to the surrounding store, configuration and CLI layers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur when locking the entry store.
///
/// # Examples
///
/// ```
/// use moodlog::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/path/to/entries.json"),
/// };
///
/// assert!(format!("{}", error).contains("in use by another process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the store is already locked by another process.
    #[error("Entry store is in use by another process: {path}. Please wait for the other moodlog command to finish.")]
    StoreBusy {
        /// The path to the store that is locked
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock for entry store {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the store that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents specific error cases raised by the entry store.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StoreError;
///
/// let error = StoreError::EntryNotFound("abc123".to_string());
/// assert!(format!("{}", error).contains("abc123"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry carries the requested identifier.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Imported data is valid JSON but not a moodlog export.
    #[error("Invalid import data: {0}")]
    InvalidImport(String),

    /// An entry failed validation before being written.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Store path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Store path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in the store or an import file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by entry store operations.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to locking the store file.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),

    /// User input that could not be interpreted (e.g., invalid date formats).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::InvalidInput("bad date".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
