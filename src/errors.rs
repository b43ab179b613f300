use thiserror::Error;

use crate::storage::StorageError;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent error handling.
/// Uses `thiserror` for automatic error conversion and display formatting.
///
/// # Example
///
/// ```no_run
/// use stashbot::errors::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {err}");
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Message store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Configuration errors (missing or invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
