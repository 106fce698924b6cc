//! Result alias used across all DocHub crates.

use crate::error::AppError;

/// Shorthand for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
