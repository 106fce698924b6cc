//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl for `AppError` lives in `dochub-core` (next to
//! the type, as the orphan rule requires); this module re-exports the
//! response body type for API consumers.

pub use dochub_core::error::ApiErrorResponse;
