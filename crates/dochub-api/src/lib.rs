//! # dochub-api
//!
//! HTTP transport layer for DocHub: Axum handlers, the shared
//! application state, the `AuthUser` extractor, and the mapping from
//! domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
