//! File lifecycle services.

pub mod cascade;
pub mod service;

pub use cascade::CascadeCoordinator;
pub use service::FileService;
