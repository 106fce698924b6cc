//! # dochub-service
//!
//! Business logic for DocHub. [`file::FileService`] owns the file
//! lifecycle (create, list, save, force update, delete) and enforces the
//! access policy and version ledger invariants per operation;
//! [`file::cascade::CascadeCoordinator`] removes dependent records before
//! a file is destroyed.

pub mod context;
pub mod file;

pub use context::RequestContext;
