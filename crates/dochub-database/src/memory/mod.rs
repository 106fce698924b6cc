//! Single-node in-memory repository implementations.
//!
//! Backing store is a `DashMap` per entity, so every operation is one
//! atomic read-modify-write on the owning shard. Used by the test
//! harness and by `backend = "memory"` deployments.

pub mod edit;
pub mod file;
pub mod notification;
pub mod user;

pub use edit::MemoryEditRepository;
pub use file::MemoryFileRepository;
pub use notification::MemoryNotificationRepository;
pub use user::MemoryUserRepository;
