//! Repository traits and their PostgreSQL implementations.
//!
//! Each entity gets a trait so services depend on behavior, not on a
//! backend. PostgreSQL implementations live next to the traits; the
//! single-node in-memory implementations are in [`crate::memory`].

pub mod edit;
pub mod file;
pub mod notification;
pub mod user;

pub use edit::EditRepository;
pub use file::FileRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
