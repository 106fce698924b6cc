//! Notification record, a dependent of the file it references.

pub mod model;

pub use model::Notification;
