//! File entity, status, and embedded version ledger.

pub mod model;
pub mod status;
pub mod version;

pub use model::{File, FileWithAuthor};
pub use status::FileStatus;
pub use version::FileVersion;
