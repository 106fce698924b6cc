//! File status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication status of a file.
///
/// Only `Approved` files appear in the general listing. DocHub itself
/// creates files directly in `Approved` state; `Draft` exists for records
/// inserted by external tooling and must be tolerated everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "file_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Not yet approved; hidden from the general listing.
    Draft,
    /// Visible to every authenticated user.
    Approved,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Approved => write!(f, "approved"),
        }
    }
}
