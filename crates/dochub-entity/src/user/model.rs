//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user, as provisioned by the external identity provider.
///
/// DocHub never authenticates users itself; this record exists so that
/// file listings can resolve an author id to a display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display/login name.
    pub username: String,
    /// Role granted by the identity provider.
    pub role: UserRole,
    /// When the user record was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record.
    pub fn new(username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            role,
            created_at: Utc::now(),
        }
    }
}
