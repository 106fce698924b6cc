//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use dochub_core::config::auth::AuthConfig;
use dochub_core::error::AppError;
use dochub_entity::user::UserRole;

use super::claims::Claims;

/// Creates signed JWT access tokens.
///
/// In production the identity provider mints tokens; this encoder exists
/// for test harnesses and local tooling that need tokens signed with the
/// shared secret.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in seconds.
    token_expiry_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_expiry_seconds", &self.token_expiry_seconds)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_expiry_seconds: config.token_expiry_seconds as i64,
        }
    }

    /// Generates a signed access token for the given user.
    pub fn issue_access_token(
        &self,
        user_id: Uuid,
        role: &UserRole,
        username: &str,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role: *role,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::seconds(self.token_expiry_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(
                dochub_core::error::ErrorKind::Internal,
                format!("Failed to sign token: {e}"),
                e,
            ))
    }
}
