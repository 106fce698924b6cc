//! Token verification configuration.

use serde::{Deserialize, Serialize};

/// Settings for decoding and issuing access tokens.
///
/// DocHub does not manage credentials itself; it only verifies tokens
/// minted by the identity provider that shares this secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the identity provider.
    pub jwt_secret: String,
    /// Access token lifetime in seconds (used when issuing test tokens).
    #[serde(default = "default_token_expiry")]
    pub token_expiry_seconds: u64,
}

fn default_token_expiry() -> u64 {
    3600
}
