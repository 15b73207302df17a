//! Commerce platform session credential.
//!
//! The credential is the token set the platform's auth flow hands back:
//! an access token, its expiry in epoch milliseconds and a refresh token.
//! It is persisted as JSON with exactly three fields:
//!
//! ```json
//! {"token":"...","expirationTime":1700000000000,"refreshToken":"..."}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authentication credential.
///
/// `Default` is the zero value (`token: ""`, `expiration_time: 0`,
/// `refresh_token: ""`) that stands in for "no credential".
///
/// Implements `Debug` manually to redact both tokens.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Bearer access token.
    pub token: String,
    /// Expiry in milliseconds since the Unix epoch.
    pub expiration_time: i64,
    /// Token used to obtain a fresh access token.
    pub refresh_token: String,
}

impl Credential {
    /// Create a new credential.
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        expiration_time: i64,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            expiration_time,
            refresh_token: refresh_token.into(),
        }
    }

    /// Whether this is the zero value (no access token).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// Whether a refresh token is available.
    #[must_use]
    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    /// Expiry as a timestamp, if it is in chrono's representable range.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expiration_time)
    }

    /// Whether the credential is unusable at `now`.
    ///
    /// An empty credential is always expired.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.is_empty() || self.expiration_time <= now.timestamp_millis()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .field("expiration_time", &self.expiration_time)
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}
