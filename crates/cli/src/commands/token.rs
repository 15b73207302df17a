//! Session credential commands.
//!
//! # Usage
//!
//! ```bash
//! gadgetry token set -t <access> -r <refresh> --expires-at 1700000000000
//! gadgetry token status
//! gadgetry token clear
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_STORAGE_PATH` - Storage file holding the credential
//! - `STOREFRONT_TOKEN_KEY` - Key the credential is stored under

use chrono::{DateTime, Utc};
use serde::Serialize;

use gadgetry_core::Credential;
use gadgetry_storefront::error::{AppError, Result};
use gadgetry_storefront::services::auth::TokenService;
use gadgetry_storefront::storage::KeyValueStore;

/// Expiry as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// Absolute expiry in epoch milliseconds.
    At(i64),
    /// Seconds from now.
    In(i64),
}

impl Expiration {
    /// Build from the mutually exclusive `--expires-at` / `--expires-in` flags.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` unless exactly one flag is given.
    pub fn from_args(expires_at: Option<i64>, expires_in: Option<i64>) -> Result<Self> {
        match (expires_at, expires_in) {
            (Some(millis), None) => Ok(Self::At(millis)),
            (None, Some(seconds)) => Ok(Self::In(seconds)),
            _ => Err(AppError::BadRequest(
                "exactly one of --expires-at or --expires-in is required".to_string(),
            )),
        }
    }

    /// Expiry in epoch milliseconds relative to `now`.
    #[must_use]
    pub fn to_epoch_millis(self, now: DateTime<Utc>) -> i64 {
        match self {
            Self::At(millis) => millis,
            Self::In(seconds) => now
                .timestamp_millis()
                .saturating_add(seconds.saturating_mul(1000)),
        }
    }
}

/// Summary of the stored credential without its secrets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatus {
    pub key: String,
    pub present: bool,
    pub expiration_time: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
    pub needs_refresh: bool,
}

/// The stored credential, or the zero value.
pub fn show<S: KeyValueStore>(tokens: &TokenService<S>) -> Credential {
    tokens.read()
}

/// Expiry and refresh status of the stored credential at `now`.
pub fn status<S: KeyValueStore>(tokens: &TokenService<S>, now: DateTime<Utc>) -> TokenStatus {
    let credential = tokens.read();
    let expired = credential.is_expired_at(now);

    TokenStatus {
        key: tokens.key().to_string(),
        present: !credential.is_empty(),
        expiration_time: credential.expiration_time,
        expires_at: credential.expires_at().filter(|_| !credential.is_empty()),
        expired,
        needs_refresh: expired && credential.has_refresh_token(),
    }
}

/// Store a credential and report the resulting status.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the token is empty and
/// `AppError::Storage` if the credential cannot be written.
pub fn set<S: KeyValueStore>(
    tokens: &TokenService<S>,
    token: String,
    refresh_token: String,
    expiration: Expiration,
    now: DateTime<Utc>,
) -> Result<TokenStatus> {
    if token.is_empty() {
        return Err(AppError::BadRequest("token must not be empty".to_string()));
    }

    let credential = Credential {
        token,
        expiration_time: expiration.to_epoch_millis(now),
        refresh_token,
    };
    tokens.write(&credential)?;

    tracing::info!(key = %tokens.key(), "Session credential stored");
    Ok(status(tokens, now))
}

/// Remove the stored credential.
///
/// # Errors
///
/// Returns `AppError::Storage` if the store cannot be written.
pub fn clear<S: KeyValueStore>(tokens: &TokenService<S>) -> Result<()> {
    tokens.clear()?;
    tracing::info!(key = %tokens.key(), "Session credential cleared");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gadgetry_storefront::services::auth::TOKEN_EXPIRY_EXTENSION_MS;
    use gadgetry_storefront::storage::MemoryStore;

    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_expiration_from_args() {
        assert_eq!(Expiration::from_args(Some(5), None).unwrap(), Expiration::At(5));
        assert_eq!(Expiration::from_args(None, Some(60)).unwrap(), Expiration::In(60));
        assert!(Expiration::from_args(None, None).is_err());
        assert!(Expiration::from_args(Some(5), Some(60)).is_err());
    }

    #[test]
    fn test_expires_in_is_relative_to_now() {
        assert_eq!(Expiration::In(60).to_epoch_millis(at(1_000)), 61_000);
        assert_eq!(Expiration::At(7).to_epoch_millis(at(1_000)), 7);
    }

    #[test]
    fn test_status_of_empty_store() {
        let tokens = TokenService::new(MemoryStore::new());
        let status = status(&tokens, at(0));

        assert!(!status.present);
        assert!(status.expired);
        assert!(!status.needs_refresh);
        assert!(status.expires_at.is_none());
    }

    #[test]
    fn test_set_then_status() {
        let tokens = TokenService::new(MemoryStore::new());
        let status = set(
            &tokens,
            "access".to_string(),
            "refresh".to_string(),
            Expiration::In(3600),
            at(0),
        )
        .unwrap();

        assert!(status.present);
        assert!(!status.expired);
        assert_eq!(status.expiration_time, 3_600_000 + TOKEN_EXPIRY_EXTENSION_MS);
        assert_eq!(show(&tokens).token, "access");
    }

    #[test]
    fn test_set_rejects_empty_token() {
        let tokens = TokenService::new(MemoryStore::new());
        let err = set(&tokens, String::new(), String::new(), Expiration::At(0), at(0)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_clear() {
        let tokens = TokenService::new(MemoryStore::new());
        set(&tokens, "a".to_string(), String::new(), Expiration::At(1), at(0)).unwrap();
        clear(&tokens).unwrap();
        assert_eq!(show(&tokens), Credential::default());
    }

    #[test]
    fn test_status_needs_refresh_after_extension() {
        let tokens = TokenService::new(MemoryStore::new());
        set(&tokens, "a".to_string(), "r".to_string(), Expiration::At(0), at(0)).unwrap();

        let later = status(&tokens, at(TOKEN_EXPIRY_EXTENSION_MS));
        assert!(later.expired);
        assert!(later.needs_refresh);
    }
}
