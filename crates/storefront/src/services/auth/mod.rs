//! Session credential persistence.
//!
//! The commerce platform's auth flow hands back a [`Credential`]; the
//! storefront keeps it under one key of a [`KeyValueStore`] so the session
//! survives restarts.
//!
//! # Expiry Extension
//!
//! Every write pushes the expiry [`TOKEN_EXPIRY_EXTENSION_MS`] (ten days)
//! past the value the platform issued. The stored expiry is never the raw
//! input.
//!
//! # Failure Policy
//!
//! [`TokenService::read`] never fails: a missing entry, an unparsable entry or
//! an unreadable store all yield the zero-value [`Credential`].

use chrono::{DateTime, Utc};

use gadgetry_core::Credential;

use crate::storage::{KeyValueStore, StorageError};

/// Default storage key for the session credential.
pub const DEFAULT_TOKEN_KEY: &str = "commerce-token";

/// Ten days in milliseconds, added to every stored expiry.
pub const TOKEN_EXPIRY_EXTENSION_MS: i64 = 864_000_000;

/// Persists one session credential in a key-value store.
#[derive(Debug, Clone)]
pub struct TokenService<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TokenService<S> {
    /// Create a token service using [`DEFAULT_TOKEN_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_TOKEN_KEY)
    }

    /// Create a token service storing the credential under `key`.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored credential, or the zero value if there is none.
    #[must_use]
    pub fn read(&self) -> Credential {
        let json = match self.store.get(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => return Credential::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read stored credential");
                return Credential::default();
            }
        };

        serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "Discarding malformed stored credential");
            Credential::default()
        })
    }

    /// Store `credential`, extending its expiry by ten days.
    ///
    /// Replaces any previously stored credential.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    pub fn write(&self, credential: &Credential) -> Result<(), StorageError> {
        let stored = Credential {
            expiration_time: credential
                .expiration_time
                .saturating_add(TOKEN_EXPIRY_EXTENSION_MS),
            ..credential.clone()
        };
        let json = serde_json::to_string(&stored)?;
        self.store.set(&self.key, &json)?;

        tracing::debug!(
            key = %self.key,
            expiration_time = stored.expiration_time,
            "Stored session credential"
        );
        Ok(())
    }

    /// Remove the stored credential.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        tracing::debug!(key = %self.key, "Cleared session credential");
        Ok(())
    }

    /// Whether the stored credential is missing or expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.read().is_expired_at(now)
    }

    /// Whether the stored credential is expired but can be refreshed.
    #[must_use]
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        let credential = self.read();
        credential.is_expired_at(now) && credential.has_refresh_token()
    }
}
