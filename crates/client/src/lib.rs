//! Authenticated REST client for the Split Easy backend.
//!
//! One `ApiClient` owns the HTTP connection pool, the backend base URL, and
//! the session token store. Endpoint families live in their own modules:
//!
//! - `auth` - sign in, register, sign out
//! - `users` - current profile and user search
//! - `friends` - friend list and friend requests
//! - `groups` - group list and detail
//! - `expenses` - expense creation, listing, detail, deletion
//!
//! The client performs no retries and no token refresh: a request either
//! succeeds or surfaces a typed [`AppError`](spliteasy_shared::AppError).

pub mod auth;
pub mod expenses;
pub mod friends;
pub mod groups;
pub mod response;
pub mod token;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use spliteasy_shared::config::ApiConfig;
use spliteasy_shared::{AppError, AppResult};

use token::TokenStore;

/// Authenticated client for the backend REST API.
///
/// Cheap to clone; clones share the connection pool and the token store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Creates a client from configuration and a token store.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Returns true if a session token is cached locally.
    ///
    /// Says nothing about whether the server still accepts it.
    pub fn has_session(&self) -> AppResult<bool> {
        Ok(self.tokens.get()?.is_some())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Returns the stored session token, or an auth error telling the user
    /// to sign in first.
    pub(crate) fn bearer(&self) -> AppResult<String> {
        self.tokens
            .get()?
            .ok_or_else(|| AppError::Unauthorized("no session token, sign in first".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    fn client(store: Arc<MemoryTokenStore>) -> ApiClient {
        let config = ApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 5,
        };
        ApiClient::new(&config, store).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = client(Arc::new(MemoryTokenStore::default()));
        assert_eq!(
            api.url("/api/v1/users/me"),
            "http://localhost:8080/api/v1/users/me"
        );
    }

    #[test]
    fn test_bearer_requires_session() {
        let store = Arc::new(MemoryTokenStore::default());
        let api = client(store.clone());
        assert!(!api.has_session().unwrap());
        assert!(api.bearer().is_err());

        store.set("jwt-token").unwrap();
        assert!(api.has_session().unwrap());
        assert_eq!(api.bearer().unwrap(), "jwt-token");
    }
}
