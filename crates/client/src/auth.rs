//! Session endpoints: sign in, register, sign out.
//!
//! The token that comes back is stored verbatim; refresh and expiry are the
//! server's business.

use serde::{Deserialize, Serialize};
use tracing::info;

use spliteasy_shared::{AppError, AppResult};

use crate::ApiClient;
use crate::response::{parse_json, transport};
use crate::token::TokenStore;

/// Body of `POST /api/v1/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Self-reported gender, as the registration form offers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other / undisclosed.
    Other,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Body of `POST /api/v1/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Self-reported gender.
    pub gender: Gender,
}

/// What the auth endpoints answer: a token on success, a message otherwise.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    jwt: Option<String>,
    message: Option<String>,
}

impl ApiClient {
    /// `POST /api/v1/auth/login` — signs in and stores the session token.
    ///
    /// # Errors
    ///
    /// `AppError::Unauthorized` on bad credentials; transport or store
    /// errors otherwise.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/v1/auth/login"))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        self.store_session(parse_json(response).await?)
    }

    /// `POST /api/v1/auth/register` — creates an account and stores the
    /// session token the backend hands back.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        let response = self
            .http
            .post(self.url("/api/v1/auth/register"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        self.store_session(parse_json(response).await?)
    }

    /// Drops the local session token. The server-side token is left to
    /// expire on its own.
    pub fn logout(&self) -> AppResult<()> {
        self.tokens.clear()
    }

    fn store_session(&self, auth: AuthResponse) -> AppResult<()> {
        let Some(jwt) = auth.jwt else {
            return Err(AppError::Unauthorized(
                auth.message
                    .unwrap_or_else(|| "Invalid credentials".to_string()),
            ));
        };
        self.tokens.set(&jwt)?;
        info!("session token stored");
        Ok(())
    }
}
