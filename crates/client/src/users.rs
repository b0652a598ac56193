//! User endpoints: current profile and search.

use serde::Deserialize;

use spliteasy_shared::AppResult;
use spliteasy_shared::types::{Page, PageRequest, UserId};

use crate::ApiClient;
use crate::response::{parse_envelope, parse_json, transport};

/// The signed-in user's profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// User id.
    pub id: UserId,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// A user as returned by search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

impl ApiClient {
    /// `GET /api/v1/users/me` — the signed-in user's profile.
    pub async fn me(&self) -> AppResult<Profile> {
        let response = self
            .http
            .get(self.url("/api/v1/users/me"))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        parse_envelope(response).await
    }

    /// `GET /api/v1/users/search` — paged user search by name or email.
    ///
    /// Unlike most list endpoints this one answers with a bare page, no
    /// envelope.
    pub async fn search_users(
        &self,
        query: &str,
        page: PageRequest,
    ) -> AppResult<Page<UserSummary>> {
        let response = self
            .http
            .get(self.url("/api/v1/users/search"))
            .query(&[
                ("q", query.to_string()),
                ("page", page.page.to_string()),
                ("size", page.size.to_string()),
            ])
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        parse_json(response).await
    }
}
