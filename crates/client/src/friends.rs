//! Friend endpoints: listing and friend requests.

use serde::{Deserialize, Serialize};

use spliteasy_shared::AppResult;
use spliteasy_shared::types::UserId;

use crate::ApiClient;
use crate::response::{expect_success, parse_json, transport};

/// A confirmed friend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// The friend's user id.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Avatar URL, if the friend set one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Body of `POST /api/v1/friends/requests`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FriendRequestBody {
    to_user_id: UserId,
}

impl ApiClient {
    /// `GET /api/v1/friends` — the signed-in user's friends.
    ///
    /// This endpoint answers with a bare JSON array, no envelope.
    pub async fn friends(&self) -> AppResult<Vec<Friend>> {
        let response = self
            .http
            .get(self.url("/api/v1/friends"))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        parse_json(response).await
    }

    /// `POST /api/v1/friends/requests` — sends a friend request.
    pub async fn send_friend_request(&self, to: UserId) -> AppResult<()> {
        let response = self
            .http
            .post(self.url("/api/v1/friends/requests"))
            .bearer_auth(self.bearer()?)
            .json(&FriendRequestBody { to_user_id: to })
            .send()
            .await
            .map_err(transport)?;

        expect_success(response).await
    }
}
