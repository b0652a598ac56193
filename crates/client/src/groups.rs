//! Group endpoints: listing and detail.

use serde::Deserialize;

use spliteasy_shared::AppResult;
use spliteasy_shared::types::{GroupId, UserId};

use crate::ApiClient;
use crate::response::{parse_envelope, transport};

/// An expense group.
///
/// The list endpoint omits `members`; the detail endpoint fills it in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group id.
    pub id: GroupId,
    /// Group display name.
    pub group_name: String,
    /// Group members, empty when not expanded by the endpoint.
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// A member of a group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// The member's user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

impl Group {
    /// Ids of all members, in the order the backend lists them — the order
    /// that decides who absorbs a split's remainder cent.
    #[must_use]
    pub fn member_ids(&self) -> Vec<UserId> {
        self.members.iter().map(|m| m.id).collect()
    }
}

impl ApiClient {
    /// `GET /api/v1/groups` — the signed-in user's groups.
    pub async fn groups(&self) -> AppResult<Vec<Group>> {
        let response = self
            .http
            .get(self.url("/api/v1/groups"))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        parse_envelope(response).await
    }

    /// `GET /api/v1/groups/{id}` — group detail including members.
    pub async fn group(&self, id: GroupId) -> AppResult<Group> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/groups/{id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        parse_envelope(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Envelope;

    #[test]
    fn test_group_list_parses_without_members() {
        let json = r#"{"success": true, "data": [
            {"id": 5, "groupName": "Ski Trip"},
            {"id": 6, "groupName": "Flatmates"}
        ]}"#;
        let envelope: Envelope<Vec<Group>> = serde_json::from_str(json).unwrap();
        let groups = envelope.data.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, GroupId::from_raw(5));
        assert!(groups[0].members.is_empty());
    }

    #[test]
    fn test_group_detail_parses_members_in_order() {
        let json = r#"{"success": true, "data": {
            "id": 5,
            "groupName": "Ski Trip",
            "members": [
                {"id": 3, "name": "Alan", "email": "alan@example.com"},
                {"id": 7, "name": "Grace", "email": "grace@example.com"}
            ]
        }}"#;
        let envelope: Envelope<Group> = serde_json::from_str(json).unwrap();
        let group = envelope.data.unwrap();
        assert_eq!(
            group.member_ids(),
            vec![UserId::from_raw(3), UserId::from_raw(7)]
        );
    }
}
