use serde::{Deserialize, Serialize};

use crate::shared::domain::{EntityId, ImageRef};

/// The signed-in operator's profile as the login endpoint reports it. The
/// bearer token is deliberately not part of this record; it travels and
/// persists separately so the serialized profile never embeds a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// An authenticated session: the bearer token plus the profile it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_round_trips_wire_names() {
        let json = r#"{"_id":"u1","userName":"site.admin","email":"admin@macc.example","role":"admin"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, EntityId::from("u1"));
        assert_eq!(user.user_name, "site.admin");

        let back = serde_json::to_string(&user).unwrap();
        assert!(back.contains("\"userName\":\"site.admin\""));
        assert!(!back.contains("token"));
    }
}
