//! # Session models
//!
//! Defines the data persisted in browser storage between page loads. These
//! types are `Serialize + Deserialize` so they can be written to storage as
//! JSON and read back from API responses without conversion.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The signed-in user as returned by the auth endpoints: id, username, role, and optional profile image and bio. |
//! | [`Session`] | A bearer token paired with its [`UserInfo`]. Always stored and cleared as a unit by [`crate::SessionStore`]. |

use serde::{Deserialize, Deserializer, Serialize};

/// Role assigned to regular accounts when the server omits one.
pub const DEFAULT_ROLE: &str = "user";

/// Deserialize `null` as `T::default()`; for use with `#[serde(default)]`.
///
/// The backend sends `null` for unset strings and arrays.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pick the document id. Documents may carry `_id`, `id`, or both.
pub fn document_id(mongo_id: Option<String>, id: Option<String>) -> Result<String, String> {
    mongo_id
        .or(id)
        .ok_or_else(|| "missing field `_id`".to_string())
}

/// User information returned by the auth and profile endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserWire")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWire {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    username: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    profile_image: Option<String>,
    #[serde(default)]
    bio: Option<String>,
}

impl TryFrom<UserWire> for UserInfo {
    type Error = String;

    fn try_from(wire: UserWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document_id(wire.mongo_id, wire.id)?,
            username: wire.username,
            role: wire.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            profile_image: wire.profile_image,
            bio: wire.bio,
        })
    }
}

impl UserInfo {
    /// Username for display, falling back to "User" when the server sent none.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            "User"
        } else {
            &self.username
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// An authenticated session: the bearer token and the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_api_json() {
        let user: UserInfo = serde_json::from_str(
            r#"{"_id":"u1","username":"mei","profileImage":"https://img/x.png"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, "user");
        assert_eq!(user.profile_image.as_deref(), Some("https://img/x.png"));
        assert!(user.bio.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_user_with_both_id_keys_and_nulls() {
        let user: UserInfo = serde_json::from_str(
            r#"{"_id":"u1","id":"u1","username":null,"role":null,"bio":null}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name(), "User");
        assert_eq!(user.role, DEFAULT_ROLE);
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_user_without_id_is_rejected() {
        assert!(serde_json::from_str::<UserInfo>(r#"{"username":"mei"}"#).is_err());
    }

    #[test]
    fn test_stored_user_reads_back() {
        let user: UserInfo = serde_json::from_str(r#"{"_id":"u3","username":"kai"}"#).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(serde_json::from_str::<UserInfo>(&json).unwrap(), user);
    }

    #[test]
    fn test_display_name_fallback() {
        let user: UserInfo = serde_json::from_str(r#"{"id":"u2","role":"admin"}"#).unwrap();
        assert_eq!(user.display_name(), "User");
        assert!(user.is_admin());
    }
}
