//! Team member data models

use serde::{Deserialize, Serialize};

/// Team member (a GitHub user) as returned by the API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub login: String,
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub site_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_member() {
        let json = r#"{
            "login": "octocat",
            "id": 1,
            "node_id": "MDQ6VXNlcjE=",
            "avatar_url": "https://github.com/images/error/octocat_happy.gif",
            "type": "User",
            "site_admin": false
        }"#;

        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.login, "octocat");
        assert_eq!(member.id, Some(1));
        assert_eq!(member.account_type.as_deref(), Some("User"));
        assert_eq!(member.site_admin, Some(false));
    }

    #[test]
    fn test_deserialize_login_only() {
        let member: Member = serde_json::from_str(r#"{"login":"alice"}"#).unwrap();
        assert_eq!(member.login, "alice");
        assert!(member.id.is_none());
    }

    #[test]
    fn test_member_without_login_is_rejected() {
        assert!(serde_json::from_str::<Member>(r#"{"id":3}"#).is_err());
    }
}
