//! # Identity models for the signed-in user
//!
//! Two representations of the user travel through the client:
//!
//! | Type | Where it comes from | Guarantees |
//! |------|--------------------|-----------|
//! | [`UserPayload`] | the `/auth/login` response body, or the `user` entry in persisted storage | none: every field may be missing |
//! | [`Profile`] | [`UserPayload::into_profile`] | `id`, a non-empty `username` and a known [`Role`] are present |
//!
//! Only a [`Profile`] can enter a [`crate::Session`], so a half-populated user
//! object from a misbehaving backend or a hand-edited `localStorage` never
//! counts as signed in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access role assigned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// Validated identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// User object as received, before validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserPayload {
    /// Whether the payload carries a role at all.
    pub fn has_role(&self) -> bool {
        self.role.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Validate into a [`Profile`]. Returns `None` when `id`, `username` or a
    /// recognised `role` is missing.
    pub fn into_profile(self) -> Option<Profile> {
        let id = self.id?;
        let username = self.username.filter(|u| !u.is_empty())?;
        let role = self.role?.parse::<Role>().ok()?;
        Some(Profile {
            id,
            username,
            email: self.email.unwrap_or_default(),
            role,
        })
    }
}

impl From<Profile> for UserPayload {
    fn from(profile: Profile) -> Self {
        Self {
            id: Some(profile.id),
            username: Some(profile.username),
            email: Some(profile.email),
            role: Some(profile.role.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> UserPayload {
        UserPayload {
            id: Some(7),
            username: Some("budi".to_string()),
            email: Some("budi@example.com".to_string()),
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert!("Admin".parse::<Role>().is_err());
        assert!("editor".parse::<Role>().is_err());
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_into_profile() {
        let profile = payload().into_profile().unwrap();
        assert_eq!(profile.id, 7);
        assert_eq!(profile.username, "budi");
        assert_eq!(profile.role, Role::Admin);
        assert!(profile.is_admin());
    }

    #[test]
    fn test_into_profile_rejects_incomplete() {
        let mut missing_role = payload();
        missing_role.role = None;
        assert!(!missing_role.has_role());
        assert!(missing_role.into_profile().is_none());

        let mut unknown_role = payload();
        unknown_role.role = Some("superuser".to_string());
        assert!(unknown_role.into_profile().is_none());

        let mut missing_id = payload();
        missing_id.id = None;
        assert!(missing_id.into_profile().is_none());

        let mut empty_name = payload();
        empty_name.username = Some(String::new());
        assert!(empty_name.into_profile().is_none());
    }

    #[test]
    fn test_missing_email_defaults_to_empty() {
        let mut no_email = payload();
        no_email.email = None;
        assert_eq!(no_email.into_profile().unwrap().email, "");
    }

    #[test]
    fn test_profile_json_shape() {
        let profile = payload().into_profile().unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "username": "budi",
                "email": "budi@example.com",
                "role": "admin"
            })
        );
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let parsed: UserPayload = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(parsed.id, Some(3));
        assert!(parsed.username.is_none());
        assert!(!parsed.has_role());
    }
}
