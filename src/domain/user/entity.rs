use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::timestamps;

/// A backend account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub nom_complet: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub pays: Option<String>,
    #[serde(default)]
    pub ville: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub contributions_count: i64,
    #[serde(default, deserialize_with = "timestamps::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn display_name(&self) -> &str {
        self.nom_complet
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Admin flag or admin role
    pub fn has_admin_rights(&self) -> bool {
        self.is_admin || self.role == Some(UserRole::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Explorateur,
    Contributeur,
    Gardien,
    Admin,
}

/// Offline profile created on the device when the backend is unreachable
/// or the visitor does not want an account. Carries no credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalProfile {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub nom_complet: Option<String>,
    pub kind: LocalProfileKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalProfileKind {
    /// Resident sharing their own culture
    Local,
    /// Visitor
    Touriste,
}

impl LocalProfile {
    pub fn new(username: String, kind: LocalProfileKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email: None,
            nom_complet: None,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_complet: Option<String>,
}

/// Self-service profile edit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_complet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
}

/// Admin-side account edit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut user: User = serde_json::from_value(serde_json::json!({
            "id": 1, "email": "a@b.ci", "username": "gardien"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "gardien");

        user.nom_complet = Some("Konan Bertille".to_string());
        assert_eq!(user.display_name(), "Konan Bertille");
    }

    #[test]
    fn test_admin_role_grants_rights() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 2, "email": "x@y.ci", "username": "root", "role": "admin"
        }))
        .unwrap();
        assert!(!user.is_admin);
        assert!(user.has_admin_rights());
    }
}
