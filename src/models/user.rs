use std::fmt;

use serde::{Deserialize, Serialize};

use super::RecordId;
use super::lenient::null_as_default;

/// A console user as returned by `GET /api/admin/users`.
///
/// `id` addresses the record in mutation paths; `user_id` is the
/// human-facing identifier shown in the first column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl User {
    /// Only the literal `active` counts; anything else is offered "Activate".
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active.as_str()
    }

    /// Status the row's toggle button sets.
    pub fn toggled_status(&self) -> UserStatus {
        if self.is_active() {
            UserStatus::Inactive
        } else {
            UserStatus::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/admin/user/{id}/status`.
#[derive(Debug, Serialize)]
pub struct StatusUpdate {
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_status(status: &str) -> User {
        User {
            id: RecordId::new("1"),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn toggles_between_active_and_inactive() {
        assert_eq!(user_with_status("active").toggled_status(), UserStatus::Inactive);
        assert_eq!(user_with_status("inactive").toggled_status(), UserStatus::Active);
    }

    #[test]
    fn unknown_status_is_not_active() {
        let u = user_with_status("suspended");
        assert!(!u.is_active());
        assert_eq!(u.toggled_status(), UserStatus::Active);
    }

    #[test]
    fn null_and_missing_fields_read_as_empty() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id": null, "name": null, "status": "active"}, {"email": "b@clinic.test"}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id.as_str(), "");
        assert_eq!(users[0].name, "");
        assert!(users[0].is_active());
        assert_eq!(users[1].id.as_str(), "");
        assert_eq!(users[1].email, "b@clinic.test");
    }

    #[test]
    fn status_update_body_is_lowercase() {
        let body = serde_json::to_value(StatusUpdate { status: UserStatus::Inactive }).unwrap();
        assert_eq!(body, serde_json::json!({"status": "inactive"}));
    }
}
