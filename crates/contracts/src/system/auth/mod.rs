use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub role: UserRole,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "Account".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::UserRole;

    #[test]
    fn test_account_payload_extra_keys_ignored() {
        // The account endpoint embeds profile-table ids the client never
        // acts on; calls are keyed on directory and application ids and
        // the acting account comes from the bearer token.
        let info: UserInfo = serde_json::from_str(
            r#"{"id": 7, "email": "ana@example.com", "role": "cleaner",
                "cleaner_id": 42, "employer_id": null}"#,
        )
        .unwrap();
        assert_eq!(info.id, 7);
        assert_eq!(info.role, UserRole::Cleaner);
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        let info: UserInfo =
            serde_json::from_str(r#"{"id": 1, "email": "bo@example.com", "role": "employer"}"#)
                .unwrap();
        assert_eq!(info.display_name(), "bo");
    }
}
