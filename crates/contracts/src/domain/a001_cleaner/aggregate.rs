use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::ExperienceBucket;

/// Account fields the gateway nests under `user` on some endpoints and
/// flattens on others. All fields are optional; the aggregate resolves the
/// ambiguity once so pages never branch on payload shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Name fallback chain: explicit name, first+last, email local part.
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.name.as_deref() {
            if !name.trim().is_empty() {
                return Some(name.trim().to_string());
            }
        }
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                return Some(format!("{} {}", first, last));
            }
            _ => {}
        }
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .map(|local| local.to_string())
    }
}

/// Worker-side marketplace participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cleaner {
    pub id: EntityId,

    /// Nested account record; absent when the endpoint flattens user
    /// fields onto the cleaner row itself.
    #[serde(default)]
    pub user: Option<UserProfile>,

    /// Flattened account fields, populated by the older endpoints.
    #[serde(flatten)]
    pub flat: UserProfile,

    #[serde(default)]
    pub years_experience: f64,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Cleaner {
    /// Resolved account record: the nested `user` object wins over the
    /// flattened fields.
    fn profile(&self) -> &UserProfile {
        self.user.as_ref().unwrap_or(&self.flat)
    }

    pub fn display_name(&self) -> String {
        self.profile()
            .display_name()
            .or_else(|| self.flat.display_name())
            .unwrap_or_else(|| "Cleaner".to_string())
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.profile().profile_picture.as_deref()
    }

    pub fn experience_bucket(&self) -> ExperienceBucket {
        ExperienceBucket::from_years(self.years_experience)
    }

    pub fn rating_label(&self) -> String {
        match self.average_rating {
            Some(rating) => format!("{:.1} ({} reviews)", rating, self.review_count),
            None => "No reviews yet".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallback_chain() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.display_name(), None);

        profile.email = Some("ana@example.com".to_string());
        assert_eq!(profile.display_name(), Some("ana".to_string()));

        profile.first_name = Some("Ana".to_string());
        profile.last_name = Some("Silva".to_string());
        assert_eq!(profile.display_name(), Some("Ana Silva".to_string()));

        profile.name = Some("A. Silva".to_string());
        assert_eq!(profile.display_name(), Some("A. Silva".to_string()));
    }

    #[test]
    fn test_nested_user_wins_over_flat() {
        let cleaner: Cleaner = serde_json::from_str(
            r#"{"id":3,"user":{"name":"Bo"},"name":"ignored","years_experience":6.0}"#,
        )
        .unwrap();
        assert_eq!(cleaner.display_name(), "Bo");
        assert_eq!(cleaner.experience_bucket(), ExperienceBucket::FiveToTen);
    }

    #[test]
    fn test_flat_shape_accepted() {
        let cleaner: Cleaner =
            serde_json::from_str(r#"{"id":4,"email":"joe@x.io","years_experience":0.5}"#).unwrap();
        assert_eq!(cleaner.display_name(), "joe");
        assert_eq!(cleaner.experience_bucket(), ExperienceBucket::EntryLevel);
    }
}
