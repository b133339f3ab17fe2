use serde::{Deserialize, Serialize};

/// Marketplace participant role carried on the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Cleaner,
    Employer,
    Admin,
    Unknown(String),
}

impl UserRole {
    pub fn code(&self) -> &str {
        match self {
            UserRole::Cleaner => "cleaner",
            UserRole::Employer => "employer",
            UserRole::Admin => "admin",
            UserRole::Unknown(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "cleaner" => UserRole::Cleaner,
            "employer" => UserRole::Employer,
            "admin" => UserRole::Admin,
            other => UserRole::Unknown(other.to_string()),
        }
    }

    pub fn is_employer(&self) -> bool {
        matches!(self, UserRole::Employer)
    }

    pub fn is_cleaner(&self) -> bool {
        matches!(self, UserRole::Cleaner)
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from_code(&s)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_parse() {
        assert_eq!(UserRole::from_code("Employer"), UserRole::Employer);
        assert_eq!(UserRole::from_code("CLEANER"), UserRole::Cleaner);
        assert_eq!(
            UserRole::from_code("manager"),
            UserRole::Unknown("manager".to_string())
        );
    }
}
