use serde::{Deserialize, Serialize};

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Structured usecase failure.
///
/// Validation failures never reach the gateway, auth and role failures
/// are caught client-side when detectable, conflicts are a distinct
/// non-fatal outcome, and everything remote is external. Nothing here is
/// fatal; every error is recoverable by retrying the user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn auth_required(message: impl Into<String>) -> Self {
        Self::new("AUTH_REQUIRED", message)
    }

    pub fn role_not_permitted(message: impl Into<String>) -> Self {
        Self::new("ROLE_NOT_PERMITTED", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }

    pub fn is_conflict(&self) -> bool {
        self.code == "CONFLICT"
    }

    pub fn is_auth_required(&self) -> bool {
        self.code == "AUTH_REQUIRED"
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

impl From<anyhow::Error> for UseCaseError {
    fn from(err: anyhow::Error) -> Self {
        UseCaseError::external(err.to_string())
    }
}
