//! Structured error bodies from the gateway.
//!
//! Mutating endpoints answer failures with `{"detail": ...}`,
//! `{"error": ...}` or a field-validation map such as
//! `{"title": ["This field is required."]}`. All three shapes funnel into
//! one user-facing message.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Everything else: field name -> message or list of messages.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ApiErrorBody {
    /// Best-effort parse; a non-JSON body yields an empty error.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// First usable message: `detail`, then `error`, then the first field
    /// validation message prefixed with its field name.
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = self.detail.as_deref().filter(|s| !s.is_empty()) {
            return Some(detail.to_string());
        }
        if let Some(error) = self.error.as_deref().filter(|s| !s.is_empty()) {
            return Some(error.to_string());
        }
        self.fields.iter().find_map(|(field, value)| {
            let text = match value {
                Value::String(message) => Some(message.clone()),
                Value::Array(messages) => messages
                    .first()
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string()),
                _ => None,
            }?;
            Some(format!("{}: {}", field, text))
        })
    }

    /// Duplicate-booking and already-applied rejections come back as plain
    /// conflict texts rather than a status code the client can rely on.
    pub fn is_conflict(&self) -> bool {
        message_is_conflict(&self.message().unwrap_or_default())
    }
}

/// Same conflict test over an already-rendered message, for callers that
/// no longer hold the parsed body.
pub fn message_is_conflict(message: &str) -> bool {
    let text = message.to_lowercase();
    text.contains("already booked")
        || text.contains("already applied")
        || text.contains("already exists")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_shape() {
        let body = ApiErrorBody::parse(r#"{"detail":"Not found."}"#);
        assert_eq!(body.message(), Some("Not found.".to_string()));
    }

    #[test]
    fn test_error_shape() {
        let body = ApiErrorBody::parse(r#"{"error":"Failed to book cleaner"}"#);
        assert_eq!(body.message(), Some("Failed to book cleaner".to_string()));
    }

    #[test]
    fn test_field_validation_shape() {
        let body = ApiErrorBody::parse(r#"{"title":["This field is required."]}"#);
        assert_eq!(
            body.message(),
            Some("title: This field is required.".to_string())
        );
    }

    #[test]
    fn test_non_json_body() {
        let body = ApiErrorBody::parse("<html>502</html>");
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_conflict_detection() {
        let body = ApiErrorBody::parse(r#"{"detail":"Cleaner already booked for this job"}"#);
        assert!(body.is_conflict());
        assert!(!ApiErrorBody::parse(r#"{"detail":"Server error"}"#).is_conflict());
    }
}
