use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::JobStatus;

/// A cleaning job posted by an employer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub hours_required: Option<f64>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub employer: Option<EntityId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    pub fn total_pay(&self) -> Option<f64> {
        match (self.hourly_rate, self.hours_required) {
            (Some(rate), Some(hours)) => Some(rate * hours),
            _ => None,
        }
    }
}

/// Create-mode form for the booking wizard and the employer dashboard.
///
/// The draft is the only place field requirements are enforced; validation
/// failures never reach the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub hours_required: Option<f64>,
    pub services: Vec<String>,
}

impl JobDraft {
    /// Required fields for advancing the wizard: title, description,
    /// location, date, time and at least one service.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Please enter a job title".into());
        }
        if self.description.trim().is_empty() {
            return Err("Please enter a job description".into());
        }
        if self.location.trim().is_empty() {
            return Err("Please enter a location".into());
        }
        if self.date.trim().is_empty() {
            return Err("Please select a date".into());
        }
        if self.time.trim().is_empty() {
            return Err("Please select a time".into());
        }
        if self.services.is_empty() {
            return Err("Please select at least one service".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> JobDraft {
        JobDraft {
            title: "Deep clean".into(),
            description: "Two-bedroom flat".into(),
            location: "Cambridge".into(),
            date: "2025-03-01".into(),
            time: "09:00".into(),
            services: vec!["deep-clean".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn test_each_required_field_enforced() {
        let mut draft = complete_draft();
        draft.title = "  ".into();
        assert!(draft.validate().is_err());

        let mut draft = complete_draft();
        draft.services.clear();
        assert!(draft.validate().is_err());

        let mut draft = complete_draft();
        draft.date.clear();
        assert!(draft.validate().is_err());
    }
}
