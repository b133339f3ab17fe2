use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::BookingStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// 1..=5 as delivered by the gateway.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// A request linking a cleaner to a job. The gateway calls the same row a
/// "job application" on employer endpoints and a "booking" on cleaner
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: EntityId,
    pub job: EntityId,
    pub cleaner: EntityId,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub cleaner_confirmed: bool,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub review: Option<Review>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// A paid booking that was never confirmed is an upstream anomaly; the
    /// UI marks it instead of hiding it.
    pub fn paid_before_confirmed(&self) -> bool {
        self.paid_at.is_some() && !self.status.is_accepted() && !self.status.is_terminal()
    }

    pub fn key(&self) -> (EntityId, EntityId) {
        (self.job, self.cleaner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_pending_is_anomalous() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":1,"job":2,"cleaner":3,"status":"p","paid_at":"2025-01-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(booking.paid_before_confirmed());
    }

    #[test]
    fn test_paid_confirmed_is_normal() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":1,"job":2,"cleaner":3,"status":"cf","paid_at":"2025-01-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(!booking.paid_before_confirmed());
    }
}
