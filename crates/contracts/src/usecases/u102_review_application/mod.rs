//! Employer review of incoming applications: accept or reject, once,
//! with one outstanding request per application row.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::common::EntityId;
use crate::enums::BookingStatus;
use crate::usecases::common::UseCaseError;

/// The two terminal transitions out of `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "decision")]
pub enum Decision {
    Accept,
    /// Optional free-text reason, sent as `{reason}`.
    Reject { reason: String },
}

impl Decision {
    pub fn endpoint_suffix(&self) -> &'static str {
        match self {
            Decision::Accept => "accept",
            Decision::Reject { .. } => "reject",
        }
    }
}

/// Per-row in-flight guard: each application id has at most one
/// outstanding accept/reject request.
#[derive(Debug, Clone, Default)]
pub struct ReviewLocks {
    in_flight: HashSet<EntityId>,
}

impl ReviewLocks {
    pub fn is_busy(&self, application_id: EntityId) -> bool {
        self.in_flight.contains(&application_id)
    }

    /// Validate and lock a decision for a row. Only pending applications
    /// can be decided; a busy row refuses a second request.
    pub fn begin(
        &mut self,
        application_id: EntityId,
        status: &BookingStatus,
    ) -> Result<(), UseCaseError> {
        if !status.is_pending() {
            return Err(UseCaseError::validation(format!(
                "Application is already {}",
                status.display_name().to_lowercase()
            )));
        }
        if !self.in_flight.insert(application_id) {
            return Err(UseCaseError::validation("Decision already in progress"));
        }
        Ok(())
    }

    pub fn finish(&mut self, application_id: EntityId) {
        self.in_flight.remove(&application_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_rows_decidable() {
        let mut locks = ReviewLocks::default();
        assert!(locks.begin(1, &BookingStatus::Pending).is_ok());
        assert!(locks.begin(2, &BookingStatus::Accepted).is_err());
        assert!(locks.begin(3, &BookingStatus::Rejected).is_err());
    }

    #[test]
    fn test_one_outstanding_request_per_row() {
        let mut locks = ReviewLocks::default();
        locks.begin(1, &BookingStatus::Pending).unwrap();
        assert!(locks.begin(1, &BookingStatus::Pending).is_err());
        // other rows unaffected
        assert!(locks.begin(2, &BookingStatus::Pending).is_ok());

        locks.finish(1);
        assert!(!locks.is_busy(1));
        assert!(locks.begin(1, &BookingStatus::Pending).is_ok());
    }

    #[test]
    fn test_reject_carries_reason() {
        let decision = Decision::Reject {
            reason: "Position filled".into(),
        };
        assert_eq!(decision.endpoint_suffix(), "reject");
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["reason"], "Position filled");
    }
}
