use serde::{Deserialize, Serialize};

/// Booking / application status codes.
///
/// The gateway uses `a` and `cf` for the same logical state in different
/// views (application accept vs. booking confirm). Both readings are kept
/// as separate variants; `is_accepted` answers for either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Confirmed,
    Rejected,
    Completed,
    Unknown(String),
}

impl BookingStatus {
    pub fn code(&self) -> &str {
        match self {
            BookingStatus::Pending => "p",
            BookingStatus::Accepted => "a",
            BookingStatus::Confirmed => "cf",
            BookingStatus::Rejected => "r",
            BookingStatus::Completed => "cp",
            BookingStatus::Unknown(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Accepted => "Accepted",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Completed => "Completed",
            BookingStatus::Unknown(_) => "Other",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "p" | "pending" => BookingStatus::Pending,
            "a" | "accepted" => BookingStatus::Accepted,
            "cf" | "confirmed" => BookingStatus::Confirmed,
            "r" | "rejected" => BookingStatus::Rejected,
            "cp" | "completed" => BookingStatus::Completed,
            other => BookingStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, BookingStatus::Pending)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, BookingStatus::Accepted | BookingStatus::Confirmed)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Rejected | BookingStatus::Completed)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        BookingStatus::from_code(&s)
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_accepted_readings() {
        assert!(BookingStatus::from_code("a").is_accepted());
        assert!(BookingStatus::from_code("cf").is_accepted());
        assert_ne!(
            BookingStatus::from_code("a"),
            BookingStatus::from_code("cf")
        );
    }

    #[test]
    fn test_unknown_code_kept() {
        let status = BookingStatus::from_code("zz");
        assert_eq!(status, BookingStatus::Unknown("zz".to_string()));
        assert_eq!(status.display_name(), "Other");
    }
}
