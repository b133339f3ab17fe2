use serde::{Deserialize, Serialize};

/// Job lifecycle status as delivered by the gateway (single-letter codes).
///
/// Codes the backend has not documented yet arrive occasionally; they are
/// preserved as `Unknown` instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Open,
    Taken,
    Unknown(String),
}

impl JobStatus {
    pub fn code(&self) -> &str {
        match self {
            JobStatus::Open => "o",
            JobStatus::Taken => "t",
            JobStatus::Unknown(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Taken => "Taken",
            JobStatus::Unknown(_) => "Other",
        }
    }

    /// Parse a gateway code. Accepts the long form the older endpoints
    /// still send ("open"/"taken") alongside the single-letter codes.
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "o" | "open" => JobStatus::Open,
            "t" | "taken" => JobStatus::Taken,
            other => JobStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, JobStatus::Open)
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        JobStatus::from_code(&s)
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.code().to_string()
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(JobStatus::from_code("o"), JobStatus::Open);
        assert_eq!(JobStatus::from_code("Open"), JobStatus::Open);
        assert_eq!(JobStatus::from_code("t"), JobStatus::Taken);
        assert_eq!(
            JobStatus::from_code("x"),
            JobStatus::Unknown("x".to_string())
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let job: JobStatus = serde_json::from_str("\"o\"").unwrap();
        assert!(job.is_open());
        assert_eq!(serde_json::to_string(&JobStatus::Taken).unwrap(), "\"t\"");
    }
}
