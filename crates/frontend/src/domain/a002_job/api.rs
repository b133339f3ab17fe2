use serde::{Deserialize, Serialize};
use serde_json::json;

use contracts::domain::a002_job::{Job, JobDraft};
use contracts::domain::common::{EntityId, ListEnvelope};

use crate::shared::api_utils;

/// A bookable service category, used by the job form checkboxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOption {
    pub id: EntityId,
    pub name: String,
}

/// Jobs posted by the signed-in employer.
pub async fn fetch_my_jobs() -> Result<Vec<Job>, String> {
    let envelope: ListEnvelope<Job> = api_utils::get_json("/api/jobs/?mine=true").await?;
    Ok(envelope.into_results())
}

pub async fn create_job(draft: &JobDraft) -> Result<Job, String> {
    api_utils::post_json("/api/jobs/", draft).await
}

/// Patch a job to taken ("t") after a successful booking. The status
/// codes on the wire are single letters.
pub async fn mark_job_taken(job_id: EntityId) -> Result<Job, String> {
    api_utils::patch_json(&format!("/api/jobs/{}/", job_id), &json!({ "status": "t" })).await
}

pub async fn fetch_services() -> Result<Vec<ServiceOption>, String> {
    let envelope: ListEnvelope<ServiceOption> = api_utils::get_json("/api/services/").await?;
    Ok(envelope.into_results())
}
