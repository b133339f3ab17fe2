use serde_json::json;

use contracts::domain::a003_booking::Booking;
use contracts::domain::common::{EntityId, ListEnvelope};
use contracts::usecases::u102_review_application::Decision;

use crate::shared::api_utils;

/// Book a cleaner for a job. A duplicate pairing answers a conflict text,
/// not a status code; callers classify via the message.
pub async fn create_booking(job: EntityId, cleaner: EntityId) -> Result<Booking, String> {
    api_utils::post_json(
        "/api/job-bookings/book/",
        &json!({ "job": job, "cleaner": cleaner }),
    )
    .await
}

/// Applications across the employer's jobs. The gateway scopes the list
/// to the caller.
pub async fn list_applications() -> Result<Vec<Booking>, String> {
    let envelope: ListEnvelope<Booking> = api_utils::get_json("/api/job-applications/").await?;
    Ok(envelope.into_results())
}

/// Resolve one pending application. The decision picks the endpoint and
/// carries the rejection reason when there is one.
pub async fn resolve_application(
    application_id: EntityId,
    decision: &Decision,
) -> Result<Booking, String> {
    let path = format!(
        "/api/job-applications/{}/{}/",
        application_id,
        decision.endpoint_suffix()
    );
    api_utils::post_json(&path, decision).await
}
