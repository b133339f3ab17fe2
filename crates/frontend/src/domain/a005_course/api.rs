use std::collections::BTreeMap;

use serde_json::json;

use contracts::domain::a005_course::{Course, Enrollment, QuizOutcome};
use contracts::domain::common::{EntityId, ListEnvelope};

use crate::shared::api_utils;

pub async fn fetch_courses() -> Result<Vec<Course>, String> {
    let envelope: ListEnvelope<Course> = api_utils::get_json("/api/learning/courses/").await?;
    Ok(envelope.into_results())
}

/// Course with full curriculum. When the caller is enrolled the lessons
/// carry their per-enrollment completion flags.
pub async fn fetch_course(slug: &str) -> Result<Course, String> {
    api_utils::get_json(&format!("/api/learning/courses/{}/", slug)).await
}

pub async fn enroll(slug: &str) -> Result<Enrollment, String> {
    api_utils::post_json(&format!("/api/learning/courses/{}/enroll/", slug), &json!({})).await
}

pub async fn fetch_my_learning() -> Result<Vec<Enrollment>, String> {
    let envelope: ListEnvelope<Enrollment> =
        api_utils::get_json("/api/learning/my-learning/").await?;
    Ok(envelope.into_results())
}

/// Record a text or video lesson as read. Progress comes back on the
/// refreshed enrollment; it is never computed locally.
pub async fn complete_lesson(
    enrollment_id: EntityId,
    lesson_id: EntityId,
) -> Result<Enrollment, String> {
    api_utils::post_json(
        &format!("/api/learning/my-learning/{}/complete_lesson/", enrollment_id),
        &json!({ "lesson_id": lesson_id }),
    )
    .await
}

/// Submit a full quiz sheet. A failed attempt leaves server progress
/// untouched and can be retaken.
pub async fn submit_quiz(
    enrollment_id: EntityId,
    lesson_id: EntityId,
    answers: &BTreeMap<EntityId, EntityId>,
) -> Result<QuizOutcome, String> {
    api_utils::post_json(
        &format!("/api/learning/my-learning/{}/submit_quiz/", enrollment_id),
        &json!({ "lesson_id": lesson_id, "answers": answers }),
    )
    .await
}
