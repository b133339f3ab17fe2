use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::LessonContentType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: EntityId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: EntityId,
    pub text: String,
    #[serde(default)]
    pub answers: Vec<QuizOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: EntityId,
    pub title: String,
    pub content_type: LessonContentType,
    /// HTML body for TEXT lessons.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    /// Per-enrollment completion flag, merged in by the my-learning
    /// endpoints. Server-authoritative; never computed locally.
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

impl Course {
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|module| module.lessons.len()).sum()
    }
}

/// A learner's link to a course. `progress_percent` is authoritative from
/// the server and refreshed after every completion side effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EntityId,
    #[serde(default)]
    pub course: Option<EntityId>,
    #[serde(default)]
    pub progress_percent: f64,
    #[serde(default)]
    pub enrolled_at: Option<DateTime<Utc>>,
}

/// Result of a quiz submission. Only `passed == true` advances progress;
/// a failed attempt leaves server state untouched and may be retaken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub passed: bool,
    pub score: f64,
    pub passing_score: f64,
}
