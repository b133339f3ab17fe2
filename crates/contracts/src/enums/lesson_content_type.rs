use serde::{Deserialize, Serialize};

/// Lesson content kinds in the learning portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LessonContentType {
    Video,
    Text,
    Quiz,
}

impl LessonContentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            LessonContentType::Video => "Video",
            LessonContentType::Text => "Reading",
            LessonContentType::Quiz => "Quiz",
        }
    }

    pub fn is_quiz(&self) -> bool {
        matches!(self, LessonContentType::Quiz)
    }
}
