//! Lesson traversal and quiz answer collection.
//!
//! Navigation flattens modules in declared order; completion percent is
//! never computed here (the server owns it, pages re-fetch after each
//! completion call).

use std::collections::BTreeMap;

use crate::domain::common::EntityId;

use super::aggregate::{Course, Lesson};

/// Immediate neighbors of a lesson in the flattened module order. `None`
/// at either end of the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonNeighbors {
    pub prev: Option<EntityId>,
    pub next: Option<EntityId>,
}

/// Lessons of every module, in declared order.
pub fn flatten(course: &Course) -> Vec<&Lesson> {
    course
        .modules
        .iter()
        .flat_map(|module| module.lessons.iter())
        .collect()
}

/// Find a lesson and its neighbors. Returns `None` when the id is not in
/// the course (stale link after a curriculum edit).
pub fn locate(course: &Course, lesson_id: EntityId) -> Option<(&Lesson, LessonNeighbors)> {
    let lessons = flatten(course);
    let index = lessons.iter().position(|lesson| lesson.id == lesson_id)?;
    let neighbors = LessonNeighbors {
        prev: index.checked_sub(1).map(|i| lessons[i].id),
        next: lessons.get(index + 1).map(|lesson| lesson.id),
    };
    Some((lessons[index], neighbors))
}

/// Local answer state for a quiz lesson: exactly one selected answer per
/// question before submission unlocks.
#[derive(Debug, Clone, Default)]
pub struct QuizSheet {
    answers: BTreeMap<EntityId, EntityId>,
}

impl QuizSheet {
    pub fn select(&mut self, question: EntityId, answer: EntityId) {
        self.answers.insert(question, answer);
    }

    pub fn selected(&self, question: EntityId) -> Option<EntityId> {
        self.answers.get(&question).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Submission gate: every question of the lesson has an answer.
    pub fn ready(&self, lesson: &Lesson) -> bool {
        !lesson.questions.is_empty()
            && lesson
                .questions
                .iter()
                .all(|question| self.answers.contains_key(&question.id))
    }

    /// Payload for the submit-quiz endpoint (`{question_id: answer_id}`).
    pub fn payload(&self) -> &BTreeMap<EntityId, EntityId> {
        &self.answers
    }

    /// Retake after a failed attempt: local selections are discarded,
    /// nothing is sent to the server.
    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_course::aggregate::{CourseModule, QuizOption, QuizQuestion};
    use crate::enums::LessonContentType;

    fn lesson(id: EntityId) -> Lesson {
        Lesson {
            id,
            title: format!("Lesson {}", id),
            content_type: LessonContentType::Text,
            content: String::new(),
            video_url: None,
            questions: vec![],
            is_completed: false,
        }
    }

    fn course() -> Course {
        Course {
            id: 1,
            slug: "intro".into(),
            title: "Intro".into(),
            description: String::new(),
            modules: vec![
                CourseModule {
                    id: 10,
                    title: "Module 1".into(),
                    lessons: vec![lesson(100), lesson(101)],
                },
                CourseModule {
                    id: 11,
                    title: "Module 2".into(),
                    lessons: vec![lesson(102)],
                },
            ],
        }
    }

    #[test]
    fn test_neighbor_map_over_module_boundary() {
        let course = course();
        let (_, first) = locate(&course, 100).unwrap();
        assert_eq!(first, LessonNeighbors { prev: None, next: Some(101) });

        let (_, middle) = locate(&course, 101).unwrap();
        assert_eq!(middle, LessonNeighbors { prev: Some(100), next: Some(102) });

        let (_, last) = locate(&course, 102).unwrap();
        assert_eq!(last, LessonNeighbors { prev: Some(101), next: None });
    }

    #[test]
    fn test_last_lesson_has_no_forward_step() {
        // Completing here must send the player out of the course instead
        // of leaving it parked on the finished lesson.
        let (_, neighbors) = locate(&course(), 102).unwrap();
        assert_eq!(neighbors.next, None);
    }

    #[test]
    fn test_unknown_lesson_id() {
        assert!(locate(&course(), 999).is_none());
    }

    fn quiz_lesson() -> Lesson {
        let question = |id: EntityId| QuizQuestion {
            id,
            text: format!("Q{}", id),
            answers: vec![
                QuizOption { id: id * 10, text: "A".into() },
                QuizOption { id: id * 10 + 1, text: "B".into() },
            ],
        };
        Lesson {
            id: 200,
            title: "Quiz".into(),
            content_type: LessonContentType::Quiz,
            content: String::new(),
            video_url: None,
            questions: vec![question(1), question(2), question(3)],
            is_completed: false,
        }
    }

    #[test]
    fn test_quiz_gate_requires_every_question() {
        let lesson = quiz_lesson();
        let mut sheet = QuizSheet::default();
        assert!(!sheet.ready(&lesson));

        sheet.select(1, 10);
        sheet.select(2, 21);
        assert!(!sheet.ready(&lesson)); // 3 questions, 2 answered

        sheet.select(3, 30);
        assert!(sheet.ready(&lesson));
    }

    #[test]
    fn test_reselect_keeps_one_answer_per_question() {
        let mut sheet = QuizSheet::default();
        sheet.select(1, 10);
        sheet.select(1, 11);
        assert_eq!(sheet.answered_count(), 1);
        assert_eq!(sheet.selected(1), Some(11));
    }

    #[test]
    fn test_clear_for_retake() {
        let mut sheet = QuizSheet::default();
        sheet.select(1, 10);
        sheet.clear();
        assert_eq!(sheet.answered_count(), 0);
    }
}
