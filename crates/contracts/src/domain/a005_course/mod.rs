pub mod aggregate;
pub mod progress;

pub use aggregate::{
    Course, CourseModule, Enrollment, Lesson, QuizOption, QuizOutcome, QuizQuestion,
};
pub use progress::{LessonNeighbors, QuizSheet};
