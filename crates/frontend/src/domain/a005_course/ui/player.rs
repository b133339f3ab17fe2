use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a005_course::{progress, Course, Enrollment, Lesson, QuizSheet};
use contracts::domain::common::EntityId;
use contracts::enums::LessonContentType;

use crate::domain::a005_course::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::notify::use_notify;

/// Course player: module sidebar, one lesson at a time, prev/next over
/// the flattened module order. Completion state and the progress percent
/// are re-fetched after every server-side change.
#[component]
pub fn CoursePlayerPage(slug: String, lesson_id: Option<EntityId>) -> impl IntoView {
    let notify = use_notify();
    let ctx = use_app_context();

    let (course, set_course) = signal(Option::<Course>::None);
    let (enrollment, set_enrollment) = signal(Option::<Enrollment>::None);
    let (is_loading, set_is_loading) = signal(true);
    let (busy, set_busy) = signal(false);

    let current_id = RwSignal::new(lesson_id);
    let sheet = RwSignal::new(QuizSheet::default());

    let load_slug = StoredValue::new(slug);
    let load = move || {
        let slug = load_slug.get_value();
        spawn_local(async move {
            match api::fetch_course(&slug).await {
                Ok(fetched) => {
                    // Default to the first incomplete lesson, or the first
                    // lesson when everything is done.
                    if current_id.get_untracked().is_none() {
                        let lessons = progress::flatten(&fetched);
                        let start = lessons
                            .iter()
                            .find(|lesson| !lesson.is_completed)
                            .or_else(|| lessons.first())
                            .map(|lesson| lesson.id);
                        current_id.set(start);
                    }
                    let course_id = fetched.id;
                    set_course.set(Some(fetched));
                    match api::fetch_my_learning().await {
                        Ok(enrollments) => {
                            set_enrollment.set(
                                enrollments
                                    .into_iter()
                                    .find(|e| e.course == Some(course_id)),
                            );
                        }
                        Err(e) => log::warn!("failed to load enrollment: {}", e),
                    }
                }
                Err(e) => notify.error(e),
            }
            set_is_loading.set(false);
        });
    };
    load();

    // Lesson plus neighbors, re-derived whenever the course snapshot or
    // the selection changes. A stale lesson id simply renders nothing.
    let current = Memo::new(move |_| {
        let course = course.get()?;
        let id = current_id.get()?;
        let (lesson, neighbors) = progress::locate(&course, id)?;
        Some((lesson.clone(), neighbors))
    });

    let go_to = move |id: EntityId| {
        sheet.update(|s| s.clear());
        current_id.set(Some(id));
    };

    let mark_complete = move |lesson: Lesson| {
        let Some(enrollment_id) = enrollment.get_untracked().map(|e| e.id) else {
            notify.warning("Enroll in the course to track progress");
            return;
        };
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::complete_lesson(enrollment_id, lesson.id).await {
                Ok(updated) => {
                    set_enrollment.set(Some(updated));
                    notify.success("Lesson completed");
                    load();
                    // Advance, or leave the course when this was the last
                    // lesson.
                    if let Some((_, neighbors)) = current.get_untracked() {
                        match neighbors.next {
                            Some(next) => go_to(next),
                            None => ctx.navigate(Page::Courses),
                        }
                    }
                }
                Err(e) => notify.error(e),
            }
            set_busy.set(false);
        });
    };

    let submit_quiz = move |lesson: Lesson| {
        let Some(enrollment_id) = enrollment.get_untracked().map(|e| e.id) else {
            notify.warning("Enroll in the course to take quizzes");
            return;
        };
        if busy.get_untracked() || !sheet.get_untracked().ready(&lesson) {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let answers = sheet.get_untracked().payload().clone();
            match api::submit_quiz(enrollment_id, lesson.id, &answers).await {
                Ok(outcome) if outcome.passed => {
                    notify.success(format!("Quiz passed: {:.0}%", outcome.score));
                    sheet.update(|s| s.clear());
                    load();
                    if let Some((_, neighbors)) = current.get_untracked() {
                        match neighbors.next {
                            Some(next) => go_to(next),
                            None => ctx.navigate(Page::Courses),
                        }
                    }
                }
                Ok(outcome) => {
                    // Failure writes nothing server-side; clearing the
                    // sheet is the retake.
                    notify.warning(format!(
                        "Quiz failed: {:.0}% (pass mark {:.0}%)",
                        outcome.score, outcome.passing_score,
                    ));
                    sheet.update(|s| s.clear());
                }
                Err(e) => notify.error(e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page course-player">
            <Show when=move || is_loading.get()>
                <div class="loading">"Loading course..."</div>
            </Show>

            <aside class="course-player__sidebar">
                {move || course.get().map(|course| view! {
                    <h2 class="course-player__title">{course.title.clone()}</h2>
                    {enrollment.get().map(|enrollment| view! {
                        <div class="progress-bar">
                            <div
                                class="progress-bar__fill"
                                style=format!("width: {:.0}%", enrollment.progress_percent)
                            />
                        </div>
                    })}
                    {course.modules.iter().map(|module| view! {
                        <div class="course-player__module">
                            <h4>{module.title.clone()}</h4>
                            <ul>
                                {module.lessons.iter().map(|lesson| {
                                    let id = lesson.id;
                                    let is_current = move || current_id.get() == Some(id);
                                    view! {
                                        <li
                                            class=move || {
                                                if is_current() {
                                                    "lesson-link lesson-link--current"
                                                } else {
                                                    "lesson-link"
                                                }
                                            }
                                            on:click=move |_| go_to(id)
                                        >
                                            {if lesson.is_completed { "\u{2713} " } else { "" }}
                                            {lesson.title.clone()}
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                })}
            </aside>

            <section class="course-player__content">
                {move || current.get().map(|(lesson, neighbors)| {
                    let completed = lesson.is_completed;
                    let for_complete = lesson.clone();
                    let for_quiz = lesson.clone();
                    let quiz_ready = {
                        let lesson = lesson.clone();
                        move || sheet.get().ready(&lesson)
                    };
                    view! {
                        <h2>{lesson.title.clone()}</h2>

                        {match lesson.content_type {
                            LessonContentType::Video => view! {
                                <div class="lesson-video">
                                    {lesson.video_url.clone().map(|url| view! {
                                        <video controls src=url />
                                    })}
                                </div>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get() || completed
                                    on:click={
                                        let lesson = for_complete.clone();
                                        move |_| mark_complete(lesson.clone())
                                    }
                                >
                                    {if lesson.is_completed {
                                        "Completed"
                                    } else {
                                        "Mark as complete"
                                    }}
                                </button>
                            }.into_any(),
                            LessonContentType::Text => view! {
                                <div class="lesson-text" inner_html=lesson.content.clone() />
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get() || completed
                                    on:click={
                                        let lesson = for_complete.clone();
                                        move |_| mark_complete(lesson.clone())
                                    }
                                >
                                    {if lesson.is_completed {
                                        "Completed"
                                    } else {
                                        "Mark as complete"
                                    }}
                                </button>
                            }.into_any(),
                            LessonContentType::Quiz => view! {
                                <div class="lesson-quiz">
                                    {lesson.questions.iter().map(|question| {
                                        let question_id = question.id;
                                        view! {
                                            <div class="quiz-question">
                                                <p>{question.text.clone()}</p>
                                                {question.answers.iter().map(|option| {
                                                    let option_id = option.id;
                                                    view! {
                                                        <label class="quiz-option">
                                                            <input
                                                                type="radio"
                                                                name=format!("q{}", question_id)
                                                                prop:checked=move || {
                                                                    sheet.get()
                                                                        .selected(question_id)
                                                                        == Some(option_id)
                                                                }
                                                                on:change=move |_| {
                                                                    sheet.update(|s| {
                                                                        s.select(
                                                                            question_id,
                                                                            option_id,
                                                                        );
                                                                    });
                                                                }
                                                            />
                                                            {option.text.clone()}
                                                        </label>
                                                    }
                                                }).collect_view()}
                                            </div>
                                        }
                                    }).collect_view()}
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || busy.get() || !quiz_ready()
                                        on:click={
                                            let lesson = for_quiz.clone();
                                            move |_| submit_quiz(lesson.clone())
                                        }
                                    >
                                        "Submit quiz"
                                    </button>
                                </div>
                            }.into_any(),
                        }}

                        <div class="course-player__nav">
                            {neighbors.prev.map(|prev| view! {
                                <button
                                    class="btn btn--secondary"
                                    on:click=move |_| go_to(prev)
                                >
                                    "Previous lesson"
                                </button>
                            })}
                            {neighbors.next.map(|next| view! {
                                <button
                                    class="btn btn--secondary"
                                    on:click=move |_| go_to(next)
                                >
                                    "Next lesson"
                                </button>
                            })}
                        </div>
                    }
                })}
            </section>
        </div>
    }
}
