use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a005_course::{Course, Enrollment};
use contracts::domain::common::EntityId;

use crate::domain::a005_course::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::notify::use_notify;

/// Course catalog with enrollment state merged in: enrolled courses show
/// server-side progress and continue into the player, the rest offer
/// enrollment.
#[component]
pub fn CourseCatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let notify = use_notify();

    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (enrollments, set_enrollments) = signal(HashMap::<EntityId, Enrollment>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (enrolling, set_enrolling) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_courses().await {
                Ok(items) => set_courses.set(items),
                Err(e) => notify.error(e),
            }
            match api::fetch_my_learning().await {
                Ok(items) => {
                    set_enrollments.set(
                        items
                            .into_iter()
                            .filter_map(|e| e.course.map(|course_id| (course_id, e)))
                            .collect(),
                    );
                }
                Err(e) => log::warn!("failed to load enrollments: {}", e),
            }
            set_is_loading.set(false);
        });
    };
    load();

    let enroll = move |slug: String| {
        if enrolling.get_untracked().is_some() {
            return;
        }
        set_enrolling.set(Some(slug.clone()));
        spawn_local(async move {
            match api::enroll(&slug).await {
                Ok(_) => {
                    notify.success("Enrolled");
                    ctx.navigate(Page::CoursePlayer {
                        slug,
                        lesson_id: None,
                    });
                }
                Err(e) => notify.error(e),
            }
            set_enrolling.set(None);
        });
    };

    view! {
        <div class="page courses">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Courses"</h1>
                </div>
            </div>

            <Show when=move || is_loading.get()>
                <div class="loading">"Loading courses..."</div>
            </Show>

            <div class="card-grid">
                {move || courses.get().into_iter().map(|course| {
                    let enrollment = enrollments.get().get(&course.id).cloned();
                    let slug = course.slug.clone();
                    let slug_for_continue = course.slug.clone();
                    let is_enrolling = {
                        let slug = course.slug.clone();
                        move || enrolling.get().as_deref() == Some(slug.as_str())
                    };
                    view! {
                        <div class="card course-card">
                            <h3 class="course-card__title">{course.title.clone()}</h3>
                            <p class="course-card__description">{course.description.clone()}</p>
                            <span class="course-card__lessons">
                                {format!("{} lessons", course.lesson_count())}
                            </span>
                            {match enrollment {
                                Some(enrollment) => view! {
                                    <div class="course-card__progress">
                                        <div class="progress-bar">
                                            <div
                                                class="progress-bar__fill"
                                                style=format!(
                                                    "width: {:.0}%",
                                                    enrollment.progress_percent,
                                                )
                                            />
                                        </div>
                                        <span>
                                            {format!("{:.0}%", enrollment.progress_percent)}
                                        </span>
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| ctx.navigate(Page::CoursePlayer {
                                                slug: slug_for_continue.clone(),
                                                lesson_id: None,
                                            })
                                        >
                                            "Continue"
                                        </button>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <button
                                        class="btn btn--secondary"
                                        disabled=is_enrolling.clone()
                                        on:click=move |_| enroll(slug.clone())
                                    >
                                        "Enroll"
                                    </button>
                                }.into_any(),
                            }}
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || !is_loading.get() && courses.get().is_empty()>
                <div class="empty-state">"No courses available."</div>
            </Show>
        </div>
    }
}
