use leptos::prelude::*;

use crate::domain::a001_cleaner::ui::CleanerListPage;
use crate::domain::a002_job::ui::MyJobsPage;
use crate::domain::a003_booking::ui::ApplicationsPage;
use crate::domain::a005_course::ui::{CourseCatalogPage, CoursePlayerPage};
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::usecases::u101_book_cleaner::view::BookCleanerPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();
    let page = ctx.page();

    view! {
        <Shell>
            {move || match page.get() {
                Page::CleanerList => view! { <CleanerListPage /> }.into_any(),
                Page::MyJobs => view! { <MyJobsPage /> }.into_any(),
                Page::Applications => view! { <ApplicationsPage /> }.into_any(),
                Page::BookCleaner { cleaner_id } => {
                    view! { <BookCleanerPage cleaner_id=cleaner_id /> }.into_any()
                }
                Page::Courses => view! { <CourseCatalogPage /> }.into_any(),
                Page::CoursePlayer { slug, lesson_id } => {
                    view! { <CoursePlayerPage slug=slug lesson_id=lesson_id /> }.into_any()
                }
            }}
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
