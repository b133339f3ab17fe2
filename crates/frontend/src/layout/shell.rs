use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::notify::NoticeStack;
use crate::system::auth::context::{do_logout, use_auth};

fn nav_button(label: &'static str, target: Page) -> impl IntoView {
    let ctx = use_app_context();
    let page = ctx.page();
    let is_active = {
        let target = target.clone();
        move || page.get() == target
    };

    view! {
        <button
            class=move || {
                if is_active() {
                    "nav-link nav-link--active"
                } else {
                    "nav-link"
                }
            }
            on:click=move |_| ctx.navigate(target.clone())
        >
            {label}
        </button>
    }
}

/// App chrome: header with role-aware navigation, the notice stack and
/// the routed page content.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="app-header__brand">"SparkClean"</span>
                <nav class="app-header__nav">
                    {nav_button("Find Cleaners", Page::CleanerList)}
                    <Show when=move || auth_state.get().is_employer()>
                        {nav_button("My Jobs", Page::MyJobs)}
                        {nav_button("Applications", Page::Applications)}
                    </Show>
                    {nav_button("Courses", Page::Courses)}
                </nav>
                <div class="app-header__account">
                    <span class="app-header__user">
                        {move || {
                            auth_state
                                .get()
                                .user_info
                                .map(|user| user.display_name())
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        class="btn btn--ghost"
                        on:click=move |_| do_logout(auth_state)
                    >
                        "Sign out"
                    </button>
                </div>
            </header>

            <NoticeStack />

            <main class="app-main">{children()}</main>
        </div>
    }
}
