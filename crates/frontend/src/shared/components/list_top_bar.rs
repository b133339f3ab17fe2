use leptos::prelude::*;

use contracts::shared::list_filter::{FilterCriteria, PageWindow, SortOrder};

/// Top bar above a listing: visible count, sort order, per-page window
/// and a clear-all button when any narrowing filter is active.
///
/// Owns nothing; edits the shared criteria signal the page filters by.
#[component]
pub fn ListTopBar(
    criteria: RwSignal<FilterCriteria>,
    /// Count of currently visible rows.
    #[prop(into)]
    visible_count: Signal<usize>,
    /// Noun for the count label ("cleaners", "jobs").
    #[prop(into)]
    noun: String,
) -> impl IntoView {
    let per_page_value = move || {
        let window = criteria.get().per_page;
        if window.is_unbounded() {
            "all".to_string()
        } else {
            window.size().to_string()
        }
    };

    let on_first_page = move || criteria.get().per_page.start == 0;
    // fewer visible rows than the window holds means there is no page after
    let on_last_page = move || visible_count.get() < criteria.get().per_page.size();

    view! {
        <div class="list-top-bar">
            <div class="list-top-bar__count">
                "Show " <strong>{move || visible_count.get()}</strong> " " {noun}
            </div>

            <div class="list-top-bar__controls">
                <Show when=move || { criteria.get().active_count() > 0 }>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| criteria.update(|c| c.clear())
                    >
                        "Clear All"
                    </button>
                </Show>

                <select
                    class="form-select"
                    prop:value=move || criteria.get().sort.code().to_string()
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        criteria.update(|c| c.sort = SortOrder::from_code(&code));
                    }
                >
                    <option value="">"Sort by (default)"</option>
                    <option value="asc">"Oldest First"</option>
                    <option value="des">"Newest First"</option>
                </select>

                <select
                    class="form-select"
                    prop:value=per_page_value
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let window = match value.parse::<usize>() {
                            Ok(per_page) => PageWindow::first(per_page),
                            Err(_) => PageWindow::all(),
                        };
                        criteria.update(|c| c.per_page = window);
                    }
                >
                    <option value="all">"All"</option>
                    <option value="10">"10 per page"</option>
                    <option value="20">"20 per page"</option>
                    <option value="30">"30 per page"</option>
                </select>

                <Show when=move || { !criteria.get().per_page.is_unbounded() }>
                    <button
                        class="btn btn--secondary"
                        disabled=on_first_page
                        on:click=move |_| criteria.update(|c| c.per_page = c.per_page.prev())
                    >
                        "Prev"
                    </button>
                    <button
                        class="btn btn--secondary"
                        disabled=on_last_page
                        on:click=move |_| criteria.update(|c| c.per_page = c.per_page.next())
                    >
                        "Next"
                    </button>
                </Show>
            </div>
        </div>
    }
}
