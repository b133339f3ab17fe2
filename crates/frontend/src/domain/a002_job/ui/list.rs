use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a002_job::{Job, JobDraft};
use contracts::shared::list_filter::{self, FilterCriteria};

use crate::domain::a002_job::api;
use crate::domain::a002_job::ui::job_form::JobForm;
use crate::shared::components::{JobStatusBadge, ListTopBar};
use crate::shared::date_utils::{format_date, format_rate};
use crate::shared::notify::use_notify;

/// Employer dashboard: posted jobs with the same filter pipeline as the
/// cleaner directory (keyword matches title and services; the experience
/// filter never applies to jobs) plus an inline create form.
#[component]
pub fn MyJobsPage() -> impl IntoView {
    let notify = use_notify();

    let (all_items, set_all_items) = signal(Vec::<Job>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (show_form, set_show_form) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let criteria = RwSignal::new(FilterCriteria::default());
    let draft = RwSignal::new(JobDraft::default());

    let load = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_my_jobs().await {
                Ok(items) => set_all_items.set(items),
                Err(e) => notify.error(e),
            }
            set_is_loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| {
        list_filter::apply(&all_items.get(), &criteria.get(), |j: &Job| j.title.clone())
    });

    let submit = move |_| {
        if submitting.get() {
            return;
        }
        if let Err(message) = draft.get().validate() {
            notify.warning(message);
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_job(&draft.get_untracked()).await {
                Ok(job) => {
                    notify.success(format!("Job \"{}\" posted", job.title));
                    draft.set(JobDraft::default());
                    set_show_form.set(false);
                    load();
                }
                Err(e) => notify.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page my-jobs">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"My Jobs"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| set_show_form.update(|v| *v = !*v)
                    >
                        {move || if show_form.get() { "Close" } else { "Post a Job" }}
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| load()>
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || show_form.get()>
                <div class="card job-form-card">
                    <JobForm draft=draft />
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=submit
                    >
                        {move || if submitting.get() { "Posting..." } else { "Post Job" }}
                    </button>
                </div>
            </Show>

            <ListTopBar
                criteria=criteria
                visible_count=Signal::derive(move || visible.get().len())
                noun="jobs".to_string()
            />

            <Show when=move || is_loading.get()>
                <div class="loading">"Loading jobs..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Rate"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|job| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{job.title.clone()}</td>
                                    <td class="table__cell">{job.location.clone()}</td>
                                    <td class="table__cell">
                                        {job.date.as_deref().map(format_date).unwrap_or_default()}
                                        " "
                                        {job.time.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">{format_rate(job.hourly_rate)}</td>
                                    <td class="table__cell">
                                        {job.total_pay()
                                            .map(|total| format!("\u{00a3}{:.2}", total))
                                            .unwrap_or_else(|| "\u{2014}".to_string())}
                                    </td>
                                    <td class="table__cell">
                                        <JobStatusBadge status=job.status.clone() />
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || !is_loading.get() && visible.get().is_empty()>
                <div class="empty-state">"No jobs yet."</div>
            </Show>
        </div>
    }
}
