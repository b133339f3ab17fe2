use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a003_booking::Booking;
use contracts::domain::common::EntityId;
use contracts::usecases::u102_review_application::{Decision, ReviewLocks};

use crate::domain::a001_cleaner;
use crate::domain::a002_job;
use crate::domain::a003_booking::api;
use crate::domain::a004_shortlist::button::ShortlistButton;
use crate::shared::components::BookingStatusBadge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::notify::use_notify;

/// Employer review queue. Rows reference jobs and cleaners by id, so both
/// lookups are fetched alongside the applications themselves.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let notify = use_notify();

    let (applications, set_applications) = signal(Vec::<Booking>::new());
    let (job_titles, set_job_titles) = signal(HashMap::<EntityId, String>::new());
    let (cleaner_names, set_cleaner_names) = signal(HashMap::<EntityId, String>::new());
    let (is_loading, set_is_loading) = signal(true);

    let locks = RwSignal::new(ReviewLocks::default());

    let load = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_applications().await {
                Ok(items) => set_applications.set(items),
                Err(e) => notify.error(e),
            }
            match a002_job::api::fetch_my_jobs().await {
                Ok(jobs) => {
                    set_job_titles.set(jobs.into_iter().map(|j| (j.id, j.title)).collect());
                }
                Err(e) => log::warn!("failed to load jobs for lookup: {}", e),
            }
            match a001_cleaner::api::fetch_cleaners().await {
                Ok(cleaners) => {
                    set_cleaner_names.set(
                        cleaners
                            .into_iter()
                            .map(|c| (c.id, c.display_name()))
                            .collect(),
                    );
                }
                Err(e) => log::warn!("failed to load cleaners for lookup: {}", e),
            }
            set_is_loading.set(false);
        });
    };
    load();

    let decide = move |application: Booking, decision: Decision| {
        // Pending-only plus the per-row lock, checked before anything
        // leaves the browser.
        match locks.try_update(|l| l.begin(application.id, &application.status)) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                notify.warning(e.message);
                return;
            }
            None => return,
        }
        let application_id = application.id;
        spawn_local(async move {
            let result = api::resolve_application(application_id, &decision).await;
            locks.update(|l| l.finish(application_id));
            match result {
                Ok(_) => {
                    notify.success(match decision {
                        Decision::Accept => "Application accepted",
                        Decision::Reject { .. } => "Application rejected",
                    });
                    load();
                }
                Err(e) => notify.error(e),
            }
        });
    };

    let reject_with_reason = move |application: Booking| {
        let reason = web_sys::window()
            .and_then(|win| {
                win.prompt_with_message("Reason for rejection (optional):")
                    .ok()
                    .flatten()
            })
            .unwrap_or_default();
        decide(application, Decision::Reject { reason });
    };

    view! {
        <div class="page applications">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Applications"</h1>
                </div>
                <div class="header__actions">
                    <button class="btn btn--secondary" on:click=move |_| load()>
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || is_loading.get()>
                <div class="loading">"Loading applications..."</div>
            </Show>

            <div class="application-list">
                {move || applications.get().into_iter().map(|application| {
                    let job_title = job_titles
                        .get()
                        .get(&application.job)
                        .cloned()
                        .unwrap_or_else(|| format!("Job #{}", application.job));
                    let cleaner_name = cleaner_names
                        .get()
                        .get(&application.cleaner)
                        .cloned()
                        .unwrap_or_else(|| format!("Cleaner #{}", application.cleaner));
                    let is_busy = {
                        let id = application.id;
                        move || locks.get().is_busy(id)
                    };
                    let can_decide = application.status.is_pending();
                    let for_accept = application.clone();
                    let for_reject = application.clone();

                    view! {
                        <div class="card application-card">
                            <div class="application-card__header">
                                <h3>{cleaner_name}</h3>
                                <span class="application-card__job">{job_title}</span>
                                <span class="application-card__date">
                                    {application
                                        .created_at
                                        .map(format_timestamp)
                                        .unwrap_or_default()}
                                </span>
                                <BookingStatusBadge status=application.status.clone() />
                                <Show when={
                                    let anomalous = application.paid_before_confirmed();
                                    move || anomalous
                                }>
                                    <span class="badge badge--warning">
                                        "Paid before confirmation"
                                    </span>
                                </Show>
                            </div>

                            <Show when={
                                let has_letter = !application.cover_letter.is_empty();
                                move || has_letter
                            }>
                                <p class="application-card__letter">
                                    {application.cover_letter.clone()}
                                </p>
                            </Show>

                            <div class="application-card__actions">
                                <ShortlistButton
                                    job_id=application.job
                                    cleaner_id=application.cleaner
                                />
                                <Show when=move || can_decide>
                                    {
                                        let for_accept = for_accept.clone();
                                        let for_reject = for_reject.clone();
                                        let is_busy = is_busy.clone();
                                        let busy_for_reject = is_busy.clone();
                                        view! {
                                            <button
                                                class="btn btn--primary"
                                                disabled=is_busy.clone()
                                                on:click=move |_| {
                                                    decide(for_accept.clone(), Decision::Accept)
                                                }
                                            >
                                                "Accept"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                disabled=busy_for_reject
                                                on:click=move |_| {
                                                    reject_with_reason(for_reject.clone())
                                                }
                                            >
                                                "Reject"
                                            </button>
                                        }
                                    }
                                </Show>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || !is_loading.get() && applications.get().is_empty()>
                <div class="empty-state">"No applications yet."</div>
            </Show>
        </div>
    }
}
