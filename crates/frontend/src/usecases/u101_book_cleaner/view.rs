use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a001_cleaner::Cleaner;
use contracts::domain::a002_job::{Job, JobDraft};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::message_is_conflict;
use contracts::usecases::u101_book_cleaner::{
    BookingMode, BookingWizard, SubmitOutcome, SubmitPlan, WizardStep,
};

use crate::domain::a001_cleaner;
use crate::domain::a002_job::api as jobs_api;
use crate::domain::a002_job::ui::job_form::JobForm;
use crate::domain::a003_booking::api as bookings_api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::date_utils::{format_date, format_rate};
use crate::shared::notify::use_notify;
use crate::system::auth::storage;

/// Run a submit plan against the gateway. The order is fixed: create the
/// job when the plan asks for one, then the booking, then patch the job
/// taken. A halt leaves earlier writes in place; the booking conflict
/// case still patches, because the job is booked either way.
async fn execute_plan(plan: SubmitPlan, cleaner_id: EntityId) -> Result<SubmitOutcome, String> {
    let job_id = match plan {
        SubmitPlan::Existing { job_id } => job_id,
        SubmitPlan::Create { draft } => {
            let job = jobs_api::create_job(&draft).await?;
            storage::save_selected_job(&job);
            job.id
        }
    };

    let already_booked = match bookings_api::create_booking(job_id, cleaner_id).await {
        Ok(_) => false,
        Err(message) if message_is_conflict(&message) => true,
        Err(message) => return Err(message),
    };
    storage::remember_applied_job(job_id);

    if let Err(message) = jobs_api::mark_job_taken(job_id).await {
        return Ok(SubmitOutcome::StatusPatchFailed(message));
    }

    Ok(if already_booked {
        SubmitOutcome::AlreadyBooked
    } else {
        SubmitOutcome::Booked
    })
}

/// The 3-step booking wizard. All transition rules live on the wizard
/// value itself; this page renders the current step and executes the
/// submit plan it yields.
#[component]
pub fn BookCleanerPage(cleaner_id: EntityId) -> impl IntoView {
    let ctx = use_app_context();
    let notify = use_notify();

    let wizard = RwSignal::new(BookingWizard::new(cleaner_id));
    let draft = RwSignal::new(JobDraft::default());
    // Last job the user viewed elsewhere, cached as a cross-page handoff.
    let recent_job_id = StoredValue::new(storage::get_selected_job().map(|j| j.id));

    let (cleaner, set_cleaner) = signal(Option::<Cleaner>::None);
    let (open_jobs, set_open_jobs) = signal(Vec::<Job>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);

    // The list page caches its selection; a direct link falls back to a
    // directory fetch by id.
    spawn_local(async move {
        let cached = storage::get_selected_cleaner().filter(|c| c.id == cleaner_id);
        match cached {
            Some(c) => set_cleaner.set(Some(c)),
            None => match a001_cleaner::api::fetch_cleaners().await {
                Ok(cleaners) => {
                    set_cleaner.set(cleaners.into_iter().find(|c| c.id == cleaner_id));
                }
                Err(e) => notify.error(e),
            },
        }
        match jobs_api::fetch_my_jobs().await {
            Ok(jobs) => {
                set_open_jobs.set(jobs.into_iter().filter(|j| j.is_open()).collect());
            }
            Err(e) => notify.error(e),
        }
        set_is_loading.set(false);
    });

    let step = move || wizard.get().step();

    let pick = move |mode: BookingMode| {
        let empty = open_jobs.get_untracked().is_empty();
        let mut redirected = false;
        wizard.update(|w| redirected = w.pick_mode(mode, empty));
        if redirected {
            notify.info("You have no open jobs, so let's create one first");
        }
    };

    let choose_job = move |job: Job| {
        let mut result = Ok(());
        wizard.update(|w| result = w.select_job(job));
        if let Err(e) = result {
            notify.warning(e.message);
        }
    };

    let advance_create = move |_| {
        let mut result = Ok(());
        wizard.update(|w| {
            w.draft = draft.get_untracked();
            result = w.advance_with_draft();
        });
        if let Err(e) = result {
            notify.warning(e.message);
        }
    };

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let plan = match wizard.with_untracked(|w| w.submit_plan()) {
            Ok(plan) => plan,
            Err(e) => {
                notify.warning(e.message);
                return;
            }
        };
        set_submitting.set(true);
        spawn_local(async move {
            match execute_plan(plan, cleaner_id).await {
                Ok(outcome) => {
                    wizard.update(|w| w.mark_completed());
                    match outcome {
                        SubmitOutcome::Booked => notify.success("Cleaner booked"),
                        SubmitOutcome::AlreadyBooked => {
                            notify.info("This cleaner is already booked for that job")
                        }
                        SubmitOutcome::StatusPatchFailed(message) => notify.warning(format!(
                            "Booked, but the job could not be marked taken: {}",
                            message,
                        )),
                    }
                    ctx.navigate(Page::MyJobs);
                }
                Err(e) => notify.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page book-cleaner">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Book a Cleaner"</h1>
                    <span class="wizard-step">
                        {move || format!("Step {} of 3", wizard.get().step().number())}
                    </span>
                </div>
            </div>

            {move || cleaner.get().map(|cleaner| view! {
                <div class="card wizard-cleaner-summary">
                    <strong>{cleaner.display_name()}</strong>
                    <span>{cleaner.experience_bucket().display_name()}</span>
                    <span>{cleaner.rating_label()}</span>
                    <span>{format_rate(cleaner.hourly_rate)}</span>
                </div>
            })}

            <Show when=move || is_loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !is_loading.get() && step() == WizardStep::ModeSelect>
                <div class="wizard-mode-select">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| pick(BookingMode::Existing)
                    >
                        "Book for an existing job"
                    </button>
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| pick(BookingMode::Create)
                    >
                        "Create a new job"
                    </button>
                </div>
            </Show>

            <Show when=move || {
                step() == WizardStep::JobChoice
                    && wizard.get().mode() == Some(BookingMode::Existing)
            }>
                <div class="wizard-job-choice">
                    <h3>"Choose an open job"</h3>
                    {move || open_jobs.get().into_iter().map(|job| {
                        let label = format!(
                            "{} \u{2022} {} \u{2022} {}",
                            job.title,
                            job.location,
                            job.date.as_deref().map(format_date).unwrap_or_default(),
                        );
                        let is_recent = recent_job_id.get_value() == Some(job.id);
                        view! {
                            <button
                                class=if is_recent {
                                    "btn btn--outline wizard-job-option wizard-job-option--recent"
                                } else {
                                    "btn btn--outline wizard-job-option"
                                }
                                on:click=move |_| choose_job(job.clone())
                            >
                                {label}
                                {is_recent.then_some(" (recently viewed)")}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>

            <Show when=move || {
                step() == WizardStep::JobChoice
                    && wizard.get().mode() == Some(BookingMode::Create)
            }>
                <div class="wizard-job-create">
                    <h3>"Describe the job"</h3>
                    <JobForm draft=draft />
                    <button class="btn btn--primary" on:click=advance_create>
                        "Continue"
                    </button>
                </div>
            </Show>

            <Show when=move || step() == WizardStep::Confirm>
                <div class="wizard-confirm">
                    <h3>"Confirm booking"</h3>
                    {move || wizard.with(|w| match (w.mode(), w.selected_job()) {
                        (Some(BookingMode::Existing), Some(job)) => view! {
                            <p>
                                "Booking for " <strong>{job.title.clone()}</strong>
                                " in " {job.location.clone()}
                            </p>
                        }.into_any(),
                        _ => view! {
                            <p>
                                "A new job " <strong>{w.draft.title.clone()}</strong>
                                " will be created and booked."
                            </p>
                        }.into_any(),
                    })}
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get() || wizard.get().is_completed()
                        on:click=submit
                    >
                        {move || {
                            if wizard.get().is_completed() {
                                "Booked"
                            } else if submitting.get() {
                                "Booking..."
                            } else {
                                "Confirm and book"
                            }
                        }}
                    </button>
                </div>
            </Show>

            <Show when=move || !is_loading.get() && step() != WizardStep::ModeSelect>
                <button class="btn btn--ghost" on:click=move |_| wizard.update(|w| w.back())>
                    "Back"
                </button>
            </Show>
        </div>
    }
}
