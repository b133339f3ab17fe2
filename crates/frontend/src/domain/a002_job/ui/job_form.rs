use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a002_job::JobDraft;

use crate::domain::a002_job::api::{self, ServiceOption};

/// Job draft editor shared by the employer dashboard and the booking
/// wizard's create step. Field requirements live on the draft itself;
/// this component only edits it.
#[component]
pub fn JobForm(draft: RwSignal<JobDraft>) -> impl IntoView {
    let (services, set_services) = signal(Vec::<ServiceOption>::new());

    spawn_local(async move {
        match api::fetch_services().await {
            Ok(options) => set_services.set(options),
            Err(e) => log::warn!("failed to load services: {}", e),
        }
    });

    let toggle_service = move |name: String, checked: bool| {
        draft.update(|d| {
            if checked {
                if !d.services.contains(&name) {
                    d.services.push(name);
                }
            } else {
                d.services.retain(|s| *s != name);
            }
        });
    };

    view! {
        <div class="job-form">
            <div class="form-group">
                <label class="form-label">"Job title"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || draft.get().title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.title = value);
                    }
                />
            </div>

            <div class="form-group">
                <label class="form-label">"Description"</label>
                <textarea
                    class="form-input"
                    prop:value=move || draft.get().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                />
            </div>

            <div class="form-group">
                <label class="form-label">"Location"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || draft.get().location
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.location = value);
                    }
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label class="form-label">"Date"</label>
                    <input
                        class="form-input"
                        type="date"
                        prop:value=move || draft.get().date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.date = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">"Time"</label>
                    <input
                        class="form-input"
                        type="time"
                        prop:value=move || draft.get().time
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.time = value);
                        }
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label class="form-label">"Hourly rate (GBP)"</label>
                    <input
                        class="form-input"
                        type="number"
                        step="0.01"
                        prop:value=move || {
                            draft.get().hourly_rate.map(|r| r.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.hourly_rate = value.parse().ok());
                        }
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">"Hours required"</label>
                    <input
                        class="form-input"
                        type="number"
                        step="0.5"
                        prop:value=move || {
                            draft.get().hours_required.map(|h| h.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.hours_required = value.parse().ok());
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label class="form-label">"Services"</label>
                <div class="job-form__services">
                    {move || services.get().into_iter().map(|option| {
                        let name = option.name.clone();
                        let name_for_check = option.name.clone();
                        view! {
                            <label class="filter-panel__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        draft.get().services.contains(&name_for_check)
                                    }
                                    on:change=move |ev| {
                                        toggle_service(name.clone(), event_target_checked(&ev));
                                    }
                                />
                                {option.name.clone()}
                            </label>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
