use leptos::prelude::*;

use contracts::domain::common::EntityId;

use crate::domain::a004_shortlist::service::use_shortlist;
use crate::shared::notify::use_notify;
use crate::system::auth::context::use_auth;

/// Save / unsave control for one (job, cleaner) pairing. Disabled while a
/// toggle for the same key is in flight.
#[component]
pub fn ShortlistButton(job_id: EntityId, cleaner_id: EntityId) -> impl IntoView {
    let shortlist = use_shortlist();
    let notify = use_notify();
    let auth_state = use_auth();

    shortlist.ensure_loaded();

    let set = shortlist.set();
    let is_saved = move || set.get().is_saved(job_id, cleaner_id);
    let is_pending = move || set.get().is_pending(job_id, cleaner_id);

    let on_click = move |_| {
        let role = auth_state.get_untracked().role();
        let result = shortlist.toggle(job_id, cleaner_id, role, move |outcome| {
            if let Err(e) = outcome {
                notify.error(e);
            }
        });
        if let Err(e) = result {
            notify.warning(e.message);
        }
    };

    view! {
        <button
            class=move || {
                if is_saved() {
                    "btn btn--shortlist btn--shortlist-active"
                } else {
                    "btn btn--shortlist"
                }
            }
            disabled=is_pending
            on:click=on_click
        >
            {move || if is_saved() { "Shortlisted" } else { "Shortlist" }}
        </button>
    }
}
