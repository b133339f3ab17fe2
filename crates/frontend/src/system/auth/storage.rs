//! localStorage-backed caches.
//!
//! The token plus the cross-page handoffs (`selectedCleaner`,
//! `selectedJob`, `appliedJobs`). Caches only: never a source of truth
//! for authorization, and not reliably shared across tabs.

use contracts::domain::a001_cleaner::Cleaner;
use contracts::domain::a002_job::Job;
use contracts::domain::common::EntityId;

const ACCESS_TOKEN_KEY: &str = "access_token";
const SELECTED_CLEANER_KEY: &str = "selectedCleaner";
const SELECTED_JOB_KEY: &str = "selectedJob";
const APPLIED_JOBS_KEY: &str = "appliedJobs";

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn save_access_token(token: &str) {
    set_item(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

pub fn clear_access_token() {
    remove_item(ACCESS_TOKEN_KEY);
}

/// Stash the cleaner a listing page handed to the booking wizard.
pub fn save_selected_cleaner(cleaner: &Cleaner) {
    if let Ok(json) = serde_json::to_string(cleaner) {
        set_item(SELECTED_CLEANER_KEY, &json);
    }
}

/// A corrupt cached record reads as absent; the wizard then sends the
/// user back to the listing.
pub fn get_selected_cleaner() -> Option<Cleaner> {
    serde_json::from_str(&get_item(SELECTED_CLEANER_KEY)?).ok()
}

pub fn save_selected_job(job: &Job) {
    if let Ok(json) = serde_json::to_string(job) {
        set_item(SELECTED_JOB_KEY, &json);
    }
}

pub fn get_selected_job() -> Option<Job> {
    serde_json::from_str(&get_item(SELECTED_JOB_KEY)?).ok()
}

pub fn get_applied_jobs() -> Vec<EntityId> {
    get_item(APPLIED_JOBS_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn remember_applied_job(job_id: EntityId) {
    let mut applied = get_applied_jobs();
    if !applied.contains(&job_id) {
        applied.push(job_id);
        if let Ok(json) = serde_json::to_string(&applied) {
            set_item(APPLIED_JOBS_KEY, &json);
        }
    }
}
