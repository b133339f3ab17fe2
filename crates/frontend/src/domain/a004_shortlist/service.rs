use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a004_shortlist::{ShortlistSet, ToggleAction};
use contracts::domain::common::EntityId;
use contracts::enums::UserRole;
use contracts::usecases::common::UseCaseError;

use super::api;

/// App-wide shortlist cache. The set itself only ever holds confirmed
/// server rows; a toggle runs the planned call and then re-fetches, so a
/// failed request leaves the cache untouched.
#[derive(Clone, Copy)]
pub struct ShortlistService {
    set: RwSignal<ShortlistSet>,
    loaded: StoredValue<bool>,
}

impl ShortlistService {
    pub fn new() -> Self {
        Self {
            set: RwSignal::new(ShortlistSet::default()),
            loaded: StoredValue::new(false),
        }
    }

    pub fn set(&self) -> RwSignal<ShortlistSet> {
        self.set
    }

    /// Fetch the snapshot once per session; later calls are no-ops.
    pub fn ensure_loaded(&self) {
        if self.loaded.get_value() {
            return;
        }
        self.loaded.set_value(true);
        self.refresh();
    }

    pub fn refresh(&self) {
        let set = self.set;
        spawn_local(async move {
            match api::fetch_shortlist().await {
                Ok(entries) => set.update(|s| s.replace_all(entries)),
                Err(e) => log::warn!("failed to load shortlist: {}", e),
            }
        });
    }

    /// Plan and execute a toggle for one (job, cleaner) key. Planning
    /// failures (anonymous, wrong role, toggle already in flight) come
    /// back synchronously; the remote result arrives via `on_done`.
    pub fn toggle(
        &self,
        job: EntityId,
        cleaner: EntityId,
        role: Option<UserRole>,
        on_done: impl Fn(Result<(), String>) + 'static,
    ) -> Result<(), UseCaseError> {
        let action = self
            .set
            .with_untracked(|s| s.plan_toggle(job, cleaner, role.as_ref()))?;

        let set = self.set;
        let service = *self;
        set.update(|s| s.begin(job, cleaner));
        spawn_local(async move {
            let result = match action {
                ToggleAction::Add { job, cleaner } => {
                    api::add_entry(job, cleaner).await.map(|_| ())
                }
                ToggleAction::Remove { entry_id } => api::delete_entry(entry_id).await,
            };
            set.update(|s| s.finish(job, cleaner));
            if result.is_ok() {
                service.refresh();
            }
            on_done(result);
        });
        Ok(())
    }
}

impl Default for ShortlistService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_shortlist() -> ShortlistService {
    use_context::<ShortlistService>().expect("ShortlistService not found in component tree")
}
