use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::UserRole;
use crate::usecases::common::UseCaseError;

/// One saved (job, cleaner) pairing. The gateway enforces uniqueness per
/// pair; the local cache mirrors that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub id: EntityId,
    pub job: EntityId,
    pub cleaner: EntityId,
}

/// The remote call a toggle requires. The cache itself is never mutated
/// here; callers re-fetch after the call succeeds so local state only ever
/// reflects confirmed server state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleAction {
    /// POST `{job, cleaner}`.
    Add { job: EntityId, cleaner: EntityId },
    /// DELETE by the cached row id.
    Remove { entry_id: EntityId },
}

/// Local cache of shortlist rows plus per-key in-flight locks.
///
/// At most one toggle may be outstanding per (job, cleaner) key; the lock
/// is how the UI keeps the control disabled until the request resolves.
#[derive(Debug, Clone, Default)]
pub struct ShortlistSet {
    entries: Vec<ShortlistEntry>,
    pending: HashSet<(EntityId, EntityId)>,
}

impl ShortlistSet {
    pub fn is_saved(&self, job: EntityId, cleaner: EntityId) -> bool {
        self.entry_id(job, cleaner).is_some()
    }

    pub fn entry_id(&self, job: EntityId, cleaner: EntityId) -> Option<EntityId> {
        self.entries
            .iter()
            .find(|entry| entry.job == job && entry.cleaner == cleaner)
            .map(|entry| entry.id)
    }

    pub fn is_pending(&self, job: EntityId, cleaner: EntityId) -> bool {
        self.pending.contains(&(job, cleaner))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the cache with a fresh server snapshot.
    pub fn replace_all(&mut self, entries: Vec<ShortlistEntry>) {
        self.entries = entries;
    }

    /// Decide what a toggle must do, without touching the cache.
    ///
    /// Fails fast client-side on the cases the gateway would reject anyway:
    /// anonymous users, wrong role, and a toggle already in flight for the
    /// same key.
    pub fn plan_toggle(
        &self,
        job: EntityId,
        cleaner: EntityId,
        role: Option<&UserRole>,
    ) -> Result<ToggleAction, UseCaseError> {
        let role = role.ok_or_else(|| UseCaseError::auth_required("Please login to continue"))?;
        if !role.is_employer() {
            return Err(UseCaseError::role_not_permitted(
                "Only employers can shortlist cleaners",
            ));
        }
        if self.is_pending(job, cleaner) {
            return Err(UseCaseError::validation("Shortlist update already in progress"));
        }
        match self.entry_id(job, cleaner) {
            Some(entry_id) => Ok(ToggleAction::Remove { entry_id }),
            None => Ok(ToggleAction::Add { job, cleaner }),
        }
    }

    /// Mark a toggle as in flight. Must be paired with `finish`.
    pub fn begin(&mut self, job: EntityId, cleaner: EntityId) {
        self.pending.insert((job, cleaner));
    }

    pub fn finish(&mut self, job: EntityId, cleaner: EntityId) {
        self.pending.remove(&(job, cleaner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employer() -> Option<UserRole> {
        Some(UserRole::Employer)
    }

    fn seeded() -> ShortlistSet {
        let mut set = ShortlistSet::default();
        set.replace_all(vec![ShortlistEntry {
            id: 11,
            job: 1,
            cleaner: 2,
        }]);
        set
    }

    #[test]
    fn test_membership() {
        let set = seeded();
        assert!(set.is_saved(1, 2));
        assert!(!set.is_saved(1, 3));
        assert_eq!(set.entry_id(1, 2), Some(11));
    }

    #[test]
    fn test_anonymous_and_wrong_role_refused() {
        let set = seeded();
        assert!(set.plan_toggle(1, 2, None).is_err());
        assert!(set
            .plan_toggle(1, 2, Some(&UserRole::Cleaner))
            .is_err());
    }

    #[test]
    fn test_sequential_toggle_is_idempotent() {
        // toggle twice; exactly two remote calls are planned and the net
        // membership is unchanged once the server snapshots are applied
        let mut set = seeded();
        let role = employer();

        let first = set.plan_toggle(1, 2, role.as_ref()).unwrap();
        assert_eq!(first, ToggleAction::Remove { entry_id: 11 });
        set.begin(1, 2);
        set.finish(1, 2);
        set.replace_all(vec![]); // server snapshot after remove

        let second = set.plan_toggle(1, 2, role.as_ref()).unwrap();
        assert_eq!(second, ToggleAction::Add { job: 1, cleaner: 2 });
        set.begin(1, 2);
        set.finish(1, 2);
        set.replace_all(vec![ShortlistEntry {
            id: 12,
            job: 1,
            cleaner: 2,
        }]);

        assert!(set.is_saved(1, 2));
    }

    #[test]
    fn test_pending_key_locks_second_toggle() {
        let mut set = seeded();
        set.begin(1, 2);
        assert!(set.plan_toggle(1, 2, employer().as_ref()).is_err());
        // other keys stay free
        assert!(set.plan_toggle(1, 3, employer().as_ref()).is_ok());
        set.finish(1, 2);
        assert!(set.plan_toggle(1, 2, employer().as_ref()).is_ok());
    }
}
