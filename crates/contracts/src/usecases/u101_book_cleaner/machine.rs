use crate::domain::a002_job::{Job, JobDraft};
use crate::domain::common::EntityId;
use crate::usecases::common::UseCaseError;

/// How the employer supplies the job at step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingMode {
    /// Pick one of the employer's open jobs.
    Existing,
    /// Fill a new job form.
    Create,
}

/// Linear wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ModeSelect,
    JobChoice,
    Confirm,
}

impl WizardStep {
    /// 1-based index for the progress header.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::ModeSelect => 1,
            WizardStep::JobChoice => 2,
            WizardStep::Confirm => 3,
        }
    }
}

/// Ordered gateway writes for a confirmed booking.
///
/// Executed strictly in sequence by the caller: job creation (create mode
/// only) must succeed before the booking is created, and only then is the
/// job patched to taken. A failure halts the sequence; earlier writes are
/// not rolled back.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// CreateBooking(job) then MarkJobTaken(job).
    Existing { job_id: EntityId },
    /// CreateJob(draft) then CreateBooking(new id) then MarkJobTaken.
    Create { draft: JobDraft },
}

/// How a finished submit sequence reads to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Booked,
    /// The creation call reported a duplicate. The job is booked either
    /// way; surfaced as a distinct notice, not a failure.
    AlreadyBooked,
    /// Booking exists but the final status patch failed. Partial success,
    /// shown as a warning.
    StatusPatchFailed(String),
}

/// The 3-step booking flow. Holds no remote state; pages feed it the open
/// jobs list and execute the plan it yields.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    pub cleaner_id: EntityId,
    step: WizardStep,
    mode: Option<BookingMode>,
    selected_job: Option<Job>,
    pub draft: JobDraft,
    completed: bool,
}

impl BookingWizard {
    pub fn new(cleaner_id: EntityId) -> Self {
        Self {
            cleaner_id,
            step: WizardStep::ModeSelect,
            mode: None,
            selected_job: None,
            draft: JobDraft::default(),
            completed: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn mode(&self) -> Option<BookingMode> {
        self.mode
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.selected_job.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Step 1 -> 2. Picking "existing" with no open jobs lands in create
    /// mode instead; an empty choose-a-job screen is never shown. Returns
    /// true when that redirect happened so the page can explain it.
    pub fn pick_mode(&mut self, mode: BookingMode, open_jobs_empty: bool) -> bool {
        let redirected = mode == BookingMode::Existing && open_jobs_empty;
        self.mode = Some(if redirected { BookingMode::Create } else { mode });
        self.step = WizardStep::JobChoice;
        redirected
    }

    /// Step 2 -> 3 in existing mode.
    pub fn select_job(&mut self, job: Job) -> Result<(), UseCaseError> {
        if self.step != WizardStep::JobChoice || self.mode != Some(BookingMode::Existing) {
            return Err(UseCaseError::validation("No job selection at this step"));
        }
        if !job.is_open() {
            return Err(UseCaseError::validation("This job is no longer open"));
        }
        self.selected_job = Some(job);
        self.step = WizardStep::Confirm;
        Ok(())
    }

    /// Step 2 -> 3 in create mode; the draft must validate first.
    pub fn advance_with_draft(&mut self) -> Result<(), UseCaseError> {
        if self.step != WizardStep::JobChoice || self.mode != Some(BookingMode::Create) {
            return Err(UseCaseError::validation("No job form at this step"));
        }
        self.draft
            .validate()
            .map_err(UseCaseError::validation)?;
        self.step = WizardStep::Confirm;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::ModeSelect | WizardStep::JobChoice => WizardStep::ModeSelect,
            WizardStep::Confirm => WizardStep::JobChoice,
        };
    }

    /// Terminal action, only from step 3 and only once.
    pub fn submit_plan(&self) -> Result<SubmitPlan, UseCaseError> {
        if self.completed {
            return Err(UseCaseError::validation("Booking already submitted"));
        }
        if self.step != WizardStep::Confirm {
            return Err(UseCaseError::validation("Nothing to submit yet"));
        }
        match self.mode {
            Some(BookingMode::Existing) => {
                let job = self
                    .selected_job
                    .as_ref()
                    .ok_or_else(|| UseCaseError::validation("No job selected"))?;
                Ok(SubmitPlan::Existing { job_id: job.id })
            }
            Some(BookingMode::Create) => {
                self.draft.validate().map_err(UseCaseError::validation)?;
                Ok(SubmitPlan::Create {
                    draft: self.draft.clone(),
                })
            }
            None => Err(UseCaseError::validation("No booking mode chosen")),
        }
    }

    /// Lock the wizard after a successful (or already-booked) submit so a
    /// second click cannot re-run the sequence.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::JobStatus;

    fn open_job(id: EntityId) -> Job {
        Job {
            id,
            title: "Weekly clean".into(),
            status: JobStatus::Open,
            ..Job::default()
        }
    }

    fn valid_draft() -> JobDraft {
        JobDraft {
            title: "Deep clean".into(),
            description: "Flat".into(),
            location: "Cambridge".into(),
            date: "2025-03-01".into(),
            time: "09:00".into(),
            services: vec!["deep-clean".into()],
            ..JobDraft::default()
        }
    }

    #[test]
    fn test_existing_with_no_open_jobs_redirects_to_create() {
        let mut wizard = BookingWizard::new(7);
        let redirected = wizard.pick_mode(BookingMode::Existing, true);
        assert!(redirected);
        assert_eq!(wizard.step(), WizardStep::JobChoice);
        assert_eq!(wizard.mode(), Some(BookingMode::Create));
    }

    #[test]
    fn test_existing_with_open_jobs_stays_existing() {
        let mut wizard = BookingWizard::new(7);
        assert!(!wizard.pick_mode(BookingMode::Existing, false));
        assert_eq!(wizard.mode(), Some(BookingMode::Existing));
    }

    #[test]
    fn test_happy_path_existing() {
        let mut wizard = BookingWizard::new(7);
        wizard.pick_mode(BookingMode::Existing, false);
        wizard.select_job(open_job(42)).unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirm);
        assert_eq!(
            wizard.submit_plan().unwrap(),
            SubmitPlan::Existing { job_id: 42 }
        );
    }

    #[test]
    fn test_taken_job_not_selectable() {
        let mut wizard = BookingWizard::new(7);
        wizard.pick_mode(BookingMode::Existing, false);
        let mut job = open_job(42);
        job.status = JobStatus::Taken;
        assert!(wizard.select_job(job).is_err());
        assert_eq!(wizard.step(), WizardStep::JobChoice);
    }

    #[test]
    fn test_create_mode_requires_valid_draft() {
        let mut wizard = BookingWizard::new(7);
        wizard.pick_mode(BookingMode::Create, true);
        assert!(wizard.advance_with_draft().is_err());

        wizard.draft = valid_draft();
        wizard.advance_with_draft().unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirm);
    }

    #[test]
    fn test_create_plan_orders_job_creation_first() {
        // the plan shape itself guarantees no booking call can be issued
        // unless job creation succeeded: the executor has no job id until
        // then
        let mut wizard = BookingWizard::new(7);
        wizard.pick_mode(BookingMode::Create, true);
        wizard.draft = valid_draft();
        wizard.advance_with_draft().unwrap();
        match wizard.submit_plan().unwrap() {
            SubmitPlan::Create { draft } => assert_eq!(draft.title, "Deep clean"),
            other => panic!("unexpected plan: {:?}", other),
        }
    }

    #[test]
    fn test_back_returns_to_job_choice() {
        let mut wizard = BookingWizard::new(7);
        wizard.pick_mode(BookingMode::Existing, false);
        wizard.select_job(open_job(1)).unwrap();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::JobChoice);
        assert!(wizard.submit_plan().is_err());
    }

    #[test]
    fn test_no_submit_before_confirm_or_after_completion() {
        let mut wizard = BookingWizard::new(7);
        assert!(wizard.submit_plan().is_err());

        wizard.pick_mode(BookingMode::Existing, false);
        wizard.select_job(open_job(1)).unwrap();
        assert!(wizard.submit_plan().is_ok());

        wizard.mark_completed();
        assert!(wizard.submit_plan().is_err());
    }
}
