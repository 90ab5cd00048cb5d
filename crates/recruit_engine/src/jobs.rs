use std::sync::Arc;

use recruit_core::{seed_jobs, JobDraft, JobId, JobPosting};
use recruit_logging::{recruit_debug, recruit_info};

use crate::clock::Clock;
use crate::error::JobError;
use crate::store::{SessionStore, JOBS_KEY};

/// Job postings kept under the `jobs` key, newest first.
#[derive(Clone)]
pub struct JobBoard {
    store: SessionStore,
    clock: Arc<dyn Clock>,
}

impl JobBoard {
    pub fn new(store: SessionStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Current postings, seeding and persisting the demo set if the store is empty.
    pub fn load(&self) -> Result<Vec<JobPosting>, JobError> {
        let seeded = self.store.modify_if(JOBS_KEY, |jobs: &mut Vec<JobPosting>| {
            if !jobs.is_empty() {
                return None;
            }
            *jobs = seed_jobs();
            Some(jobs.clone())
        })?;
        match seeded {
            Some(jobs) => {
                recruit_info!("Seeded job store with {} postings", jobs.len());
                Ok(jobs)
            }
            None => Ok(self.store.load(JOBS_KEY)),
        }
    }

    /// Stores `draft` at the front of the list under a fresh time-derived id.
    pub fn create(&self, draft: JobDraft) -> Result<JobPosting, JobError> {
        let now = self.clock.now_millis();
        let posting = self.store.modify(JOBS_KEY, |jobs: &mut Vec<JobPosting>| {
            let floor = jobs.iter().map(|job| job.id + 1).max().unwrap_or(0);
            let posting = draft.into_posting(now.max(floor));
            jobs.insert(0, posting.clone());
            posting
        })?;
        recruit_info!("Created job {} ({:?})", posting.id, posting.title);
        Ok(posting)
    }

    /// Replaces the stored job that has the same id.
    pub fn update(&self, job: JobPosting) -> Result<(), JobError> {
        let id = job.id;
        let replaced = self.store.modify_if(JOBS_KEY, |jobs: &mut Vec<JobPosting>| {
            let slot = jobs.iter_mut().find(|existing| existing.id == id)?;
            *slot = job;
            Some(())
        })?;
        replaced.ok_or(JobError::NotFound(id))?;
        recruit_debug!("Updated job {id}");
        Ok(())
    }

    /// Removes the job with `id`. Missing ids are ignored.
    pub fn delete(&self, id: JobId) -> Result<bool, JobError> {
        let removed = self.store.modify_if(JOBS_KEY, |jobs: &mut Vec<JobPosting>| {
            let before = jobs.len();
            jobs.retain(|job| job.id != id);
            (jobs.len() != before).then_some(())
        })?;
        if removed.is_some() {
            recruit_info!("Deleted job {id}");
        }
        Ok(removed.is_some())
    }

    pub fn list(&self) -> Vec<JobPosting> {
        self.store.load(JOBS_KEY)
    }
}
