use std::time::Duration;

use crate::analysis::{AnalysisTiming, Simulator, StepReport};
use crate::catalog::{sample_uploads, static_cvs};
use crate::model::{CandidateId, JobId, JobPosting, UploadedCv};
use crate::msg::ListKind;
use crate::route::Route;
use crate::selection::CvSelection;
use crate::view_model::UPLOADS_PER_PAGE;

/// Scan workflow phase, derived from the selection and the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Selecting,
    Analyzing,
    Analyzed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanState {
    pub(crate) job_id: Option<JobId>,
    pub(crate) search: String,
    pub(crate) selection: CvSelection,
    pub(crate) show_job_card: bool,
    pub(crate) simulator: Simulator,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            job_id: None,
            search: String::new(),
            selection: CvSelection::new(),
            show_job_card: true,
            simulator: Simulator::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) logged_in: bool,
    pub(crate) login_pending: bool,
    pub(crate) login_error: Option<String>,
    pub(crate) route: Route,
    pub(crate) jobs: Vec<JobPosting>,
    pub(crate) uploads: Vec<UploadedCv>,
    pub(crate) scan: ScanState,
    pub(crate) inspected: Option<CandidateId>,
    pub(crate) job_page: usize,
    pub(crate) upload_page: usize,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            logged_in: false,
            login_pending: false,
            login_error: None,
            route: Route::default(),
            jobs: Vec::new(),
            uploads: Vec::new(),
            scan: ScanState::default(),
            inspected: None,
            job_page: 1,
            upload_page: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: AnalysisTiming) -> Self {
        let mut state = Self::default();
        state.scan.simulator = Simulator::new(timing);
        state
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn uploads(&self) -> &[UploadedCv] {
        &self.uploads
    }

    pub fn selection(&self) -> &CvSelection {
        &self.scan.selection
    }

    pub fn simulator(&self) -> &Simulator {
        &self.scan.simulator
    }

    pub fn phase(&self) -> ScanPhase {
        let sim = &self.scan.simulator;
        if sim.is_running() {
            ScanPhase::Analyzing
        } else if sim.is_done() {
            ScanPhase::Analyzed
        } else if self.scan.selection.is_empty() {
            ScanPhase::Idle
        } else {
            ScanPhase::Selecting
        }
    }

    /// Persisted uploads followed by the static catalog.
    pub fn available_cvs(&self) -> Vec<UploadedCv> {
        let mut cvs = self.uploads.clone();
        cvs.extend(static_cvs());
        cvs
    }

    pub fn selected_job(&self) -> Option<&JobPosting> {
        find_or_first(&self.jobs, self.scan.job_id)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_jobs(&mut self, jobs: Vec<JobPosting>) {
        self.jobs = jobs;
        self.mark_dirty();
    }

    /// Replaces the upload list, drops selected CVs that vanished from it and
    /// refreshes the rest.
    pub(crate) fn set_uploads(&mut self, uploads: Vec<UploadedCv>) -> usize {
        self.uploads = uploads;
        let available = self.available_cvs();
        let pruned = self.scan.selection.retain_available(&available);
        self.mark_dirty();
        pruned
    }

    /// Page holding the newest upload on the upload tab.
    pub(crate) fn last_upload_page(&self) -> usize {
        (sample_uploads().len() + self.uploads.len())
            .div_ceil(UPLOADS_PER_PAGE)
            .max(1)
    }

    pub(crate) fn set_page(&mut self, list: ListKind, page: usize) {
        let page = page.max(1);
        match list {
            ListKind::Jobs => self.job_page = page,
            ListKind::Uploads => self.upload_page = page,
        }
        self.mark_dirty();
    }

    pub(crate) fn reset_scan(&mut self) {
        self.scan.selection.clear();
        self.scan.show_job_card = true;
        self.scan.simulator.reset();
        self.inspected = None;
        self.mark_dirty();
    }

    pub(crate) fn advance_clock(&mut self, delta: Duration) -> StepReport {
        let report = self.scan.simulator.advance(delta);
        if report.changed() {
            self.mark_dirty();
        }
        report
    }
}

/// The job with `job_id`, else the first job, else `None`.
pub fn find_or_first(jobs: &[JobPosting], job_id: Option<JobId>) -> Option<&JobPosting> {
    job_id
        .and_then(|id| jobs.iter().find(|job| job.id == id))
        .or_else(|| jobs.first())
}
