use crate::catalog::{candidates, sample_uploads};
use crate::matching::CandidateReport;
use crate::model::{JobPosting, UploadedCv};
use crate::route::Tab;
use crate::selection::filter_by_name;
use crate::shortlist::{partition, Shortlist};
use crate::{AppState, ScanPhase};

pub const JOBS_PER_PAGE: usize = 4;
pub const UPLOADS_PER_PAGE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
}

/// One page of a list. `number` is 1-based and always within `1..=total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            number: 1,
            total_pages: 1,
            total_items: 0,
        }
    }
}

pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let number = page.clamp(1, total_pages);
    let start = (number - 1) * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        number,
        total_pages,
        total_items: items.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanView {
    pub job: Option<JobPosting>,
    pub show_job_card: bool,
    pub search: String,
    /// Available CVs matching the search term.
    pub available: Vec<UploadedCv>,
    pub selected: Vec<UploadedCv>,
    pub phase: ScanPhase,
    pub progress: u8,
    pub status_message: Option<&'static str>,
    /// Present once the analysis has finished.
    pub results: Option<Shortlist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub tab: Tab,
    pub login_pending: bool,
    pub login_error: Option<String>,
    pub jobs: Page<JobPosting>,
    pub uploads: Page<UploadedCv>,
    pub scan: ScanView,
    pub candidate: Option<CandidateReport>,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let screen = if self.logged_in {
            Screen::Dashboard
        } else {
            Screen::Login
        };

        let mut upload_rows = sample_uploads();
        upload_rows.extend(self.uploads.iter().cloned());

        let job = self.selected_job().cloned();
        let phase = self.phase();
        let results = (phase == ScanPhase::Analyzed).then(|| partition(&candidates()));
        let candidate = self.inspected.and_then(|id| {
            candidates()
                .iter()
                .find(|c| c.id == id)
                .map(|c| CandidateReport::new(c, job.as_ref()))
        });

        AppViewModel {
            screen,
            tab: self.route.tab,
            login_pending: self.login_pending,
            login_error: self.login_error.clone(),
            jobs: paginate(&self.jobs, self.job_page, JOBS_PER_PAGE),
            uploads: paginate(&upload_rows, self.upload_page, UPLOADS_PER_PAGE),
            scan: ScanView {
                job,
                show_job_card: self.scan.show_job_card,
                search: self.scan.search.clone(),
                available: filter_by_name(&self.available_cvs(), &self.scan.search),
                selected: self.scan.selection.items().to_vec(),
                phase,
                progress: self.scan.simulator.progress(),
                status_message: self.scan.simulator.status_message(),
                results,
            },
            candidate,
        }
    }
}
