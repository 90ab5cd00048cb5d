use std::time::Duration;

use crate::model::{CandidateId, CvId, FileUpload, JobDraft, JobId, JobPosting, UploadedCv};
use crate::route::Route;

/// Paginated lists on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Jobs,
    Uploads,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session contents read from the store at startup.
    SessionRestored {
        logged_in: bool,
        jobs: Vec<JobPosting>,
        uploads: Vec<UploadedCv>,
    },
    /// User submitted the login form.
    LoginSubmitted { username: String, password: String },
    /// Credential check finished.
    LoginResolved { accepted: bool },
    LogoutClicked,
    /// User followed a dashboard link.
    Navigated(Route),
    PageChanged { list: ListKind, page: usize },
    /// User submitted the new-job form.
    JobSubmitted(JobDraft),
    /// User saved the edit dialog for an existing job.
    JobEdited(JobPosting),
    JobDeleteClicked(JobId),
    /// Job store contents after a write.
    JobsChanged(Vec<JobPosting>),
    /// User picked files in the upload dialog.
    FilesChosen(Vec<FileUpload>),
    /// User confirmed deletion of one or more uploaded CVs.
    CvDeleteClicked(Vec<CvId>),
    /// Upload store contents after a write or a finished upload.
    UploadsChanged(Vec<UploadedCv>),
    /// Scan workflow opened for a job; `None` picks the first job.
    ScanOpened { job_id: Option<JobId> },
    CvSearchChanged(String),
    CvToggled(CvId),
    CvRemoved(CvId),
    /// User closed the CV picker with a selection.
    CvsConfirmed,
    ClearAllClicked,
    StartAnalysisClicked,
    StartOverClicked,
    CandidateOpened(CandidateId),
    CandidateClosed,
    /// Wall-clock time elapsed since the previous tick.
    Tick(Duration),
    NoOp,
}
