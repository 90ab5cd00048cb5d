//! Recruiting dashboard core: pure state machine, static catalog and view-model helpers.
mod analysis;
mod catalog;
mod effect;
mod matching;
mod model;
mod msg;
mod route;
mod selection;
mod shortlist;
mod state;
mod update;
mod view_model;

pub use analysis::{AnalysisTiming, Simulator, StepReport, PROGRESS_STEP};
pub use catalog::{
    candidates, sample_uploads, seed_jobs, static_cvs, STATUS_MESSAGES, VALID_PASSWORD,
    VALID_USERNAME,
};
pub use effect::Effect;
pub use matching::{CandidateReport, SkillMatch};
pub use model::{
    Candidate, CandidateId, CvId, FileUpload, JobDraft, JobId, JobPosting, JobType, UploadedCv,
};
pub use msg::{ListKind, Msg};
pub use route::{Route, Tab};
pub use selection::CvSelection;
pub use shortlist::{partition, Shortlist, SHORTLIST_THRESHOLD};
pub use state::{find_or_first, AppState, ScanPhase};
pub use update::{update, EMPTY_CREDENTIALS_MESSAGE, INVALID_CREDENTIALS_MESSAGE};
pub use view_model::{
    paginate, AppViewModel, Page, ScanView, Screen, JOBS_PER_PAGE, UPLOADS_PER_PAGE,
};
