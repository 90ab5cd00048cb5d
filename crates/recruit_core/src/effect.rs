use crate::model::{CvId, FileUpload, JobDraft, JobId, JobPosting};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CheckCredentials { username: String, password: String },
    Logout,
    CreateJob(JobDraft),
    SaveJob(JobPosting),
    DeleteJob(JobId),
    UploadCvs(Vec<FileUpload>),
    DeleteCvs(Vec<CvId>),
    AnalysisStarted { cv_count: usize },
    AnalysisCompleted {
        shortlisted: usize,
        not_shortlisted: usize,
    },
}
