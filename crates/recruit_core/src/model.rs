use std::fmt;

use serde::{Deserialize, Serialize};

pub type JobId = u64;
pub type CvId = String;
pub type CandidateId = u32;

/// Employment type offered by a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Remote,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub about: String,
    pub responsibilities: String,
    pub qualifications: String,
    pub skills: Vec<String>,
}

/// Form contents for a new posting. Skills are entered comma-separated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDraft {
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub about: String,
    pub responsibilities: String,
    pub qualifications: String,
    pub skills: String,
}

impl JobDraft {
    pub fn skills(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    pub fn into_posting(self, id: JobId) -> JobPosting {
        let skills = self.skills();
        JobPosting {
            id,
            title: self.title,
            location: self.location,
            job_type: self.job_type,
            about: self.about,
            responsibilities: self.responsibilities,
            qualifications: self.qualifications,
            skills,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedCv {
    pub id: CvId,
    pub name: String,
    pub size: String,
    pub upload_date: String,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// A file picked by the user, before it becomes an [`UploadedCv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub score: u8,
    pub experience: String,
    pub current_role: String,
    pub current_company: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub education: String,
    pub university: String,
    pub github: String,
    pub linkedin: String,
    pub summary: String,
}
