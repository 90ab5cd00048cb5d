use serde::Serialize;

use crate::model::Candidate;

/// Minimum score for a candidate to be recommended.
pub const SHORTLIST_THRESHOLD: u8 = 75;

impl Candidate {
    pub fn is_shortlisted(&self) -> bool {
        self.score >= SHORTLIST_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Shortlist {
    pub shortlisted: Vec<Candidate>,
    pub not_shortlisted: Vec<Candidate>,
}

impl Shortlist {
    pub fn total(&self) -> usize {
        self.shortlisted.len() + self.not_shortlisted.len()
    }
}

/// Stable split of `candidates` on the shortlist threshold.
pub fn partition(candidates: &[Candidate]) -> Shortlist {
    let (shortlisted, not_shortlisted) = candidates
        .iter()
        .cloned()
        .partition(Candidate::is_shortlisted);
    Shortlist {
        shortlisted,
        not_shortlisted,
    }
}
