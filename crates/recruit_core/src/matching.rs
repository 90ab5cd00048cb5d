use serde::Serialize;

use crate::model::{Candidate, JobPosting};

const PROCEED_RECOMMENDATION: &str = "Proceed with the technical interview.";
const DEFER_RECOMMENDATION: &str = "Consider for future opportunities after skill enhancement.";

/// Exact-name overlap between a job's required skills and a candidate's skills.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SkillMatch {
    pub matched: usize,
    pub required: usize,
    /// Required skills the candidate does not list, in job order.
    pub gaps: Vec<String>,
}

impl SkillMatch {
    pub fn compute(required: &[String], offered: &[String]) -> Self {
        let mut unique: Vec<&String> = Vec::with_capacity(required.len());
        for skill in required {
            if !unique.contains(&skill) {
                unique.push(skill);
            }
        }
        let (present, missing): (Vec<&String>, Vec<&String>) =
            unique.into_iter().partition(|skill| offered.contains(*skill));
        let matched = present.len();
        let required = matched + missing.len();
        let gaps = missing.into_iter().cloned().collect();
        Self {
            matched,
            required,
            gaps,
        }
    }
}

/// Detail panel for one candidate against the job being scanned for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateReport {
    pub candidate: Candidate,
    pub shortlisted: bool,
    pub skills: SkillMatch,
    pub certification_count: usize,
    pub recommendation: &'static str,
}

impl CandidateReport {
    pub fn new(candidate: &Candidate, job: Option<&JobPosting>) -> Self {
        let required: &[String] = job.map(|job| job.skills.as_slice()).unwrap_or(&[]);
        let shortlisted = candidate.is_shortlisted();
        Self {
            candidate: candidate.clone(),
            shortlisted,
            skills: SkillMatch::compute(required, &candidate.skills),
            certification_count: candidate.certifications.len(),
            recommendation: if shortlisted {
                PROCEED_RECOMMENDATION
            } else {
                DEFER_RECOMMENDATION
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{candidates, seed_jobs};

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_intersection_and_lists_gaps_in_job_order() {
        let result = SkillMatch::compute(
            &owned(&["React", "Go", "SQL", "React"]),
            &owned(&["SQL", "React", "Python"]),
        );
        assert_eq!(result.matched, 2);
        assert_eq!(result.required, 3);
        assert_eq!(result.gaps, owned(&["Go"]));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let result = SkillMatch::compute(&owned(&["react"]), &owned(&["React"]));
        assert_eq!(result.matched, 0);
        assert_eq!(result.gaps, owned(&["react"]));
    }

    #[test]
    fn report_for_low_scorer_defers() {
        let job = &seed_jobs()[0];
        let lisa = candidates().into_iter().find(|c| c.id == 6).unwrap();
        let report = CandidateReport::new(&lisa, Some(job));
        assert!(!report.shortlisted);
        assert_eq!(report.skills.matched, 1);
        assert_eq!(report.skills.gaps, owned(&["TypeScript", "Node.js"]));
        assert_eq!(report.recommendation, DEFER_RECOMMENDATION);
    }

    #[test]
    fn report_without_job_has_no_requirements() {
        let john = &candidates()[0];
        let report = CandidateReport::new(john, None);
        assert_eq!(report.skills, SkillMatch::default());
        assert_eq!(report.certification_count, 2);
        assert_eq!(report.recommendation, PROCEED_RECOMMENDATION);
    }
}
