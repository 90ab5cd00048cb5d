//! Fixed demo data: seed postings, sample CVs, candidates and status lines.
use crate::model::{Candidate, JobPosting, JobType, UploadedCv};

pub const VALID_USERNAME: &str = "admin";
pub const VALID_PASSWORD: &str = "password";

/// Rotating status lines shown while an analysis runs.
pub const STATUS_MESSAGES: [&str; 5] = [
    "Uploading CV...",
    "Analyzing CV...",
    "Matching skills with job description...",
    "Calculating compatibility score...",
    "Finding the best candidate...",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: u64,
    title: &str,
    location: &str,
    job_type: JobType,
    about: &str,
    responsibilities: &str,
    qualifications: &str,
    skills: &[&str],
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        location: location.to_string(),
        job_type,
        about: about.to_string(),
        responsibilities: responsibilities.to_string(),
        qualifications: qualifications.to_string(),
        skills: strings(skills),
    }
}

/// Postings written to an empty job store on first load.
pub fn seed_jobs() -> Vec<JobPosting> {
    vec![
        posting(
            1,
            "Senior Frontend Developer",
            "Remote",
            JobType::FullTime,
            "We are looking for an experienced Frontend Developer...",
            "Lead frontend development initiatives...",
            "5+ years of experience in frontend development...",
            &["React", "TypeScript", "Node.js"],
        ),
        posting(
            2,
            "Backend Developer",
            "Hybrid",
            JobType::FullTime,
            "We are seeking a skilled Backend Developer...",
            "Develop scalable backend solutions...",
            "3+ years of experience in backend development...",
            &["Node.js", "Express", "MongoDB", "SQL"],
        ),
        posting(
            3,
            "UI/UX Designer",
            "Remote",
            JobType::PartTime,
            "Join our design team to create intuitive user experiences.",
            "Design wireframes and collaborate with developers.",
            "2+ years of experience in UI/UX design.",
            &["Figma", "Adobe XD", "User Research"],
        ),
        posting(
            4,
            "Full Stack Developer",
            "On-site",
            JobType::FullTime,
            "We are looking for a Full Stack Developer to work on cutting-edge web applications.",
            "Develop and maintain both frontend and backend components of web applications.",
            "4+ years of experience in full stack development with React and Node.js.",
            &["React", "Node.js", "TypeScript", "PostgreSQL"],
        ),
        posting(
            5,
            "UI/UX Designer",
            "Remote",
            JobType::PartTime,
            "Join our design team to create intuitive and visually appealing user experiences.",
            "Design wireframes, prototypes, and collaborate with developers for seamless UI implementation.",
            "2+ years of experience in UI/UX design with a strong portfolio.",
            &["Figma", "Adobe XD", "User Research", "Prototyping"],
        ),
    ]
}

fn sample_cv(id: &str, name: &str, size: &str, upload_date: &str) -> UploadedCv {
    UploadedCv {
        id: id.to_string(),
        name: name.to_string(),
        size: size.to_string(),
        upload_date: upload_date.to_string(),
        is_loading: false,
        download_url: None,
    }
}

/// The eight catalog CVs that are always available for scanning.
pub fn static_cvs() -> Vec<UploadedCv> {
    vec![
        sample_cv("d1", "resume_john_smith.pdf", "2.4 MB", "2024-02-20"),
        sample_cv("d2", "sarah_wilson_cv.pdf", "1.8 MB", "2024-02-19"),
        sample_cv("d3", "michael_brown_resume.pdf", "3.1 MB", "2024-02-18"),
        sample_cv("d4", "emma_davis_cv.pdf", "2.2 MB", "2024-02-17"),
        sample_cv("d5", "alex_johnson_resume.pdf", "1.9 MB", "2024-02-16"),
        sample_cv("d6", "olivia_martinez_cv.pdf", "2.5 MB", "2024-02-15"),
        sample_cv("d7", "william_taylor_resume.pdf", "3.0 MB", "2024-02-14"),
        sample_cv("d8", "sophia_anderson_cv.pdf", "2.3 MB", "2024-02-13"),
    ]
}

/// Catalog CVs listed ahead of user uploads on the upload tab.
pub fn sample_uploads() -> Vec<UploadedCv> {
    let mut cvs = static_cvs();
    cvs.truncate(4);
    cvs
}

struct CandidateSeed<'a> {
    id: u32,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    score: u8,
    experience: &'a str,
    current_role: &'a str,
    current_company: &'a str,
    skills: &'a [&'a str],
    certifications: &'a [&'a str],
    education: &'a str,
    university: &'a str,
    handle: &'a str,
    summary: &'a str,
}

impl CandidateSeed<'_> {
    fn build(&self) -> Candidate {
        Candidate {
            id: self.id,
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            score: self.score,
            experience: self.experience.to_string(),
            current_role: self.current_role.to_string(),
            current_company: self.current_company.to_string(),
            skills: strings(self.skills),
            certifications: strings(self.certifications),
            education: self.education.to_string(),
            university: self.university.to_string(),
            github: format!("github.com/{}", self.handle),
            linkedin: format!("linkedin.com/in/{}", self.handle),
            summary: self.summary.to_string(),
        }
    }
}

const CANDIDATES: [CandidateSeed<'static>; 6] = [
    CandidateSeed {
        id: 1,
        name: "John Doe",
        email: "john.doe@email.com",
        phone: "+1 234 567 8900",
        score: 92,
        experience: "7 years",
        current_role: "Lead Frontend Developer",
        current_company: "Digital Innovations",
        skills: &["React", "TypeScript", "Node.js", "Redux", "GraphQL", "AWS"],
        certifications: &["AWS Certified Developer", "React Expert Level 3"],
        education: "MSc Computer Science",
        university: "Stanford University",
        handle: "johndoe",
        summary: "Experienced frontend developer with a strong focus on React ecosystem...",
    },
    CandidateSeed {
        id: 2,
        name: "Sarah Wilson",
        email: "sarah.w@email.com",
        phone: "+1 234 567 8901",
        score: 88,
        experience: "6 years",
        current_role: "Senior Frontend Engineer",
        current_company: "Tech Giants Inc",
        skills: &["React", "TypeScript", "Vue.js", "Node.js", "Jest", "Cypress"],
        certifications: &["Google Cloud Certified", "TypeScript Expert"],
        education: "BSc Software Engineering",
        university: "MIT",
        handle: "sarahw",
        summary: "Frontend specialist with extensive testing and optimization experience...",
    },
    CandidateSeed {
        id: 3,
        name: "Michael Chang",
        email: "m.chang@email.com",
        phone: "+1 234 567 8902",
        score: 85,
        experience: "5 years",
        current_role: "Frontend Developer",
        current_company: "StartupCo",
        skills: &["React", "JavaScript", "Node.js", "Redux", "Tailwind"],
        certifications: &["React Native Specialist"],
        education: "BSc Computer Science",
        university: "Berkeley",
        handle: "mchang",
        summary: "Full-stack developer with a passion for creating responsive web applications...",
    },
    CandidateSeed {
        id: 4,
        name: "Emma Rodriguez",
        email: "emma.r@email.com",
        phone: "+1 234 567 8903",
        score: 72,
        experience: "4 years",
        current_role: "Web Developer",
        current_company: "Creative Solutions",
        skills: &["JavaScript", "React", "CSS", "HTML", "jQuery"],
        certifications: &["Web Development Bootcamp"],
        education: "BA Digital Design",
        university: "NYU",
        handle: "emmar",
        summary: "Creative developer with strong design background...",
    },
    CandidateSeed {
        id: 5,
        name: "David Kim",
        email: "d.kim@email.com",
        phone: "+1 234 567 8904",
        score: 68,
        experience: "3 years",
        current_role: "Junior Frontend Developer",
        current_company: "SmallTech Ltd",
        skills: &["JavaScript", "React", "HTML", "CSS", "Bootstrap"],
        certifications: &[],
        education: "BSc Information Technology",
        university: "UCLA",
        handle: "dkim",
        summary: "Emerging developer with focus on modern JavaScript frameworks...",
    },
    CandidateSeed {
        id: 6,
        name: "Lisa Chen",
        email: "l.chen@email.com",
        phone: "+1 234 567 8905",
        score: 65,
        experience: "2 years",
        current_role: "Frontend Developer",
        current_company: "WebAgency",
        skills: &["JavaScript", "React", "CSS", "Sass"],
        certifications: &["Frontend Fundamentals"],
        education: "BSc Web Development",
        university: "USC",
        handle: "lchen",
        summary: "Detail-oriented developer specializing in responsive design...",
    },
];

/// The fixed candidate pool revealed by every analysis run.
pub fn candidates() -> Vec<Candidate> {
    CANDIDATES.iter().map(CandidateSeed::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let job_ids: HashSet<_> = seed_jobs().iter().map(|job| job.id).collect();
        assert_eq!(job_ids.len(), 5);
        let cv_ids: HashSet<_> = static_cvs().into_iter().map(|cv| cv.id).collect();
        assert_eq!(cv_ids.len(), 8);
        let candidate_ids: HashSet<_> = candidates().iter().map(|c| c.id).collect();
        assert_eq!(candidate_ids.len(), 6);
    }

    #[test]
    fn sample_uploads_are_the_first_four_catalog_cvs() {
        let ids: Vec<_> = sample_uploads().into_iter().map(|cv| cv.id).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3", "d4"]);
    }
}
