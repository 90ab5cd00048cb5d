use std::fmt::Write as _;

use recruit_core::{AppViewModel, CandidateReport, ScanPhase, ScanView, Screen, Tab};

const PROGRESS_WIDTH: usize = 20;

/// Renders the view model as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match view.screen {
        Screen::Login => render_login(&mut out, view),
        Screen::Dashboard => {
            let _ = writeln!(out, "== {} ==", tab_label(view.tab));
            match view.tab {
                Tab::Dashboard => render_summary(&mut out, view),
                Tab::Upload => render_uploads(&mut out, view),
                Tab::Jobs => render_jobs(&mut out, view),
                Tab::Candidates => render_scan(&mut out, &view.scan),
            }
            if let Some(report) = &view.candidate {
                render_candidate(&mut out, report);
            }
        }
    }
    out
}

fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Dashboard => "Dashboard",
        Tab::Upload => "Upload CVs",
        Tab::Jobs => "Job Descriptions",
        Tab::Candidates => "Candidates",
    }
}

fn render_login(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(out, "== Login ==");
    if view.login_pending {
        let _ = writeln!(out, "Signing in...");
    }
    if let Some(error) = &view.login_error {
        let _ = writeln!(out, "! {error}");
    }
    let _ = writeln!(out, "Use `login <user> <pass>`.");
}

fn render_summary(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(out, "Open positions: {}", view.jobs.total_items);
    let _ = writeln!(out, "CVs on file:    {}", view.uploads.total_items);
}

fn render_jobs(out: &mut String, view: &AppViewModel) {
    for job in &view.jobs.items {
        let _ = writeln!(
            out,
            "[{}] {} | {} | {} | {}",
            job.id,
            job.title,
            job.location,
            job.job_type,
            job.skills.join(", ")
        );
    }
    let _ = writeln!(
        out,
        "page {}/{} ({} jobs)",
        view.jobs.number, view.jobs.total_pages, view.jobs.total_items
    );
}

fn render_uploads(out: &mut String, view: &AppViewModel) {
    for cv in &view.uploads.items {
        let state = if cv.is_loading { " (uploading)" } else { "" };
        let _ = writeln!(
            out,
            "[{}] {} | {} | {}{state}",
            cv.id, cv.name, cv.size, cv.upload_date
        );
    }
    let _ = writeln!(
        out,
        "page {}/{} ({} CVs)",
        view.uploads.number, view.uploads.total_pages, view.uploads.total_items
    );
}

fn render_scan(out: &mut String, scan: &ScanView) {
    match &scan.job {
        Some(job) if scan.show_job_card => {
            let _ = writeln!(out, "Job: {} ({}, {})", job.title, job.location, job.job_type);
            let _ = writeln!(out, "Skills: {}", job.skills.join(", "));
        }
        Some(job) => {
            let _ = writeln!(out, "Candidates for {}", job.title);
        }
        None => {
            let _ = writeln!(out, "Loading job...");
        }
    }

    match scan.phase {
        ScanPhase::Idle | ScanPhase::Selecting => {
            if !scan.search.is_empty() {
                let _ = writeln!(out, "Search: {:?}", scan.search);
            }
            for cv in &scan.available {
                let mark = if scan.selected.iter().any(|s| s.id == cv.id) {
                    "x"
                } else {
                    " "
                };
                let _ = writeln!(out, " [{mark}] {} {}", cv.id, cv.name);
            }
            let _ = writeln!(out, "{} CV(s) selected", scan.selected.len());
        }
        ScanPhase::Analyzing => {
            let filled = usize::from(scan.progress) * PROGRESS_WIDTH / 100;
            let _ = writeln!(
                out,
                "[{}{}] {:>3}% {}",
                "#".repeat(filled),
                "-".repeat(PROGRESS_WIDTH - filled),
                scan.progress,
                scan.status_message.unwrap_or_default()
            );
        }
        ScanPhase::Analyzed => {
            if let Some(results) = &scan.results {
                let _ = writeln!(out, "Shortlisted ({}):", results.shortlisted.len());
                for c in &results.shortlisted {
                    let _ = writeln!(out, "  [{}] {} - {}%", c.id, c.name, c.score);
                }
                let _ = writeln!(out, "Not shortlisted ({}):", results.not_shortlisted.len());
                for c in &results.not_shortlisted {
                    let _ = writeln!(out, "  [{}] {} - {}%", c.id, c.name, c.score);
                }
            }
        }
    }
}

fn render_candidate(out: &mut String, report: &CandidateReport) {
    let c = &report.candidate;
    let _ = writeln!(out, "-- {} ({}%) --", c.name, c.score);
    let _ = writeln!(out, "{} at {}, {}", c.current_role, c.current_company, c.experience);
    let _ = writeln!(out, "{} | {}", c.email, c.phone);
    let _ = writeln!(
        out,
        "Matched {} of {} required skills.",
        report.skills.matched, report.skills.required
    );
    if !report.shortlisted && !report.skills.gaps.is_empty() {
        let _ = writeln!(out, "Development areas: {}.", report.skills.gaps.join(", "));
    }
    if report.certification_count > 0 {
        let _ = writeln!(out, "Holds {} certification(s).", report.certification_count);
    }
    let _ = writeln!(out, "Recommendation: {}", report.recommendation);
}
