use crate::catalog::candidates;
use crate::route::{Route, Tab};
use crate::shortlist::partition;
use crate::{AppState, Effect, Msg, ScanPhase};

pub const EMPTY_CREDENTIALS_MESSAGE: &str = "Please enter both username and password";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if !state.logged_in && requires_login(&msg) {
        // Logged-out navigation lands on the login route.
        if matches!(msg, Msg::Navigated(_)) && state.route != Route::default() {
            state.route = Route::default();
            state.mark_dirty();
        }
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::SessionRestored {
            logged_in,
            jobs,
            uploads,
        } => {
            state.logged_in = logged_in;
            state.set_jobs(jobs);
            state.set_uploads(uploads);
            Vec::new()
        }
        Msg::LoginSubmitted { username, password } => {
            if state.login_pending {
                return (state, Vec::new());
            }
            state.mark_dirty();
            if username.is_empty() || password.is_empty() {
                state.login_error = Some(EMPTY_CREDENTIALS_MESSAGE.to_string());
                return (state, Vec::new());
            }
            state.login_pending = true;
            state.login_error = None;
            vec![Effect::CheckCredentials { username, password }]
        }
        Msg::LoginResolved { accepted } => {
            state.login_pending = false;
            state.logged_in = accepted;
            if accepted {
                state.login_error = None;
                state.route = Route::default();
            } else {
                state.login_error = Some(INVALID_CREDENTIALS_MESSAGE.to_string());
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::LogoutClicked => {
            if !state.logged_in {
                return (state, Vec::new());
            }
            state.logged_in = false;
            state.route = Route::default();
            state.reset_scan();
            vec![Effect::Logout]
        }
        Msg::Navigated(route) => {
            state.route = route;
            state.inspected = None;
            if let Some(job_id) = route.job_id {
                state.scan.job_id = Some(job_id);
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::PageChanged { list, page } => {
            state.set_page(list, page);
            Vec::new()
        }
        Msg::JobSubmitted(draft) => {
            if draft.title.trim().is_empty() {
                return (state, Vec::new());
            }
            state.route = Route::tab(Tab::Jobs);
            state.mark_dirty();
            vec![Effect::CreateJob(draft)]
        }
        Msg::JobEdited(job) => vec![Effect::SaveJob(job)],
        Msg::JobDeleteClicked(job_id) => vec![Effect::DeleteJob(job_id)],
        Msg::JobsChanged(jobs) => {
            state.set_jobs(jobs);
            Vec::new()
        }
        Msg::FilesChosen(files) => {
            if files.is_empty() {
                return (state, Vec::new());
            }
            vec![Effect::UploadCvs(files)]
        }
        Msg::CvDeleteClicked(ids) => {
            if ids.is_empty() {
                return (state, Vec::new());
            }
            vec![Effect::DeleteCvs(ids)]
        }
        Msg::UploadsChanged(uploads) => {
            let grew = uploads.len() > state.uploads.len();
            state.set_uploads(uploads);
            if grew {
                state.upload_page = state.last_upload_page();
            }
            Vec::new()
        }
        Msg::ScanOpened { job_id } => {
            state.route = Route {
                tab: Tab::Candidates,
                job_id,
            };
            state.scan.job_id = job_id;
            state.mark_dirty();
            Vec::new()
        }
        Msg::CvSearchChanged(term) => {
            state.scan.search = term;
            state.mark_dirty();
            Vec::new()
        }
        Msg::CvToggled(cv_id) => {
            if selection_locked(&state) {
                return (state, Vec::new());
            }
            let Some(cv) = state.available_cvs().into_iter().find(|cv| cv.id == cv_id) else {
                return (state, Vec::new());
            };
            state.scan.selection.toggle(&cv);
            state.mark_dirty();
            Vec::new()
        }
        Msg::CvRemoved(cv_id) => {
            if !selection_locked(&state) && state.scan.selection.remove(&cv_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CvsConfirmed => {
            if state.phase() == ScanPhase::Selecting {
                state.scan.show_job_card = false;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClearAllClicked | Msg::StartOverClicked => {
            state.reset_scan();
            Vec::new()
        }
        Msg::StartAnalysisClicked => {
            if state.phase() != ScanPhase::Selecting || !state.scan.simulator.start() {
                return (state, Vec::new());
            }
            state.scan.show_job_card = false;
            state.mark_dirty();
            vec![Effect::AnalysisStarted {
                cv_count: state.scan.selection.len(),
            }]
        }
        Msg::CandidateOpened(candidate_id) => {
            if candidates().iter().any(|c| c.id == candidate_id) {
                state.inspected = Some(candidate_id);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CandidateClosed => {
            if state.inspected.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick(delta) => {
            let report = state.advance_clock(delta);
            if report.completed {
                let results = partition(&candidates());
                vec![Effect::AnalysisCompleted {
                    shortlisted: results.shortlisted.len(),
                    not_shortlisted: results.not_shortlisted.len(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Dashboard actions. Session, login, store refresh and clock messages pass
/// through while logged out.
fn requires_login(msg: &Msg) -> bool {
    !matches!(
        msg,
        Msg::SessionRestored { .. }
            | Msg::LoginSubmitted { .. }
            | Msg::LoginResolved { .. }
            | Msg::LogoutClicked
            | Msg::JobsChanged(_)
            | Msg::UploadsChanged(_)
            | Msg::Tick(_)
            | Msg::NoOp
    )
}

/// A running analysis is not cancellable, so its selection is frozen.
fn selection_locked(state: &AppState) -> bool {
    state.phase() == ScanPhase::Analyzing
}
