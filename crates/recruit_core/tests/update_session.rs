use recruit_core::{
    seed_jobs, update, AppState, Effect, FileUpload, JobDraft, ListKind, Msg, Route, ScanPhase,
    Screen, Tab, UploadedCv, EMPTY_CREDENTIALS_MESSAGE, INVALID_CREDENTIALS_MESSAGE,
};

fn init_logging() {
    recruit_logging::initialize_for_tests();
}

fn signed_in() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::SessionRestored {
            logged_in: true,
            jobs: seed_jobs(),
            uploads: Vec::new(),
        },
    );
    state
}

fn uploaded(id: &str) -> UploadedCv {
    UploadedCv {
        id: id.to_string(),
        name: format!("{id}.pdf"),
        size: "0.1 MB".to_string(),
        upload_date: "2026-10-18".to_string(),
        is_loading: true,
        download_url: None,
    }
}

fn login(state: AppState, username: &str, password: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::LoginSubmitted {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
}

#[test]
fn empty_credentials_are_rejected_before_checking() {
    init_logging();
    let (state, effects) = login(AppState::new(), "admin", "");
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.screen, Screen::Login);
    assert_eq!(view.login_error.as_deref(), Some(EMPTY_CREDENTIALS_MESSAGE));
}

#[test]
fn submitted_credentials_are_checked_once() {
    init_logging();
    let (state, effects) = login(AppState::new(), "admin", "password");
    assert_eq!(
        effects,
        vec![Effect::CheckCredentials {
            username: "admin".to_string(),
            password: "password".to_string(),
        }]
    );
    assert!(state.view().login_pending);

    let (_state, effects) = login(state, "admin", "password");
    assert!(effects.is_empty());
}

#[test]
fn accepted_login_opens_dashboard() {
    init_logging();
    let (state, _) = login(AppState::new(), "admin", "password");
    let (state, _) = update(state, Msg::LoginResolved { accepted: true });
    let view = state.view();
    assert_eq!(view.screen, Screen::Dashboard);
    assert_eq!(view.tab, Tab::Dashboard);
    assert!(view.login_error.is_none());
    assert!(!view.login_pending);
}

#[test]
fn rejected_login_reports_error() {
    init_logging();
    let (state, _) = login(AppState::new(), "admin", "hunter2");
    let (state, _) = update(state, Msg::LoginResolved { accepted: false });
    let view = state.view();
    assert_eq!(view.screen, Screen::Login);
    assert_eq!(view.login_error.as_deref(), Some(INVALID_CREDENTIALS_MESSAGE));
    assert!(!state.is_logged_in());
}

#[test]
fn logout_clears_scan_and_emits_effect() {
    init_logging();
    let (state, _) = update(signed_in(), Msg::CvToggled("d1".to_string()));
    let (state, effects) = update(state, Msg::LogoutClicked);
    assert_eq!(effects, vec![Effect::Logout]);
    assert!(state.selection().is_empty());
    assert_eq!(state.view().screen, Screen::Login);

    let (_state, effects) = update(state, Msg::LogoutClicked);
    assert!(effects.is_empty());
}

#[test]
fn job_messages_become_store_effects() {
    init_logging();
    let draft = JobDraft {
        title: "Platform Engineer".to_string(),
        skills: "Rust, Kubernetes".to_string(),
        ..JobDraft::default()
    };
    let (state, effects) = update(signed_in(), Msg::JobSubmitted(draft.clone()));
    assert_eq!(effects, vec![Effect::CreateJob(draft)]);
    assert_eq!(state.view().tab, Tab::Jobs);

    let (_, effects) = update(state.clone(), Msg::JobDeleteClicked(3));
    assert_eq!(effects, vec![Effect::DeleteJob(3)]);

    let (_, effects) = update(state, Msg::JobSubmitted(JobDraft::default()));
    assert!(effects.is_empty());
}

#[test]
fn jobs_changed_replaces_list() {
    init_logging();
    let jobs: Vec<_> = seed_jobs().into_iter().filter(|job| job.id != 3).collect();
    let (mut state, effects) = update(AppState::new(), Msg::JobsChanged(jobs));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.jobs().len(), 4);
    assert!(state.jobs().iter().all(|job| job.id != 3));
}

#[test]
fn upload_messages_become_store_effects() {
    init_logging();
    let files = vec![FileUpload {
        name: "cv.pdf".to_string(),
        bytes: vec![1, 2, 3],
    }];
    let (_, effects) = update(signed_in(), Msg::FilesChosen(files.clone()));
    assert_eq!(effects, vec![Effect::UploadCvs(files)]);

    let (_, effects) = update(signed_in(), Msg::FilesChosen(Vec::new()));
    assert!(effects.is_empty());

    let ids = vec!["a".to_string(), "b".to_string()];
    let (_, effects) = update(signed_in(), Msg::CvDeleteClicked(ids.clone()));
    assert_eq!(effects, vec![Effect::DeleteCvs(ids)]);
}

#[test]
fn job_list_is_paginated_by_four() {
    init_logging();
    let state = signed_in();
    let view = state.view();
    assert_eq!(view.jobs.items.len(), 4);
    assert_eq!(view.jobs.total_pages, 2);

    let (state, _) = update(
        state,
        Msg::PageChanged {
            list: ListKind::Jobs,
            page: 2,
        },
    );
    let view = state.view();
    assert_eq!(view.jobs.number, 2);
    assert_eq!(view.jobs.items.iter().map(|job| job.id).collect::<Vec<_>>(), vec![5]);
}

#[test]
fn upload_tab_lists_samples_before_uploads() {
    init_logging();
    let view = AppState::new().view();
    assert_eq!(view.uploads.total_items, 4);
    assert_eq!(view.uploads.total_pages, 1);
}

#[test]
fn navigation_sets_tab_and_scan_job() {
    init_logging();
    let (state, _) = update(signed_in(), Msg::Navigated(Route::parse("tab=upload&jobId=5")));
    let view = state.view();
    assert_eq!(view.tab, Tab::Upload);
    assert_eq!(view.scan.job.map(|job| job.id), Some(5));
}

#[test]
fn logged_out_dashboard_actions_are_ignored() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::SessionRestored {
            logged_in: false,
            jobs: seed_jobs(),
            uploads: Vec::new(),
        },
    );

    let actions = vec![
        Msg::JobSubmitted(JobDraft {
            title: "Platform Engineer".to_string(),
            ..JobDraft::default()
        }),
        Msg::JobDeleteClicked(3),
        Msg::FilesChosen(vec![FileUpload {
            name: "cv.pdf".to_string(),
            bytes: vec![1],
        }]),
        Msg::CvDeleteClicked(vec!["d1".to_string()]),
        Msg::CvToggled("d1".to_string()),
        Msg::StartAnalysisClicked,
    ];
    let mut state = state;
    for msg in actions {
        let (next, effects) = update(state, msg);
        assert!(effects.is_empty());
        state = next;
    }

    assert!(state.selection().is_empty());
    assert_eq!(state.phase(), ScanPhase::Idle);
    assert_eq!(state.view().screen, Screen::Login);
}

#[test]
fn logged_out_navigation_lands_on_login_route() {
    init_logging();
    let (mut state, _) = update(
        AppState::new(),
        Msg::SessionRestored {
            logged_in: false,
            jobs: seed_jobs(),
            uploads: Vec::new(),
        },
    );
    state.consume_dirty();

    let (mut state, _) = update(state, Msg::Navigated(Route::parse("tab=jobs&jobId=2")));
    assert!(!state.consume_dirty());
    assert_eq!(state.view().tab, Tab::Dashboard);

    let (state, _) = update(state, Msg::LoginResolved { accepted: true });
    let view = state.view();
    assert_eq!(view.tab, Tab::Dashboard);
    assert_eq!(view.scan.job.map(|job| job.id), Some(1));
}

#[test]
fn new_upload_jumps_to_its_page() {
    init_logging();
    let (state, _) = update(signed_in(), Msg::UploadsChanged(vec![uploaded("u1")]));
    let view = state.view();
    assert_eq!(view.uploads.number, 2);
    assert_eq!(view.uploads.items, vec![uploaded("u1")]);

    let (state, _) = update(
        state,
        Msg::PageChanged {
            list: ListKind::Uploads,
            page: 1,
        },
    );
    let mut loaded = uploaded("u1");
    loaded.is_loading = false;
    let (state, _) = update(state, Msg::UploadsChanged(vec![loaded]));
    assert_eq!(state.view().uploads.number, 1);
}
