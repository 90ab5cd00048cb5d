use std::fs;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

use recruit_core::{update, AppState, FileUpload, JobPosting, JobType, Msg};
use recruit_engine::{
    Auth, CvLibrary, JobBoard, MemoryStorage, PreviewRegistry, SessionStore, SystemClock,
};
use recruit_logging::{recruit_debug, recruit_error, recruit_info, recruit_warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::commands::{parse_command, AppCommand, JobField, HELP};
use super::config::{config_path, read_config, settle_config, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::render::render;

const PROMPT: &str = "> ";

enum LoopEvent {
    Msg(Msg),
    Command(AppCommand),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let loaded = read_config(&path);
    let destination = match &loaded {
        Ok(Some(config)) => config.log_destination,
        _ => AppConfig::default().log_destination,
    };
    logging::initialize(destination);
    let config = settle_config(&path, loaded);

    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage);
    let clock = Arc::new(SystemClock);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (event_tx, event_rx) = mpsc::channel::<LoopEvent>();

    let runner = EffectRunner::new(
        Auth::new(store.clone()),
        JobBoard::new(store.clone(), clock.clone()),
        CvLibrary::new(store.clone(), PreviewRegistry::new(), clock),
        config.upload_delay(),
        msg_tx.clone(),
    );

    spawn_store_watch(&store);
    spawn_msg_forwarder(msg_rx, event_tx.clone());
    spawn_ticker(&config, msg_tx.clone());
    spawn_input_reader(event_tx);

    let mut state = AppState::with_timing(config.timing());
    state = dispatch(state, runner.restore(), &runner);
    println!("{HELP}");
    print_view(&mut state, true);

    let mut tick: u64 = 0;
    while let Ok(event) = event_rx.recv() {
        match event {
            LoopEvent::Msg(msg) => {
                if matches!(msg, Msg::Tick(_)) {
                    tick += 1;
                    recruit_logging::set_tick(tick);
                }
                state = dispatch(state, msg, &runner);
                print_view(&mut state, false);
            }
            LoopEvent::Command(AppCommand::Send(msg)) => {
                state = dispatch(state, msg, &runner);
                print_view(&mut state, false);
            }
            LoopEvent::Command(AppCommand::EditJob { id, field, value }) => {
                match edited_job(&state, id, field, &value) {
                    Ok(job) => {
                        state = dispatch(state, Msg::JobEdited(job), &runner);
                        print_view(&mut state, false);
                    }
                    Err(problem) => println!("! {problem}"),
                }
            }
            LoopEvent::Command(AppCommand::Upload(paths)) => {
                let files = read_files(paths);
                state = dispatch(state, Msg::FilesChosen(files), &runner);
                print_view(&mut state, false);
            }
            LoopEvent::Command(AppCommand::Download(cv_id)) => match runner.download(&cv_id) {
                Some(file) => println!("{} ({} bytes)", file.name, file.bytes.len()),
                None => println!("! no downloadable file for {cv_id}"),
            },
            LoopEvent::Command(AppCommand::Help) => println!("{HELP}"),
            LoopEvent::Command(AppCommand::Quit) | LoopEvent::InputClosed => break,
        }
    }

    recruit_info!("Session ended");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn print_view(state: &mut AppState, force: bool) {
    if state.consume_dirty() || force {
        println!("{}", render(&state.view()));
    }
}

fn edited_job(
    state: &AppState,
    id: u64,
    field: JobField,
    value: &str,
) -> Result<JobPosting, String> {
    let mut job = state
        .jobs()
        .iter()
        .find(|job| job.id == id)
        .cloned()
        .ok_or_else(|| format!("no job with id {id}"))?;
    let value = value.to_string();
    match field {
        JobField::Title => job.title = value,
        JobField::Location => job.location = value,
        JobField::JobType => {
            job.job_type =
                JobType::from_label(&value).ok_or_else(|| format!("unknown job type {value:?}"))?
        }
        JobField::About => job.about = value,
        JobField::Responsibilities => job.responsibilities = value,
        JobField::Qualifications => job.qualifications = value,
        JobField::Skills => {
            job.skills = value
                .split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        }
    }
    Ok(job)
}

fn read_files(paths: Vec<PathBuf>) -> Vec<FileUpload> {
    paths
        .into_iter()
        .filter_map(|path| match fs::read(&path) {
            Ok(bytes) => Some(FileUpload {
                name: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                bytes,
            }),
            Err(err) => {
                println!("! cannot read {}: {err}", path.display());
                None
            }
        })
        .collect()
}

fn spawn_store_watch(store: &SessionStore) {
    let events = store.subscribe();
    thread::spawn(move || {
        for event in events {
            recruit_debug!("Store entry {:?} changed", event.key);
        }
    });
}

fn spawn_msg_forwarder(msg_rx: mpsc::Receiver<Msg>, event_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for msg in msg_rx {
            if event_tx.send(LoopEvent::Msg(msg)).is_err() {
                break;
            }
        }
    });
}

/// Background tick carrying the wall-clock time since the previous one.
fn spawn_ticker(config: &AppConfig, msg_tx: mpsc::Sender<Msg>) {
    let interval = config.tick_interval();
    thread::spawn(move || {
        let mut last = Instant::now();
        loop {
            thread::sleep(interval);
            let now = Instant::now();
            if msg_tx.send(Msg::Tick(now - last)).is_err() {
                break;
            }
            last = now;
        }
    });
}

/// Line editor on its own thread; each parsed command is forwarded to the loop.
fn spawn_input_reader(event_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(err) => {
                recruit_error!("Failed to open line editor: {err}");
                let _ = event_tx.send(LoopEvent::InputClosed);
                return;
            }
        };
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if !forward_line(&line, &event_tx) {
                        return;
                    }
                }
                Err(ReadlineError::Interrupted) => println!("Type `quit` to exit."),
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    recruit_warn!("Failed to read input: {err}");
                    break;
                }
            }
        }
        let _ = event_tx.send(LoopEvent::InputClosed);
    });
}

/// Parses one input line and forwards it. Returns false once the loop is gone.
fn forward_line(line: &str, event_tx: &mpsc::Sender<LoopEvent>) -> bool {
    match parse_command(line) {
        Ok(Some(command)) => event_tx.send(LoopEvent::Command(command)).is_ok(),
        Ok(None) => true,
        Err(err) => {
            println!("! {err}");
            true
        }
    }
}
