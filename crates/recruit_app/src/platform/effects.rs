use std::sync::mpsc;
use std::thread;

use recruit_core::{Effect, FileUpload, Msg};
use recruit_engine::{Auth, CvLibrary, JobBoard, PreviewFile, UploadDelay};
use recruit_logging::{recruit_error, recruit_info, recruit_warn};

/// Executes core effects against the engine and reports results as messages.
pub struct EffectRunner {
    auth: Auth,
    jobs: JobBoard,
    cvs: CvLibrary,
    upload_delay: UploadDelay,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        auth: Auth,
        jobs: JobBoard,
        cvs: CvLibrary,
        upload_delay: UploadDelay,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            auth,
            jobs,
            cvs,
            upload_delay,
            msg_tx,
        }
    }

    /// Session contents for the initial `SessionRestored` message.
    pub fn restore(&self) -> Msg {
        let jobs = self.jobs.load().unwrap_or_else(|err| {
            recruit_error!("Failed to load jobs: {err}");
            Vec::new()
        });
        Msg::SessionRestored {
            logged_in: self.auth.check(),
            jobs,
            uploads: self.cvs.list(),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::CheckCredentials { username, password } => {
                let accepted = self.auth.login(&username, &password);
                self.send(Msg::LoginResolved { accepted });
            }
            Effect::Logout => self.auth.logout(),
            Effect::CreateJob(draft) => {
                if let Err(err) = self.jobs.create(draft) {
                    recruit_error!("Failed to create job: {err}");
                }
                self.send(Msg::JobsChanged(self.jobs.list()));
            }
            Effect::SaveJob(job) => {
                if let Err(err) = self.jobs.update(job) {
                    recruit_warn!("Failed to save job: {err}");
                }
                self.send(Msg::JobsChanged(self.jobs.list()));
            }
            Effect::DeleteJob(job_id) => {
                if let Err(err) = self.jobs.delete(job_id) {
                    recruit_error!("Failed to delete job {job_id}: {err}");
                }
                self.send(Msg::JobsChanged(self.jobs.list()));
            }
            Effect::UploadCvs(files) => self.upload(files),
            Effect::DeleteCvs(ids) => {
                if let Err(err) = self.cvs.delete(&ids) {
                    recruit_error!("Failed to delete CVs: {err}");
                }
                self.send(Msg::UploadsChanged(self.cvs.list()));
            }
            Effect::AnalysisStarted { cv_count } => {
                recruit_info!("Analysis started for {cv_count} CV(s)");
            }
            Effect::AnalysisCompleted {
                shortlisted,
                not_shortlisted,
            } => {
                recruit_info!(
                    "Analysis finished: {shortlisted} shortlisted, {not_shortlisted} not shortlisted"
                );
            }
        }
    }

    fn upload(&self, files: Vec<FileUpload>) {
        let added = match self.cvs.upload(files) {
            Ok(added) => added,
            Err(err) => {
                recruit_error!("Failed to store uploads: {err}");
                return;
            }
        };
        self.send(Msg::UploadsChanged(self.cvs.list()));

        let mut rng = rand::thread_rng();
        for cv in added {
            let delay = self.upload_delay.sample(&mut rng);
            let cvs = self.cvs.clone();
            let msg_tx = self.msg_tx.clone();
            thread::spawn(move || {
                thread::sleep(delay);
                match cvs.mark_loaded(&cv.id) {
                    Ok(true) => {
                        let _ = msg_tx.send(Msg::UploadsChanged(cvs.list()));
                    }
                    Ok(false) => {}
                    Err(err) => recruit_warn!("Failed to finish upload {}: {err}", cv.id),
                }
            });
        }
    }

    pub fn download(&self, cv_id: &str) -> Option<PreviewFile> {
        self.cvs.download(cv_id)
    }

    fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }
}
