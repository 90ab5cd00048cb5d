use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use recruit_core::{CvId, FileUpload, UploadedCv};
use recruit_logging::{recruit_info, recruit_warn};

use crate::clock::Clock;
use crate::error::CvError;
use crate::preview::{PreviewFile, PreviewRegistry, PreviewUrl};
use crate::store::{SessionStore, UPLOADED_CVS_KEY};

const TOKEN_LEN: usize = 9;
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Random base-36 id for a new upload.
pub fn random_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LEN)
        .map(|_| char::from(TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())]))
        .collect()
}

/// File size as shown in the CV list, e.g. `2.4 MB`.
pub fn format_size(bytes: usize) -> String {
    format!("{:.1} MB", bytes as f64 / BYTES_PER_MB)
}

/// Bounds for the simulated time an upload spends in the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadDelay {
    pub min: Duration,
    pub max: Duration,
}

impl Default for UploadDelay {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(1500),
            max: Duration::from_millis(2500),
        }
    }
}

impl UploadDelay {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let (low, high) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        if low == high {
            return low;
        }
        rng.gen_range(low..=high)
    }
}

/// Uploaded CV metadata under the `uploadedCVs` key, plus their file handles.
#[derive(Clone)]
pub struct CvLibrary {
    store: SessionStore,
    previews: PreviewRegistry,
    clock: Arc<dyn Clock>,
}

impl CvLibrary {
    pub fn new(store: SessionStore, previews: PreviewRegistry, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            previews,
            clock,
        }
    }

    pub fn list(&self) -> Vec<UploadedCv> {
        self.store.load(UPLOADED_CVS_KEY)
    }

    /// Appends one loading entry per file and returns the new entries.
    pub fn upload(&self, files: Vec<FileUpload>) -> Result<Vec<UploadedCv>, CvError> {
        let today = self.clock.today();
        let mut rng = rand::thread_rng();
        let added: Vec<UploadedCv> = files
            .into_iter()
            .map(|file| UploadedCv {
                id: random_token(&mut rng),
                size: format_size(file.bytes.len()),
                upload_date: today.clone(),
                is_loading: true,
                download_url: Some(self.previews.acquire(&file.name, &file.bytes).to_string()),
                name: file.name,
            })
            .collect();

        let result = self.store.modify(UPLOADED_CVS_KEY, |cvs: &mut Vec<UploadedCv>| {
            cvs.extend(added.iter().cloned());
        });
        if let Err(err) = result {
            self.release_all(&added);
            return Err(err.into());
        }
        recruit_info!("Uploaded {} CV(s)", added.len());
        Ok(added)
    }

    /// Ends the loading state of `id`. Returns false if the CV is gone.
    pub fn mark_loaded(&self, id: &str) -> Result<bool, CvError> {
        let updated = self
            .store
            .modify_if(UPLOADED_CVS_KEY, |cvs: &mut Vec<UploadedCv>| {
                let cv = cvs.iter_mut().find(|cv| cv.id == id)?;
                cv.is_loading = false;
                Some(())
            })?;
        Ok(updated.is_some())
    }

    /// Removes every listed CV and releases its file handle.
    pub fn delete(&self, ids: &[CvId]) -> Result<usize, CvError> {
        let removed = self
            .store
            .modify_if(UPLOADED_CVS_KEY, |cvs: &mut Vec<UploadedCv>| {
                let (gone, kept): (Vec<_>, Vec<_>) =
                    cvs.drain(..).partition(|cv| ids.contains(&cv.id));
                *cvs = kept;
                (!gone.is_empty()).then_some(gone)
            })?
            .unwrap_or_default();
        self.release_all(&removed);
        if !removed.is_empty() {
            recruit_info!("Deleted {} CV(s)", removed.len());
        }
        Ok(removed.len())
    }

    pub fn download(&self, id: &str) -> Option<PreviewFile> {
        let cv = self.list().into_iter().find(|cv| cv.id == id)?;
        let url = PreviewUrl::parse(cv.download_url.as_deref()?)?;
        self.previews.resolve(&url)
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    fn release_all(&self, cvs: &[UploadedCv]) {
        for cv in cvs {
            let Some(raw) = cv.download_url.as_deref() else {
                continue;
            };
            match PreviewUrl::parse(raw) {
                Some(url) => {
                    self.previews.release(&url);
                }
                None => recruit_warn!("CV {} carries a foreign download url {raw:?}", cv.id),
            }
        }
    }
}
