//! In-memory file handles backing the CV download links.
//!
//! A handle is acquired when a CV is uploaded and must be released when that CV
//! is deleted; nothing outlives the process.
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use recruit_logging::recruit_debug;
use uuid::Uuid;

const URL_PREFIX: &str = "blob:session/";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accepts only strings minted by a [`PreviewRegistry`].
    pub fn parse(raw: &str) -> Option<Self> {
        raw.starts_with(URL_PREFIX).then(|| Self(raw.to_string()))
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    files: Arc<Mutex<HashMap<PreviewUrl, PreviewFile>>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, name: &str, bytes: &[u8]) -> PreviewUrl {
        let url = PreviewUrl(format!("{URL_PREFIX}{}", Uuid::new_v4()));
        let file = PreviewFile {
            name: name.to_string(),
            bytes: Arc::from(bytes),
        };
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(url.clone(), file);
        recruit_debug!("Acquired preview {url} for {name:?}");
        url
    }

    pub fn resolve(&self, url: &PreviewUrl) -> Option<PreviewFile> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(url)
            .cloned()
    }

    /// Frees the handle. Unknown or already released handles are ignored.
    pub fn release(&self, url: &PreviewUrl) -> bool {
        let released = self
            .files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(url)
            .is_some();
        if released {
            recruit_debug!("Released preview {url}");
        }
        released
    }

    pub fn live_count(&self) -> usize {
        self.files.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_resolve_release() {
        let registry = PreviewRegistry::new();
        let url = registry.acquire("cv.pdf", b"%PDF");
        assert!(url.as_str().starts_with(URL_PREFIX));
        assert_eq!(registry.resolve(&url).unwrap().bytes.as_ref(), b"%PDF");
        assert!(registry.release(&url));
        assert!(!registry.release(&url));
        assert!(registry.resolve(&url).is_none());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn parse_rejects_foreign_urls() {
        assert!(PreviewUrl::parse("https://example.com/cv.pdf").is_none());
        assert!(PreviewUrl::parse("blob:session/abc").is_some());
    }
}
